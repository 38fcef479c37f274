use super::storage::{Storage, StorageError};
use crate::libs::task::TaskRecord;

/// Namespace holding the task snapshot.
pub const TASKS_KEY: &str = "tasks";

/// Snapshot access for the task collection.
pub struct Tasks;

impl Tasks {
    /// Loads the full collection. A missing snapshot yields an empty collection.
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Result<Vec<TaskRecord>, StorageError> {
        match storage.read(TASKS_KEY)? {
            Some(raw) => {
                let tasks: Vec<TaskRecord> = serde_json::from_str(&raw)?;
                tracing::debug!(count = tasks.len(), "task snapshot loaded");
                Ok(tasks)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the stored snapshot with `tasks`, keeping their order.
    pub fn save<S: Storage + ?Sized>(storage: &mut S, tasks: &[TaskRecord]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(tasks)?;
        storage.write(TASKS_KEY, &raw)?;
        tracing::debug!(count = tasks.len(), "task snapshot saved");
        Ok(())
    }
}

//! Persistence layer for taskdeck.
//!
//! Everything is stored as whole snapshots in a namespace-keyed [`Storage`]:
//! the task collection under `tasks` and the color theme under `theme`.
//! There are no partial writes and no schema versioning; a snapshot is a JSON
//! array of [`TaskRecord`](crate::libs::task::TaskRecord) objects.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::db::{storage::FileStorage, tasks::Tasks};
//!
//! let mut storage = FileStorage::new();
//! let tasks = Tasks::load(&storage)?;
//! Tasks::save(&mut storage, &tasks)?;
//! # Ok::<(), taskdeck::db::storage::StorageError>(())
//! ```

pub mod settings;
pub mod storage;
pub mod tasks;

pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

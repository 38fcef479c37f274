//! Application state and mutation operations.
//!
//! [`TaskBoard`] is the single owner of everything the front-end works with:
//! the task collection (newest first), the selection set, the current filters
//! and sort order, and the color theme. Every mutation runs to completion on
//! the caller's thread and ends with one full snapshot write.
//!
//! ## Mutation rules
//!
//! - **add**: rejected when the trimmed title is empty; otherwise prepended
//! - **toggle completion / rename**: unknown ids are a silent no-op
//! - **delete one / delete many / clear completed**: ask [`Confirm`] first,
//!   declining leaves the state unchanged
//!
//! If the snapshot write fails the in-memory change is kept and the storage
//! error is returned; nothing is retried.
//!
//! ## Usage
//!
//! ```rust
//! use taskdeck::db::MemoryStorage;
//! use taskdeck::libs::board::TaskBoard;
//! use taskdeck::libs::confirm::AssumeYes;
//! use taskdeck::libs::task::TaskDraft;
//!
//! let mut board = TaskBoard::open(MemoryStorage::new())?;
//! let task = board.add(TaskDraft::new("Write report"))?;
//! board.toggle_completion(&task.id)?;
//! board.clear_completed(&mut AssumeYes)?;
//! assert!(board.tasks().is_empty());
//! # Ok::<(), taskdeck::libs::board::BoardError>(())
//! ```

use super::confirm::Confirm;
use super::messages::Message;
use super::query::{self, CategoryFilter, PriorityFilter, SortOrder, StatusFilter, TaskQuery};
use super::stats::Statistics;
use super::task::{generate_id, TaskDraft, TaskRecord, Theme};
use crate::db::settings::Settings;
use crate::db::storage::{Storage, StorageError};
use crate::db::tasks::Tasks;
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// Title was empty after trimming; nothing was changed.
    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The confirmation prompt itself failed.
    #[error("Confirmation prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// One user action, mapped to exactly one board operation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    Add(TaskDraft),
    ToggleCompletion(String),
    Rename { id: String, title: String },
    Delete(String),
    DeleteMany(Vec<String>),
    DeleteSelected,
    ClearCompleted,
    ToggleSelection(String),
    ToggleSelectAll,
    SetCategory(CategoryFilter),
    SetStatus(StatusFilter),
    SetPriority(PriorityFilter),
    SetSearch(String),
    CycleSort,
    ToggleTheme,
}

/// Result of a dispatched [`BoardCommand`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(TaskRecord),
    Toggled(Option<TaskRecord>),
    Renamed(bool),
    Deleted(usize),
    Cleared(usize),
    /// Selection size after the change.
    Selection(usize),
    ViewChanged,
    ThemeChanged(Theme),
}

/// Result of resolving a user-typed id prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdMatch {
    Found(String),
    Ambiguous(usize),
    NotFound,
}

type Clock = Box<dyn Fn() -> DateTime<Local>>;

pub struct TaskBoard<S: Storage> {
    storage: S,
    tasks: Vec<TaskRecord>,
    selection: BTreeSet<String>,
    query: TaskQuery,
    sort: SortOrder,
    theme: Theme,
    clock: Clock,
}

impl<S: Storage> TaskBoard<S> {
    /// Loads the snapshot and theme from `storage`.
    pub fn open(storage: S) -> Result<Self, BoardError> {
        Self::with_clock(storage, Box::new(Local::now))
    }

    pub fn with_clock(storage: S, clock: Clock) -> Result<Self, BoardError> {
        let tasks = Tasks::load(&storage)?;
        let theme = Settings::theme(&storage)?;
        Ok(TaskBoard {
            storage,
            tasks,
            selection: BTreeSet::new(),
            query: TaskQuery::default(),
            sort: SortOrder::default(),
            theme,
            clock,
        })
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)().with_timezone(&Utc)
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)().date_naive()
    }

    // Mutations

    pub fn add(&mut self, draft: TaskDraft) -> Result<TaskRecord, BoardError> {
        if draft.title.trim().is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let task = TaskRecord::new(generate_id(), draft, self.now());
        self.tasks.insert(0, task.clone());
        tracing::debug!(id = %task.id, title = %task.title, "task added");
        self.persist()?;
        Ok(task)
    }

    /// Flips completion of `id`. Returns the updated record, or `None` when the id is unknown.
    pub fn toggle_completion(&mut self, id: &str) -> Result<Option<TaskRecord>, BoardError> {
        let now = self.now();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.set_completed(!task.completed, now);
        let task = task.clone();
        tracing::debug!(id = %task.id, completed = task.completed, "task toggled");
        self.persist()?;
        Ok(Some(task))
    }

    /// Renames `id`. `Ok(false)` when the id is unknown or the title is unchanged.
    pub fn rename(&mut self, id: &str, title: &str) -> Result<bool, BoardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        if task.title == title {
            return Ok(false);
        }
        task.title = title.to_string();
        tracing::debug!(id, title, "task renamed");
        self.persist()?;
        Ok(true)
    }

    pub fn delete_one(&mut self, id: &str, confirm: &mut dyn Confirm) -> Result<bool, BoardError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        if !confirm.confirm(&Message::ConfirmDeleteTask.to_string())? {
            return Ok(false);
        }
        self.tasks.retain(|t| t.id != id);
        self.selection.remove(id);
        tracing::debug!(id, "task deleted");
        self.persist()?;
        Ok(true)
    }

    /// Deletes every task whose id is in `ids`. Returns how many were removed.
    ///
    /// Unknown ids are ignored; when none of `ids` exists nothing is asked or written.
    pub fn delete_many(&mut self, ids: &[String], confirm: &mut dyn Confirm) -> Result<usize, BoardError> {
        let ids: BTreeSet<String> = self.tasks.iter().filter(|t| ids.contains(&t.id)).map(|t| t.id.clone()).collect();
        if ids.is_empty() {
            return Ok(0);
        }
        if !confirm.confirm(&Message::ConfirmDeleteTasks(ids.len()).to_string())? {
            return Ok(0);
        }
        let before = self.tasks.len();
        self.tasks.retain(|t| !ids.contains(&t.id));
        self.selection.retain(|id| !ids.contains(id));
        let removed = before - self.tasks.len();
        tracing::debug!(removed, "tasks deleted");
        self.persist()?;
        Ok(removed)
    }

    pub fn delete_selected(&mut self, confirm: &mut dyn Confirm) -> Result<usize, BoardError> {
        let ids: Vec<String> = self.selection.iter().cloned().collect();
        self.delete_many(&ids, confirm)
    }

    /// Removes all completed tasks and empties the selection.
    pub fn clear_completed(&mut self, confirm: &mut dyn Confirm) -> Result<usize, BoardError> {
        if !self.tasks.iter().any(|t| t.completed) {
            return Ok(0);
        }
        if !confirm.confirm(&Message::ConfirmClearCompleted.to_string())? {
            return Ok(0);
        }
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        self.selection.clear();
        let removed = before - self.tasks.len();
        tracing::debug!(removed, "completed tasks cleared");
        self.persist()?;
        Ok(removed)
    }

    fn persist(&mut self) -> Result<(), BoardError> {
        Tasks::save(&mut self.storage, &self.tasks)?;
        Ok(())
    }

    // Selection

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Adds or removes `id` from the selection. Unknown ids are ignored.
    pub fn toggle_selection(&mut self, id: &str) -> usize {
        if !self.selection.remove(id) && self.get(id).is_some() {
            self.selection.insert(id.to_string());
        }
        self.selection.len()
    }

    /// Selects every task in the current view, or clears the selection when
    /// it already equals exactly that set.
    pub fn toggle_select_all(&mut self) -> usize {
        let visible: BTreeSet<String> = self.filtered().into_iter().map(|t| t.id.clone()).collect();
        if self.selection == visible {
            self.selection.clear();
        } else {
            self.selection = visible;
        }
        self.selection.len()
    }

    // View state

    pub fn query(&self) -> &TaskQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: TaskQuery) {
        self.query = query;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.query.status = status;
    }

    pub fn set_priority(&mut self, priority: PriorityFilter) {
        self.query.priority = priority;
    }

    pub fn set_search(&mut self, search: &str) {
        self.query.search = search.to_string();
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn cycle_sort(&mut self) -> SortOrder {
        self.sort = self.sort.next();
        self.sort
    }

    /// Tasks matching the current filters, in collection order.
    pub fn filtered(&self) -> Vec<&TaskRecord> {
        query::query(&self.tasks, &self.query, self.today())
    }

    /// Tasks matching the current filters, in the current sort order.
    pub fn visible(&self) -> Vec<&TaskRecord> {
        query::sort(&self.filtered(), self.sort)
    }

    pub fn statistics(&self) -> Statistics {
        let now = (self.clock)();
        Statistics::collect(&self.tasks, now.with_timezone(&Utc), now.date_naive())
    }

    // Theme

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme, BoardError> {
        self.theme = theme;
        Settings::save_theme(&mut self.storage, theme)?;
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, BoardError> {
        self.set_theme(self.theme.toggled())
    }

    /// Resolves a full id or a unique id prefix.
    pub fn resolve_id(&self, prefix: &str) -> IdMatch {
        if self.get(prefix).is_some() {
            return IdMatch::Found(prefix.to_string());
        }
        let matches: Vec<&TaskRecord> = self.tasks.iter().filter(|t| !prefix.is_empty() && t.id.starts_with(prefix)).collect();
        match matches.as_slice() {
            [] => IdMatch::NotFound,
            [task] => IdMatch::Found(task.id.clone()),
            many => IdMatch::Ambiguous(many.len()),
        }
    }

    pub fn dispatch(&mut self, command: BoardCommand, confirm: &mut dyn Confirm) -> Result<Outcome, BoardError> {
        let outcome = match command {
            BoardCommand::Add(draft) => Outcome::Added(self.add(draft)?),
            BoardCommand::ToggleCompletion(id) => Outcome::Toggled(self.toggle_completion(&id)?),
            BoardCommand::Rename { id, title } => Outcome::Renamed(self.rename(&id, &title)?),
            BoardCommand::Delete(id) => Outcome::Deleted(usize::from(self.delete_one(&id, confirm)?)),
            BoardCommand::DeleteMany(ids) => Outcome::Deleted(self.delete_many(&ids, confirm)?),
            BoardCommand::DeleteSelected => Outcome::Deleted(self.delete_selected(confirm)?),
            BoardCommand::ClearCompleted => Outcome::Cleared(self.clear_completed(confirm)?),
            BoardCommand::ToggleSelection(id) => Outcome::Selection(self.toggle_selection(&id)),
            BoardCommand::ToggleSelectAll => Outcome::Selection(self.toggle_select_all()),
            BoardCommand::SetCategory(category) => {
                self.set_category(category);
                Outcome::ViewChanged
            }
            BoardCommand::SetStatus(status) => {
                self.set_status(status);
                Outcome::ViewChanged
            }
            BoardCommand::SetPriority(priority) => {
                self.set_priority(priority);
                Outcome::ViewChanged
            }
            BoardCommand::SetSearch(search) => {
                self.set_search(&search);
                Outcome::ViewChanged
            }
            BoardCommand::CycleSort => {
                self.cycle_sort();
                Outcome::ViewChanged
            }
            BoardCommand::ToggleTheme => Outcome::ThemeChanged(self.toggle_theme()?),
        };
        Ok(outcome)
    }
}

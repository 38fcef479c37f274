//! Filtering and sorting over the task collection.
//!
//! All functions here are pure: they borrow the collection and return a new
//! vector of references, never mutating or reordering the input.
//!
//! ## Filters
//!
//! Four filters compose by logical AND:
//!
//! - **Category**: `all` or an exact category
//! - **Status**: `all`, `pending`, `completed`, or `today` (due today)
//! - **Priority**: `all` or an exact priority
//! - **Search**: case-insensitive substring of title or description
//!
//! ## Sorting
//!
//! ```text
//! newest    createdAt descending
//! oldest    createdAt ascending
//! priority  high(3) > medium(2) > low(1) > other(0)
//! dueDate   ascending, tasks without a due date last
//! ```
//!
//! Sorting is stable, so tasks with equal keys keep their collection order.

use super::task::{Category, Priority, TaskRecord};
use chrono::{Days, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, task: &TaskRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &task.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    /// Due date is today.
    Today,
}

impl StatusFilter {
    pub fn matches(&self, task: &TaskRecord, today: NaiveDate) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Completed => task.completed,
            StatusFilter::Today => is_due_today(task.due_date, today),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
            StatusFilter::Today => "today",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(&self, task: &TaskRecord) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => &task.priority == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(PriorityFilter::All)
        } else {
            Ok(PriorityFilter::Only(s.parse()?))
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityFilter::All => f.write_str("all"),
            PriorityFilter::Only(priority) => write!(f, "{}", priority),
        }
    }
}

/// The combined filter state of a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskQuery {
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub search: String,
}

impl TaskQuery {
    pub fn matches(&self, task: &TaskRecord, today: NaiveDate) -> bool {
        self.category.matches(task)
            && self.status.matches(task, today)
            && self.priority.matches(task)
            && matches_search(task, &self.search)
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }
}

/// Case-insensitive substring match on title or description. Empty text matches everything.
pub fn matches_search(task: &TaskRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    task.title.to_lowercase().contains(&needle) || task.description.to_lowercase().contains(&needle)
}

/// Tasks matching `query`, in collection order.
pub fn query<'a>(tasks: &'a [TaskRecord], query: &TaskQuery, today: NaiveDate) -> Vec<&'a TaskRecord> {
    tasks.iter().filter(|task| query.matches(task, today)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Priority,
    DueDate,
}

impl SortOrder {
    /// Next order in the newest → oldest → priority → dueDate cycle.
    pub fn next(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Priority,
            SortOrder::Priority => SortOrder::DueDate,
            SortOrder::DueDate => SortOrder::Newest,
        }
    }

    pub fn compare(self, a: &TaskRecord, b: &TaskRecord) -> Ordering {
        match self {
            SortOrder::Newest => b.created_at.cmp(&a.created_at),
            SortOrder::Oldest => a.created_at.cmp(&b.created_at),
            SortOrder::Priority => b.priority.weight().cmp(&a.priority.weight()),
            SortOrder::DueDate => match (a.due_date, b.due_date) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            },
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::Priority => "By Priority",
            SortOrder::DueDate => "By Due Date",
        };
        f.write_str(title)
    }
}

/// Returns a new vector ordered by `order`; the input is left untouched.
pub fn sort<'a>(tasks: &[&'a TaskRecord], order: SortOrder) -> Vec<&'a TaskRecord> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| order.compare(a, b));
    sorted
}

pub fn is_due_today(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date == Some(today)
}

pub fn is_due_tomorrow(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.is_some() && due_date == today.checked_add_days(Days::new(1))
}

/// Due date strictly before today. Completion is not considered here.
pub fn is_overdue(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.is_some_and(|due| due < today)
}

//! Task record model.
//!
//! A [`TaskRecord`] is one user-created to-do item. Records are kept in a
//! newest-first `Vec` owned by the [`TaskBoard`](crate::libs::board::TaskBoard)
//! and serialized as a whole snapshot with the field names listed below.
//!
//! ## Invariants
//!
//! - `id` is unique across the collection and never changes
//! - `completed_at` is `Some` exactly when `completed` is `true`
//! - `created_at` is set once at creation
//! - `title` is never empty after trimming
//!
//! Category and priority are closed enums. Values outside the known set are
//! kept verbatim in an `Other` variant so that a snapshot written by another
//! producer loads without loss.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Work,
    Personal,
    Shopping,
    Health,
    Learning,
    Other(String),
}

impl Category {
    /// Built-in categories in sidebar and chart order.
    pub const BUILTIN: [Category; 5] = [
        Category::Work,
        Category::Personal,
        Category::Shopping,
        Category::Health,
        Category::Learning,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Shopping => "shopping",
            Category::Health => "health",
            Category::Learning => "learning",
            Category::Other(name) => name,
        }
    }

    /// Human readable name, e.g. `Work`.
    pub fn label(&self) -> String {
        match self {
            Category::Work => "Work".to_string(),
            Category::Personal => "Personal".to_string(),
            Category::Shopping => "Shopping".to_string(),
            Category::Health => "Health".to_string(),
            Category::Learning => "Learning".to_string(),
            Category::Other(name) => name.clone(),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Work
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "work" => Category::Work,
            "personal" => Category::Personal,
            "shopping" => Category::Shopping,
            "health" => Category::Health,
            "learning" => Category::Learning,
            _ => Category::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s.trim().to_lowercase()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub const BUILTIN: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort weight: high 3, medium 2, low 1, anything else 0.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Other(_) => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Other(name) => name,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Priority::High => "High".to_string(),
            Priority::Medium => "Medium".to_string(),
            Priority::Low => "Low".to_string(),
            Priority::Other(name) => name.clone(),
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Priority::from(s.trim().to_lowercase()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme stored in the `theme` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// User input for a new task, before an id and timestamp are assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn new(title: &str) -> Self {
        TaskDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// One task as stored in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Builds a pending record from a draft. Title and description are trimmed.
    pub fn new(id: String, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        TaskRecord {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category,
            priority: draft.priority,
            due_date: draft.due_date,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Sets the completion flag and keeps `completed_at` in step with it.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = if completed { Some(now) } else { None };
    }

    /// First eight characters of the id, used as the short display id.
    pub fn short_id(&self) -> &str {
        let end = self.id.char_indices().nth(8).map(|(i, _)| i).unwrap_or(self.id.len());
        &self.id[..end]
    }
}

/// Generates a new opaque task id.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unknown_category_round_trips() {
        let category: Category = serde_json::from_str("\"errands\"").unwrap();
        assert_eq!(category, Category::Other("errands".to_string()));
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"errands\"");
    }

    #[test]
    fn priority_weights() {
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::Medium.weight(), 2);
        assert_eq!(Priority::Low.weight(), 1);
        assert_eq!(Priority::Other("urgent".to_string()).weight(), 0);
    }

    #[test]
    fn set_completed_keeps_timestamp_in_step() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let mut task = TaskRecord::new(generate_id(), TaskDraft::new("  Water plants "), created);
        assert_eq!(task.title, "Water plants");

        task.set_completed(true, created);
        assert_eq!(task.completed_at, Some(created));
        task.set_completed(false, created);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn snapshot_field_names() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let draft = TaskDraft::new("Buy milk")
            .category(Category::Shopping)
            .priority(Priority::Low)
            .due(NaiveDate::from_ymd_opt(2025, 3, 2));
        let task = TaskRecord::new("abc".to_string(), draft, created);
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["dueDate"], "2025-03-02");
        assert_eq!(value["category"], "shopping");
        assert_eq!(value["priority"], "low");
        assert_eq!(value["completedAt"], serde_json::Value::Null);
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn short_id_handles_short_ids() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let task = TaskRecord::new("abc".to_string(), TaskDraft::new("x"), created);
        assert_eq!(task.short_id(), "abc");
    }
}

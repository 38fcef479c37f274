//! Display implementation for taskdeck messages.
//!
//! All user-facing text is defined here, in one `match`, so wording stays
//! consistent between the one-shot commands, the interactive menu and the
//! confirmation prompts.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' added", title),
            Message::TaskRenamed(title) => format!("Task renamed to '{}'", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as pending", title),
            Message::TaskDeleted => "Task deleted".to_string(),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s)", count),
            Message::CompletedTasksCleared(count) => format!("Cleared {} completed task(s)", count),
            Message::TaskNotFound(id) => format!("Task '{}' not found", id),
            Message::TaskIdAmbiguous(id, count) => format!("Id prefix '{}' matches {} tasks, use a longer prefix", id, count),
            Message::TaskTitleEmpty => "Please enter a task title".to_string(),
            Message::TaskTitleUnchanged => "Title unchanged".to_string(),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}', expected YYYY-MM-DD", value),
            Message::ConfirmDeleteTask => "Are you sure you want to delete this task?".to_string(),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} selected task(s)?", count),
            Message::ConfirmClearCompleted => "Clear all completed tasks?".to_string(),
            Message::NoCompletedTasks => "There are no completed tasks".to_string(),
            Message::NoTasksSelected => "No tasks selected".to_string(),

            // === VIEW MESSAGES ===
            Message::TasksHeading(label) => format!("{} Tasks", label),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::EmptyStateSearch => "Try a different search term".to_string(),
            Message::EmptyStateAdd => "Add a new task to get started!".to_string(),
            Message::Today => "Today".to_string(),
            Message::Tomorrow => "Tomorrow".to_string(),
            Message::NoDueDate => "No due date".to_string(),
            Message::Overdue => "(Overdue)".to_string(),
            Message::StatusDone => "done".to_string(),
            Message::StatusPending => "pending".to_string(),
            Message::SortChanged(order) => format!("Sort: {}", order),
            Message::SelectionCount(count) => format!("{} task(s) selected", count),
            Message::ThemeChanged(theme) => format!("Theme set to {}", theme),
            Message::StatisticsHeader => "Statistics".to_string(),
            Message::CategoryChartHeader => "Tasks by category".to_string(),
            Message::PriorityChartHeader => "Tasks by priority".to_string(),
            Message::FilterSummary {
                category,
                status,
                priority,
                sort,
            } => format!("category: {} | status: {} | priority: {} | sort: {}", category, status, priority, sort),

            // === INTERACTIVE MESSAGES ===
            Message::SelectAction => "What would you like to do?".to_string(),
            Message::ActionAddTask => "Add task".to_string(),
            Message::ActionToggleTask => "Complete / reopen task".to_string(),
            Message::ActionRenameTask => "Rename task".to_string(),
            Message::ActionDeleteTask => "Delete task".to_string(),
            Message::ActionSelectTasks => "Select tasks".to_string(),
            Message::ActionSelectAll => "Select / deselect all".to_string(),
            Message::ActionDeleteSelected => "Delete selected".to_string(),
            Message::ActionClearCompleted => "Clear completed".to_string(),
            Message::ActionFilterCategory => "Filter by category".to_string(),
            Message::ActionFilterStatus => "Filter by status".to_string(),
            Message::ActionFilterPriority => "Filter by priority".to_string(),
            Message::ActionSearch => "Search".to_string(),
            Message::ActionCycleSort => "Change sort order".to_string(),
            Message::ActionStatistics => "Show statistics".to_string(),
            Message::ActionToggleTheme => "Toggle theme".to_string(),
            Message::ActionQuit => "Quit".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),
            Message::PromptSearch => "Search text (empty to clear)".to_string(),
            Message::PromptSelectTask => "Select task".to_string(),
            Message::PromptSelectTasks => "Select tasks (space to select, enter to confirm)".to_string(),
            Message::PromptCategoryFilter => "Show category".to_string(),
            Message::PromptStatusFilter => "Show status".to_string(),
            Message::PromptPriorityFilter => "Show priority".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDefaults => "New task defaults".to_string(),
            Message::ConfigModuleView => "List view".to_string(),
            Message::ConfigModuleSafety => "Confirmations".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptDefaultCategory => "Default category".to_string(),
            Message::PromptDefaultPriority => "Default priority".to_string(),
            Message::PromptDefaultSort => "Default sort order".to_string(),
            Message::PromptDefaultStatus => "Default status filter".to_string(),
            Message::PromptConfirmDestructive => "Ask before deleting tasks?".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::StorageWriteFailed(error) => format!("Changes were not saved: {}", error),
        };

        write!(f, "{}", text)
    }
}

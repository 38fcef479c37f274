//! Summary statistics over the whole task collection.
//!
//! Statistics are always computed over the full collection, never over the
//! filtered view.
//!
//! ## Formulas
//!
//! ```text
//! pending          = total - completed
//! overdue          = !completed && dueDate < today
//! upcoming         = !completed && dueDate present && !overdue
//! completion rate  = round(completed / total * 100), 0 when total = 0
//! weekly average   = completed with completedAt > now - 7 days, / 7, one decimal
//! chart ratio      = count / max(largest count in the group, 1)
//! ```

use super::query::{is_due_today, is_overdue};
use super::task::{Category, Priority, TaskRecord};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// One bar of a category or priority chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub count: usize,
    /// Share of the largest bar in the same group, `0.0..=1.0`.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub due_today: usize,
    pub overdue: usize,
    pub upcoming: usize,
    /// Percentage, already rounded.
    pub completion_rate: u32,
    /// Completions per day over the last week, one decimal place.
    pub weekly_average: f64,
    pub by_category: Vec<ChartBar>,
    pub by_priority: Vec<ChartBar>,
}

impl Statistics {
    pub fn collect(tasks: &[TaskRecord], now: DateTime<Utc>, today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let due_today = tasks.iter().filter(|t| is_due_today(t.due_date, today)).count();
        let overdue = tasks.iter().filter(|t| !t.completed && is_overdue(t.due_date, today)).count();
        let upcoming = tasks
            .iter()
            .filter(|t| !t.completed && t.due_date.is_some() && !is_overdue(t.due_date, today))
            .count();

        Statistics {
            total,
            completed,
            pending: total - completed,
            due_today,
            overdue,
            upcoming,
            completion_rate: completion_rate(completed, total),
            weekly_average: weekly_average(tasks, now),
            by_category: chart(Category::BUILTIN.iter().map(|c| (c.label(), tasks.iter().filter(|t| &t.category == c).count()))),
            by_priority: chart(Priority::BUILTIN.iter().map(|p| (p.label(), tasks.iter().filter(|t| &t.priority == p).count()))),
        }
    }
}

pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

/// Average completions per day over the seven days before `now`.
pub fn weekly_average(tasks: &[TaskRecord], now: DateTime<Utc>) -> f64 {
    let week_ago = now - Duration::days(7);
    let recent = tasks
        .iter()
        .filter(|t| t.completed && t.completed_at.is_some_and(|at| at > week_ago))
        .count();
    (recent as f64 / 7.0 * 10.0).round() / 10.0
}

/// Task count per sidebar entry: `all` followed by every built-in category.
pub fn category_counts(tasks: &[TaskRecord]) -> Vec<(Option<Category>, usize)> {
    let mut counts = vec![(None, tasks.len())];
    counts.extend(
        Category::BUILTIN
            .iter()
            .map(|category| (Some(category.clone()), tasks.iter().filter(|t| &t.category == category).count())),
    );
    counts
}

fn chart(counts: impl Iterator<Item = (String, usize)>) -> Vec<ChartBar> {
    let counts: Vec<(String, usize)> = counts.collect();
    let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);
    counts
        .into_iter()
        .map(|(label, count)| ChartBar {
            label,
            count,
            ratio: count as f64 / max as f64,
        })
        .collect()
}

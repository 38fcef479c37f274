//! Terminal rendering of task lists and statistics.

use super::board::TaskBoard;
use super::formatter::{format_bar, format_due_date, format_timestamp};
use super::messages::Message;
use super::query::{is_overdue, CategoryFilter};
use super::stats::{category_counts, ChartBar, Statistics};
use super::task::{TaskRecord, Theme};
use crate::db::storage::Storage;
use crate::msg_print;
use chrono::NaiveDate;
use prettytable::{format, row, Table};
use std::collections::BTreeSet;

const BAR_WIDTH: usize = 24;

pub struct View {}

impl View {
    /// Prints the heading, active filters and the visible tasks of `board`.
    pub fn board<S: Storage>(board: &TaskBoard<S>) {
        let heading = match &board.query().category {
            CategoryFilter::All => Message::TasksHeading("All".to_string()),
            CategoryFilter::Only(category) => Message::TasksHeading(category.label()),
        };
        msg_print!(heading);
        msg_print!(Message::FilterSummary {
            category: board.query().category.to_string(),
            status: board.query().status.to_string(),
            priority: board.query().priority.to_string(),
            sort: board.sort_order().to_string(),
        });

        let visible = board.visible();
        if visible.is_empty() {
            Self::empty_state(board.query().is_searching());
            return;
        }
        Self::task_table(&visible, board.today(), board.selection(), board.theme()).printstd();
        if !board.selection().is_empty() {
            msg_print!(Message::SelectionCount(board.selection().len()));
        }
    }

    pub fn empty_state(searching: bool) {
        msg_print!(Message::NoTasksFound);
        if searching {
            msg_print!(Message::EmptyStateSearch);
        } else {
            msg_print!(Message::EmptyStateAdd);
        }
    }

    pub fn task_table(tasks: &[&TaskRecord], today: NaiveDate, selection: &BTreeSet<String>, theme: Theme) -> Table {
        let mut table = Self::table(theme);
        table.set_titles(row!["", "ID", "TITLE", "PRIORITY", "CATEGORY", "DUE", "CREATED", "STATUS"]);

        for task in tasks {
            let selected = if selection.contains(&task.id) { "[x]" } else { "[ ]" };
            let mut due = format_due_date(task.due_date, today);
            if !task.completed && is_overdue(task.due_date, today) {
                due = format!("{} {}", due, Message::Overdue);
            }
            let status = if task.completed { Message::StatusDone } else { Message::StatusPending };
            let title = if task.description.is_empty() {
                task.title.clone()
            } else {
                format!("{}\n{}", task.title, task.description)
            };

            table.add_row(row![
                selected,
                task.short_id(),
                title,
                task.priority,
                task.category,
                due,
                format_timestamp(task.created_at, today),
                status
            ]);
        }
        table
    }

    /// Quick counters: total, completed, pending, due today, then per-category counts.
    pub fn quick_stats(tasks: &[TaskRecord], stats: &Statistics, theme: Theme) {
        let mut table = Self::table(theme);
        table.set_titles(row!["TOTAL", "COMPLETED", "PENDING", "TODAY"]);
        table.add_row(row![stats.total, stats.completed, stats.pending, stats.due_today]);
        table.printstd();

        let mut categories = Self::table(theme);
        for (category, count) in category_counts(tasks) {
            let label = category.map(|c| c.label()).unwrap_or_else(|| "All".to_string());
            categories.add_row(row![label, count]);
        }
        categories.printstd();
    }

    pub fn statistics(stats: &Statistics, theme: Theme) {
        msg_print!(Message::StatisticsHeader, true);
        let mut table = Self::table(theme);
        table.set_titles(row!["COMPLETION", "AVG / DAY (7D)", "OVERDUE", "UPCOMING"]);
        table.add_row(row![
            format!("{}%", stats.completion_rate),
            format!("{:.1}", stats.weekly_average),
            stats.overdue,
            stats.upcoming
        ]);
        table.printstd();

        msg_print!(Message::CategoryChartHeader, true);
        Self::chart(&stats.by_category, theme).printstd();
        msg_print!(Message::PriorityChartHeader, true);
        Self::chart(&stats.by_priority, theme).printstd();
    }

    pub fn chart(bars: &[ChartBar], theme: Theme) -> Table {
        let mut table = Self::table(theme);
        for bar in bars {
            table.add_row(row![bar.label, format_bar(bar.ratio, BAR_WIDTH), bar.count]);
        }
        table
    }

    fn table(theme: Theme) -> Table {
        let mut table = Table::new();
        match theme {
            Theme::Light => table.set_format(*format::consts::FORMAT_DEFAULT),
            Theme::Dark => table.set_format(*format::consts::FORMAT_BOX_CHARS),
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::TaskDraft;
    use chrono::{TimeZone, Utc};

    #[test]
    fn task_table_marks_selection_and_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let created = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        let late = TaskRecord::new("aaaaaaaa11".to_string(), TaskDraft::new("Late").due(NaiveDate::from_ymd_opt(2025, 5, 1)), created);
        let fresh = TaskRecord::new("bbbbbbbb22".to_string(), TaskDraft::new("Fresh").due(Some(today)), created);
        let selection: BTreeSet<String> = [late.id.clone()].into_iter().collect();

        let table = View::task_table(&[&late, &fresh], today, &selection, Theme::Light);
        let rendered = table.to_string();

        assert_eq!(table.len(), 2);
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("(Overdue)"));
        assert!(rendered.contains("aaaaaaaa"));
        assert!(!rendered.contains("aaaaaaaa11"));
        assert!(rendered.contains("Today"));
    }

    #[test]
    fn chart_scales_bars() {
        let bars = vec![
            ChartBar {
                label: "High".to_string(),
                count: 2,
                ratio: 1.0,
            },
            ChartBar {
                label: "Low".to_string(),
                count: 0,
                ratio: 0.0,
            },
        ];
        let rendered = View::chart(&bars, Theme::Dark).to_string();
        assert!(rendered.contains(&"█".repeat(BAR_WIDTH)));
        assert!(rendered.contains(&"░".repeat(BAR_WIDTH)));
    }
}

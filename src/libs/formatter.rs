//! Date formatting for task lists.
//!
//! Dates close to today are shown relative to it ("Today", "Tomorrow");
//! anything else uses a short weekday/month/day form such as `Mon, Jan 6`.

use super::messages::Message;
use chrono::{DateTime, Days, Local, NaiveDate, Utc};

/// Formats a calendar date relative to `today`.
pub fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        Message::Today.to_string()
    } else if today.checked_add_days(Days::new(1)) == Some(date) {
        Message::Tomorrow.to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

/// Formats an optional due date, with a placeholder when there is none.
pub fn format_due_date(due_date: Option<NaiveDate>, today: NaiveDate) -> String {
    match due_date {
        Some(date) => format_date(date, today),
        None => Message::NoDueDate.to_string(),
    }
}

/// Formats a stored UTC timestamp by its local calendar date.
pub fn format_timestamp(timestamp: DateTime<Utc>, today: NaiveDate) -> String {
    format_date(timestamp.with_timezone(&Local).date_naive(), today)
}

/// Renders a horizontal bar of `width` cells filled to `ratio`.
pub fn format_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskdeck::libs::formatter::{format_bar, format_date, format_due_date};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_relative_dates() {
        assert_eq!(format_date(today(), today()), "Today");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(), today()), "Tomorrow");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(), today()), "Sun, Jan 5");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(), today()), "Fri, Feb 14");
    }

    #[test]
    fn test_missing_due_date() {
        assert_eq!(format_due_date(None, today()), "No due date");
    }

    #[test]
    fn test_bar_width_is_constant() {
        assert_eq!(format_bar(0.5, 10), "█████░░░░░");
        assert_eq!(format_bar(1.5, 4), "████");
        assert_eq!(format_bar(0.0, 3), "░░░");
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::collections::HashSet;
    use taskdeck::libs::query::{query, sort, CategoryFilter, PriorityFilter, SortOrder, StatusFilter, TaskQuery};
    use taskdeck::libs::task::{Category, Priority, TaskDraft, TaskRecord};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn sample() -> Vec<TaskRecord> {
        let at = |day: u32| Utc.with_ymd_and_hms(2025, 5, day, 8, 0, 0).unwrap();
        let mut done = TaskRecord::new(
            "d1".to_string(),
            TaskDraft::new("Read book").category(Category::Learning).priority(Priority::Low),
            at(4),
        );
        done.set_completed(true, at(5));
        vec![
            TaskRecord::new(
                "c1".to_string(),
                TaskDraft::new("Dentist").category(Category::Health).priority(Priority::High).due(Some(today())),
                at(10),
            ),
            TaskRecord::new(
                "b1".to_string(),
                TaskDraft::new("Groceries").description("milk, eggs").category(Category::Shopping),
                at(8),
            ),
            TaskRecord::new("a1".to_string(), TaskDraft::new("Report").due(NaiveDate::from_ymd_opt(2025, 5, 1)), at(6)),
            done,
        ]
    }

    fn titles(tasks: &[&TaskRecord]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_priority_sort_scenario() {
        let low = TaskRecord::new(
            "a".to_string(),
            TaskDraft::new("A").priority(Priority::Low),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        );
        let high = TaskRecord::new(
            "b".to_string(),
            TaskDraft::new("B").priority(Priority::High),
            Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        );
        let tasks = vec![low, high];

        let filtered = query(&tasks, &TaskQuery::default(), today());
        assert_eq!(titles(&sort(&filtered, SortOrder::Priority)), vec!["B", "A"]);
    }

    #[test]
    fn test_every_query_is_a_duplicate_free_subset() {
        let tasks = sample();
        let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        let categories = [CategoryFilter::All, CategoryFilter::Only(Category::Health), CategoryFilter::Only(Category::Work)];
        let priorities = [PriorityFilter::All, PriorityFilter::Only(Priority::Medium)];
        let searches = ["", "MILK", "nothing"];

        for category in &categories {
            for status in [StatusFilter::All, StatusFilter::Pending, StatusFilter::Completed, StatusFilter::Today] {
                for priority in &priorities {
                    for search in searches {
                        let q = TaskQuery {
                            category: category.clone(),
                            status,
                            priority: priority.clone(),
                            search: search.to_string(),
                        };
                        let result = query(&tasks, &q, today());
                        let unique: HashSet<&str> = result.iter().map(|t| t.id.as_str()).collect();
                        assert_eq!(unique.len(), result.len());
                        assert!(unique.is_subset(&ids));
                    }
                }
            }
        }
    }

    #[test]
    fn test_status_filters() {
        let tasks = sample();
        let with_status = |status| TaskQuery {
            status,
            ..TaskQuery::default()
        };

        assert_eq!(titles(&query(&tasks, &with_status(StatusFilter::Completed), today())), vec!["Read book"]);
        assert_eq!(titles(&query(&tasks, &with_status(StatusFilter::Today), today())), vec!["Dentist"]);
        assert_eq!(query(&tasks, &with_status(StatusFilter::Pending), today()).len(), 3);
    }

    #[test]
    fn test_search_covers_description_case_insensitively() {
        let tasks = sample();
        let q = TaskQuery {
            search: "EGGS".to_string(),
            ..TaskQuery::default()
        };
        assert_eq!(titles(&query(&tasks, &q, today())), vec!["Groceries"]);
    }

    #[test]
    fn test_due_date_sort_puts_undated_last() {
        let tasks = sample();
        let all = query(&tasks, &TaskQuery::default(), today());
        let sorted = sort(&all, SortOrder::DueDate);
        assert_eq!(titles(&sorted), vec!["Report", "Dentist", "Groceries", "Read book"]);
        assert_eq!(titles(&all), vec!["Dentist", "Groceries", "Report", "Read book"]);
    }

    #[test]
    fn test_filter_values_parse_from_cli_text() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("Health".parse::<CategoryFilter>().unwrap(), CategoryFilter::Only(Category::Health));
        assert_eq!("high".parse::<PriorityFilter>().unwrap(), PriorityFilter::Only(Priority::High));
    }
}

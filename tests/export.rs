#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use taskdeck::libs::export::{ExportFormat, Exporter};
    use taskdeck::libs::task::{Category, Priority, TaskDraft, TaskRecord};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Vec<TaskRecord>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let created = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
            let mut done = TaskRecord::new("b2".to_string(), TaskDraft::new("Pay rent, on time"), created);
            done.set_completed(true, created);
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                tasks: vec![
                    TaskRecord::new(
                        "a1".to_string(),
                        TaskDraft::new("Buy milk")
                            .category(Category::Shopping)
                            .priority(Priority::Low)
                            .due(NaiveDate::from_ymd_opt(2025, 5, 2)),
                        created,
                    ),
                    done,
                ],
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()));
        let tasks: Vec<&TaskRecord> = ctx.tasks.iter().collect();
        exporter.export(&tasks).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID,Title,Description,Category,Priority,Due Date"));
        assert!(lines[1].starts_with("a1,Buy milk,,shopping,low,2025-05-02,false"));
        assert!(lines[2].contains("\"Pay rent, on time\""));
        assert!(lines[2].contains(",true,"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_loads_back_as_snapshot(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()));
        let tasks: Vec<&TaskRecord> = ctx.tasks.iter().collect();
        exporter.export(&tasks).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Vec<TaskRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, ctx.tasks);
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("taskdeck_export_"));
        assert!(name.ends_with(".json"));
    }
}

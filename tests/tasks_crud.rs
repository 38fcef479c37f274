#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use taskdeck::db::{storage::FileStorage, tasks::Tasks, Storage};
    use taskdeck::libs::board::{BoardCommand, BoardError, Outcome, TaskBoard};
    use taskdeck::libs::confirm::{AssumeNo, AssumeYes};
    use taskdeck::libs::task::{Category, Priority, TaskDraft, Theme};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BoardTestContext {
        temp_dir: TempDir,
    }

    impl BoardTestContext {
        fn board(&self) -> TaskBoard<FileStorage> {
            let clock = || Local.with_ymd_and_hms(2025, 5, 20, 9, 30, 0).unwrap();
            TaskBoard::with_clock(FileStorage::at(self.temp_dir.path()), Box::new(clock)).unwrap()
        }
    }

    impl TestContext for BoardTestContext {
        fn setup() -> Self {
            BoardTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_empty_directory_opens_empty_board(ctx: &mut BoardTestContext) {
        let board = ctx.board();
        assert!(board.tasks().is_empty());
        assert_eq!(board.theme(), Theme::Light);
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_tasks_survive_reopen_in_order(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        board
            .add(TaskDraft::new("Buy milk").category(Category::Shopping).priority(Priority::Low))
            .unwrap();
        let second = board.add(TaskDraft::new("  Write report  ").description("Quarterly")).unwrap();
        board.toggle_completion(&second.id).unwrap();

        let reopened = ctx.board();
        let titles: Vec<&str> = reopened.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Write report", "Buy milk"]);
        assert_eq!(reopened.tasks(), board.tasks());
        assert!(reopened.tasks()[0].completed);
        assert!(reopened.tasks()[0].completed_at.is_some());
        assert_eq!(reopened.tasks()[1].category, Category::Shopping);
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_snapshot_uses_camel_case_fields(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        board.add(TaskDraft::new("Stretch").category(Category::Health)).unwrap();

        let raw = board.storage().read("tasks").unwrap().unwrap();
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"completedAt\""));
        assert!(raw.contains("\"dueDate\""));
        assert!(raw.contains("\"health\""));
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_empty_title_is_rejected(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        let result = board.add(TaskDraft::new("   "));
        assert!(matches!(result, Err(BoardError::EmptyTitle)));
        assert!(board.tasks().is_empty());
        assert!(board.storage().read("tasks").unwrap().is_none());
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_toggle_unknown_id_changes_nothing(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        board.add(TaskDraft::new("A")).unwrap();
        board.add(TaskDraft::new("B")).unwrap();
        let before = board.tasks().to_vec();

        assert_eq!(board.toggle_completion("missing").unwrap(), None);
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_declined_delete_keeps_task(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        let task = board.add(TaskDraft::new("Keep me")).unwrap();

        assert!(!board.delete_one(&task.id, &mut AssumeNo).unwrap());
        assert_eq!(ctx.board().tasks().len(), 1);

        assert!(board.delete_one(&task.id, &mut AssumeYes).unwrap());
        assert!(ctx.board().tasks().is_empty());
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_clear_completed_empties_collection_and_selection(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        for title in ["One", "Two", "Three"] {
            let task = board.add(TaskDraft::new(title)).unwrap();
            board.toggle_completion(&task.id).unwrap();
        }
        board.toggle_select_all();
        assert_eq!(board.selection().len(), 3);

        let mut prompts = Vec::new();
        let mut confirm = |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        };
        assert_eq!(board.clear_completed(&mut confirm).unwrap(), 3);
        assert_eq!(prompts, vec!["Clear all completed tasks?".to_string()]);
        assert!(board.tasks().is_empty());
        assert!(board.selection().is_empty());
        assert!(ctx.board().tasks().is_empty());
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_delete_selected_through_dispatch(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        let a = board.add(TaskDraft::new("A")).unwrap();
        let b = board.add(TaskDraft::new("B")).unwrap();
        board.add(TaskDraft::new("C")).unwrap();

        board.dispatch(BoardCommand::ToggleSelection(a.id.clone()), &mut AssumeNo).unwrap();
        board.dispatch(BoardCommand::ToggleSelection(b.id.clone()), &mut AssumeNo).unwrap();
        let outcome = board.dispatch(BoardCommand::DeleteSelected, &mut AssumeYes).unwrap();

        assert_eq!(outcome, Outcome::Deleted(2));
        assert!(board.selection().is_empty());
        let titles: Vec<String> = Tasks::load(board.storage()).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["C".to_string()]);
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_theme_is_persisted(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        let outcome = board.dispatch(BoardCommand::ToggleTheme, &mut AssumeNo).unwrap();
        assert_eq!(outcome, Outcome::ThemeChanged(Theme::Dark));
        assert_eq!(ctx.board().theme(), Theme::Dark);
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_rename_persists_trimmed_title(ctx: &mut BoardTestContext) {
        let mut board = ctx.board();
        let task = board.add(TaskDraft::new("Draft")).unwrap();

        assert!(board.rename(&task.id, "  Final  ").unwrap());
        assert!(!board.rename(&task.id, "Final").unwrap());
        assert!(matches!(board.rename(&task.id, " "), Err(BoardError::EmptyTitle)));
        assert_eq!(ctx.board().tasks()[0].title, "Final");
    }
}

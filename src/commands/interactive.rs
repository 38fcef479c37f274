//! Interactive task board.
//!
//! Each round renders the board, asks for one action, turns it into a
//! [`BoardCommand`] and dispatches it. Confirmation prompts for destructive
//! actions come from the same terminal.

use super::{open_board, parse_due_date};
use crate::{
    db::storage::FileStorage,
    libs::{
        board::{BoardCommand, BoardError, Outcome, TaskBoard},
        config::Config,
        confirm::confirmer,
        messages::Message,
        query::{CategoryFilter, PriorityFilter, StatusFilter},
        task::{Category, Priority, TaskDraft, TaskRecord},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

#[derive(Debug, Clone, Copy)]
enum Action {
    Add,
    Toggle,
    Rename,
    Delete,
    Select,
    SelectAll,
    DeleteSelected,
    ClearCompleted,
    FilterCategory,
    FilterStatus,
    FilterPriority,
    Search,
    CycleSort,
    Statistics,
    ToggleTheme,
    Quit,
}

impl Action {
    const ALL: [Action; 16] = [
        Action::Add,
        Action::Toggle,
        Action::Rename,
        Action::Delete,
        Action::Select,
        Action::SelectAll,
        Action::DeleteSelected,
        Action::ClearCompleted,
        Action::FilterCategory,
        Action::FilterStatus,
        Action::FilterPriority,
        Action::Search,
        Action::CycleSort,
        Action::Statistics,
        Action::ToggleTheme,
        Action::Quit,
    ];

    fn label(self) -> Message {
        match self {
            Action::Add => Message::ActionAddTask,
            Action::Toggle => Message::ActionToggleTask,
            Action::Rename => Message::ActionRenameTask,
            Action::Delete => Message::ActionDeleteTask,
            Action::Select => Message::ActionSelectTasks,
            Action::SelectAll => Message::ActionSelectAll,
            Action::DeleteSelected => Message::ActionDeleteSelected,
            Action::ClearCompleted => Message::ActionClearCompleted,
            Action::FilterCategory => Message::ActionFilterCategory,
            Action::FilterStatus => Message::ActionFilterStatus,
            Action::FilterPriority => Message::ActionFilterPriority,
            Action::Search => Message::ActionSearch,
            Action::CycleSort => Message::ActionCycleSort,
            Action::Statistics => Message::ActionStatistics,
            Action::ToggleTheme => Message::ActionToggleTheme,
            Action::Quit => Message::ActionQuit,
        }
    }
}

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut board = open_board()?;
    let view = config.view();
    board.set_status(view.status);
    board.set_sort(view.sort);
    let mut confirm = confirmer(!config.confirm_destructive());

    loop {
        View::board(&board);

        let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;
        let action = Action::ALL[choice];

        match action {
            Action::Quit => return Ok(()),
            Action::Statistics => {
                let stats = board.statistics();
                View::quick_stats(board.tasks(), &stats, board.theme());
                View::statistics(&stats, board.theme());
                continue;
            }
            Action::Select => {
                select_tasks(&mut board)?;
                continue;
            }
            _ => {}
        }

        let Some(command) = build_command(action, &board, &config)? else {
            continue;
        };
        let new_title = match &command {
            BoardCommand::Rename { title, .. } => title.trim().to_string(),
            _ => String::new(),
        };
        match board.dispatch(command, confirm.as_mut()) {
            Ok(Outcome::ViewChanged) if matches!(action, Action::CycleSort) => {
                msg_print!(Message::SortChanged(board.sort_order().to_string()))
            }
            Ok(outcome) => report(outcome, new_title),
            Err(BoardError::EmptyTitle) => msg_error!(Message::TaskTitleEmpty),
            Err(BoardError::Storage(err)) => msg_error!(Message::StorageWriteFailed(err.to_string())),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Asks for whatever the action needs. `None` means there was nothing to act on.
fn build_command(action: Action, board: &TaskBoard<FileStorage>, config: &Config) -> Result<Option<BoardCommand>> {
    let theme = ColorfulTheme::default();
    let command = match action {
        Action::Add => {
            let defaults = config.defaults();
            let title: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptTaskTitle.to_string())
                .allow_empty(true)
                .interact_text()?;
            let description: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptTaskDescription.to_string())
                .allow_empty(true)
                .interact_text()?;
            let category: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptTaskCategory.to_string())
                .default(defaults.category.to_string())
                .interact_text()?;
            let priorities: Vec<String> = Priority::BUILTIN.iter().map(Priority::label).collect();
            let priority = Select::with_theme(&theme)
                .with_prompt(Message::PromptTaskPriority.to_string())
                .items(&priorities)
                .default(Priority::BUILTIN.iter().position(|p| *p == defaults.priority).unwrap_or(1))
                .interact()?;
            let due: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptTaskDueDate.to_string())
                .allow_empty(true)
                .validate_with(|value: &String| if value.trim().is_empty() { Ok(()) } else { parse_due_date(value).map(|_| ()) })
                .interact_text()?;
            let due_date = if due.trim().is_empty() { None } else { parse_due_date(&due).ok() };

            Some(BoardCommand::Add(
                TaskDraft::new(&title)
                    .description(&description)
                    .category(category.parse()?)
                    .priority(Priority::BUILTIN[priority].clone())
                    .due(due_date),
            ))
        }
        Action::Toggle => pick_task(board)?.map(BoardCommand::ToggleCompletion),
        Action::Rename => match pick_task(board)? {
            Some(id) => {
                let current = board.get(&id).map(|t| t.title.clone()).unwrap_or_default();
                let title: String = Input::with_theme(&theme)
                    .with_prompt(Message::PromptTaskTitle.to_string())
                    .default(current)
                    .interact_text()?;
                Some(BoardCommand::Rename { id, title })
            }
            None => None,
        },
        Action::Delete => pick_task(board)?.map(BoardCommand::Delete),
        Action::SelectAll => Some(BoardCommand::ToggleSelectAll),
        Action::DeleteSelected => {
            if board.selection().is_empty() {
                msg_info!(Message::NoTasksSelected);
                None
            } else {
                Some(BoardCommand::DeleteSelected)
            }
        }
        Action::ClearCompleted => {
            if board.tasks().iter().any(|t| t.completed) {
                Some(BoardCommand::ClearCompleted)
            } else {
                msg_info!(Message::NoCompletedTasks);
                None
            }
        }
        Action::FilterCategory => {
            let mut options = vec![CategoryFilter::All];
            options.extend(Category::BUILTIN.iter().cloned().map(CategoryFilter::Only));
            let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
            let index = Select::with_theme(&theme)
                .with_prompt(Message::PromptCategoryFilter.to_string())
                .items(&labels)
                .default(options.iter().position(|o| *o == board.query().category).unwrap_or(0))
                .interact()?;
            Some(BoardCommand::SetCategory(options[index].clone()))
        }
        Action::FilterStatus => {
            let options = StatusFilter::value_variants();
            let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
            let index = Select::with_theme(&theme)
                .with_prompt(Message::PromptStatusFilter.to_string())
                .items(&labels)
                .default(options.iter().position(|o| *o == board.query().status).unwrap_or(0))
                .interact()?;
            Some(BoardCommand::SetStatus(options[index]))
        }
        Action::FilterPriority => {
            let mut options = vec![PriorityFilter::All];
            options.extend(Priority::BUILTIN.iter().cloned().map(PriorityFilter::Only));
            let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
            let index = Select::with_theme(&theme)
                .with_prompt(Message::PromptPriorityFilter.to_string())
                .items(&labels)
                .default(options.iter().position(|o| *o == board.query().priority).unwrap_or(0))
                .interact()?;
            Some(BoardCommand::SetPriority(options[index].clone()))
        }
        Action::Search => {
            let search: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptSearch.to_string())
                .with_initial_text(board.query().search.clone())
                .allow_empty(true)
                .interact_text()?;
            Some(BoardCommand::SetSearch(search))
        }
        Action::CycleSort => Some(BoardCommand::CycleSort),
        Action::ToggleTheme => Some(BoardCommand::ToggleTheme),
        Action::Select | Action::Statistics | Action::Quit => None,
    };
    Ok(command)
}

fn task_label(task: &TaskRecord) -> String {
    format!("{}  {}", task.short_id(), task.title)
}

/// Lets the user pick one task from the current view.
fn pick_task(board: &TaskBoard<FileStorage>) -> Result<Option<String>> {
    let visible = board.visible();
    if visible.is_empty() {
        View::empty_state(board.query().is_searching());
        return Ok(None);
    }
    let labels: Vec<String> = visible.iter().map(|t| task_label(t)).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .interact_opt()?;
    Ok(index.map(|i| visible[i].id.clone()))
}

/// Multi-select over the current view; each changed checkbox toggles one selection entry.
fn select_tasks(board: &mut TaskBoard<FileStorage>) -> Result<()> {
    let visible: Vec<(String, String, bool)> = board
        .visible()
        .iter()
        .map(|t| (t.id.clone(), task_label(t), board.is_selected(&t.id)))
        .collect();
    if visible.is_empty() {
        View::empty_state(board.query().is_searching());
        return Ok(());
    }

    let labels: Vec<&str> = visible.iter().map(|(_, label, _)| label.as_str()).collect();
    let checked: Vec<bool> = visible.iter().map(|(_, _, selected)| *selected).collect();
    let Some(chosen) = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTasks.to_string())
        .items(&labels)
        .defaults(&checked)
        .interact_opt()?
    else {
        return Ok(());
    };

    for (index, (id, _, was_selected)) in visible.iter().enumerate() {
        if chosen.contains(&index) != *was_selected {
            board.toggle_selection(id);
        }
    }
    msg_print!(Message::SelectionCount(board.selection().len()));
    Ok(())
}

fn report(outcome: Outcome, new_title: String) {
    match outcome {
        Outcome::Added(task) => msg_success!(Message::TaskCreated(task.title)),
        Outcome::Toggled(Some(task)) if task.completed => msg_success!(Message::TaskCompleted(task.title)),
        Outcome::Toggled(Some(task)) => msg_success!(Message::TaskReopened(task.title)),
        Outcome::Toggled(None) => {}
        Outcome::Renamed(true) => msg_success!(Message::TaskRenamed(new_title)),
        Outcome::Renamed(false) => msg_info!(Message::TaskTitleUnchanged),
        Outcome::Deleted(0) | Outcome::Cleared(0) => msg_info!(Message::OperationCancelled),
        Outcome::Deleted(count) => msg_success!(Message::TasksDeletedCount(count)),
        Outcome::Cleared(count) => msg_success!(Message::CompletedTasksCleared(count)),
        Outcome::Selection(count) => msg_print!(Message::SelectionCount(count)),
        Outcome::ViewChanged => {}
        Outcome::ThemeChanged(theme) => msg_success!(Message::ThemeChanged(theme.to_string())),
    }
}

use super::{open_board, parse_due_date};
use crate::{
    libs::{
        board::BoardError,
        config::Config,
        messages::Message,
        task::{Category, Priority, TaskDraft},
    },
    msg_error, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Longer description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Category (work, personal, shopping, health, learning, or any other name)
    #[arg(short, long)]
    category: Option<Category>,
    /// Priority (high, medium, low)
    #[arg(short, long)]
    priority: Option<Priority>,
    /// Due date, YYYY-MM-DD
    #[arg(long, value_parser = parse_due_date)]
    due: Option<NaiveDate>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let defaults = Config::read()?.defaults();
    let draft = TaskDraft::new(&args.title)
        .description(&args.description)
        .category(args.category.unwrap_or(defaults.category))
        .priority(args.priority.unwrap_or(defaults.priority))
        .due(args.due);

    let mut board = open_board()?;
    match board.add(draft) {
        Ok(task) => msg_success!(Message::TaskCreated(task.title)),
        Err(BoardError::EmptyTitle) => msg_error!(Message::TaskTitleEmpty),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

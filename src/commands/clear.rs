use super::open_board;
use crate::{
    libs::{config::Config, confirm::confirmer, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,
}

/// Removes every completed task.
pub fn cmd(args: ClearArgs) -> Result<()> {
    let assume_yes = args.yes || !Config::read()?.confirm_destructive();
    let mut board = open_board()?;

    if !board.tasks().iter().any(|t| t.completed) {
        msg_info!(Message::NoCompletedTasks);
        return Ok(());
    }

    match board.clear_completed(confirmer(assume_yes).as_mut())? {
        0 => msg_info!(Message::OperationCancelled),
        removed => msg_success!(Message::CompletedTasksCleared(removed)),
    }
    Ok(())
}

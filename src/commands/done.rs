use super::{open_board, resolve_id};
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task id or unique id prefix
    id: String,
}

/// Toggles completion: pending tasks become completed and vice versa.
pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut board = open_board()?;
    let Some(id) = resolve_id(&board, &args.id) else {
        return Ok(());
    };

    if let Some(task) = board.toggle_completion(&id)? {
        if task.completed {
            msg_success!(Message::TaskCompleted(task.title));
        } else {
            msg_success!(Message::TaskReopened(task.title));
        }
    }
    Ok(())
}

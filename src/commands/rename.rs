use super::{open_board, resolve_id};
use crate::{
    libs::{board::BoardError, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Task id or unique id prefix
    id: String,
    /// New title
    title: String,
}

pub fn cmd(args: RenameArgs) -> Result<()> {
    let mut board = open_board()?;
    let Some(id) = resolve_id(&board, &args.id) else {
        return Ok(());
    };

    match board.rename(&id, &args.title) {
        Ok(true) => msg_success!(Message::TaskRenamed(args.title.trim().to_string())),
        Ok(false) => msg_info!(Message::TaskTitleUnchanged),
        Err(BoardError::EmptyTitle) => msg_error!(Message::TaskTitleEmpty),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

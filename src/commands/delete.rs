use super::{open_board, resolve_id};
use crate::{
    libs::{config::Config, confirm::confirmer, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ids or unique id prefixes
    #[arg(required = true, num_args = 1..)]
    ids: Vec<String>,
    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let assume_yes = args.yes || !Config::read()?.confirm_destructive();
    let mut board = open_board()?;

    let ids: Vec<String> = args.ids.iter().filter_map(|prefix| resolve_id(&board, prefix)).collect();
    let mut confirm = confirmer(assume_yes);

    match ids.as_slice() {
        [] => {}
        [id] => {
            if board.delete_one(id, confirm.as_mut())? {
                msg_success!(Message::TaskDeleted);
            } else {
                msg_info!(Message::OperationCancelled);
            }
        }
        many => {
            let removed = board.delete_many(many, confirm.as_mut())?;
            if removed > 0 {
                msg_success!(Message::TasksDeletedCount(removed));
            } else {
                msg_info!(Message::OperationCancelled);
            }
        }
    }
    Ok(())
}

use super::open_board;
use crate::{
    libs::{messages::Message, task::Theme},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Theme to use; toggles between light and dark when omitted
    #[arg(value_enum)]
    theme: Option<Theme>,
}

pub fn cmd(args: ThemeArgs) -> Result<()> {
    let mut board = open_board()?;
    let theme = match args.theme {
        Some(theme) => board.set_theme(theme)?,
        None => board.toggle_theme()?,
    };

    msg_success!(Message::ThemeChanged(theme.to_string()));
    Ok(())
}

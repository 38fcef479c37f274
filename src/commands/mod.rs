pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod export;
pub mod init;
pub mod interactive;
pub mod list;
pub mod rename;
pub mod stats;
pub mod theme;

use crate::{
    db::storage::FileStorage,
    libs::{
        board::{IdMatch, TaskBoard},
        messages::Message,
    },
    msg_error,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks", visible_alias = "ls")]
    List(list::ListArgs),
    #[command(about = "Mark a task completed, or pending again")]
    Done(done::DoneArgs),
    #[command(about = "Rename a task")]
    Rename(rename::RenameArgs),
    #[command(about = "Delete one or more tasks", visible_alias = "rm")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all completed tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "Show statistics")]
    Stats,
    #[command(about = "Set or toggle the color theme")]
    Theme(theme::ThemeArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Interactive task board")]
    Interactive,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Rename(args) => rename::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Theme(args) => theme::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Interactive => interactive::cmd(),
        }
    }
}

/// Opens the board backed by the user data directory.
pub fn open_board() -> Result<TaskBoard<FileStorage>> {
    Ok(TaskBoard::open(FileStorage::new())?)
}

/// Resolves a typed id or prefix, reporting unknown and ambiguous ones.
pub fn resolve_id(board: &TaskBoard<FileStorage>, prefix: &str) -> Option<String> {
    match board.resolve_id(prefix) {
        IdMatch::Found(id) => Some(id),
        IdMatch::Ambiguous(count) => {
            msg_error!(Message::TaskIdAmbiguous(prefix.to_string(), count));
            None
        }
        IdMatch::NotFound => {
            msg_error!(Message::TaskNotFound(prefix.to_string()));
            None
        }
    }
}

pub fn parse_due_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Message::InvalidDueDate(value.to_string()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_options() {
        let cli = Cli::parse_from(["taskdeck", "add", "Buy milk", "-c", "shopping", "-p", "low", "--due", "2025-06-01"]);
        assert!(matches!(cli.command, Commands::Add(_)));
    }

    #[test]
    fn rejects_malformed_due_date() {
        assert!(Cli::try_parse_from(["taskdeck", "add", "x", "--due", "06/01/2025"]).is_err());
        assert_eq!(parse_due_date("2025-06-01"), Ok(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
    }

    #[test]
    fn delete_accepts_several_ids() {
        let cli = Cli::parse_from(["taskdeck", "rm", "abc", "def", "--yes"]);
        assert!(matches!(cli.command, Commands::Delete(_)));
    }

    #[test]
    fn list_accepts_filters() {
        let cli = Cli::parse_from(["taskdeck", "ls", "-s", "pending", "-p", "high", "-q", "report", "--sort", "due-date"]);
        assert!(matches!(cli.command, Commands::List(_)));
    }
}

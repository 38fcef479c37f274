use super::{list::FilterArgs, open_board};
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file (defaults to a timestamped name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    filter: FilterArgs,
}

/// Writes the filtered, sorted view to a file.
pub fn cmd(args: ExportArgs) -> Result<()> {
    let (query, sort) = args.filter.query(&Config::read()?);
    let mut board = open_board()?;
    board.set_query(query);
    board.set_sort(sort);

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&board.visible())?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}

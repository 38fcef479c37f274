use super::open_board;
use crate::libs::{
    config::Config,
    query::{CategoryFilter, PriorityFilter, SortOrder, StatusFilter, TaskQuery},
    view::View,
};
use anyhow::Result;
use clap::Args;

/// Filter and sort options shared by `list` and `export`.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Category to show, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,
    /// Status to show (defaults to the configured view)
    #[arg(short, long, value_enum)]
    pub status: Option<StatusFilter>,
    /// Priority to show, or "all"
    #[arg(short, long, default_value = "all")]
    pub priority: PriorityFilter,
    /// Case-insensitive text to look for in titles and descriptions
    #[arg(short = 'q', long, default_value = "")]
    pub search: String,
    /// Sort order (defaults to the configured view)
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,
}

impl FilterArgs {
    pub fn query(&self, config: &Config) -> (TaskQuery, SortOrder) {
        let view = config.view();
        let query = TaskQuery {
            category: self.category.clone(),
            status: self.status.unwrap_or(view.status),
            priority: self.priority.clone(),
            search: self.search.clone(),
        };
        (query, self.sort.unwrap_or(view.sort))
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let (query, sort) = args.filter.query(&Config::read()?);
    let mut board = open_board()?;
    board.set_query(query);
    board.set_sort(sort);

    View::board(&board);
    Ok(())
}

use super::open_board;
use crate::libs::view::View;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let board = open_board()?;
    let stats = board.statistics();

    View::quick_stats(board.tasks(), &stats, board.theme());
    View::statistics(&stats, board.theme());
    Ok(())
}

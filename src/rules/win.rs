//! Win detection logic for tic-tac-toe.

use crate::line::Line;
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks if there is a completed line on the board.
///
/// Lines are scanned in the fixed order of [`Line::ALL`] (rows
/// top-to-bottom, columns left-to-right, then the two diagonals) and the
/// first match is returned. When a move completes two lines at once,
/// the earlier line in scan order is the one reported.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    for line in Line::ALL {
        let [a, b, c] = line.cells();
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Occupied(player) = cell {
                return Some((player, line));
            }
        }
    }

    None
}

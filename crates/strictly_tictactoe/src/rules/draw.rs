//! Full-board detection.
//!
//! The engine only declares a draw once [`winning_line`](super::winning_line)
//! has found nothing, so a ninth move that completes a line is a win.

use super::super::{Board, Position};

/// True once all nine squares hold a mark.
pub fn is_full(board: &Board) -> bool {
    board.occupied() == Position::ALL.len()
}

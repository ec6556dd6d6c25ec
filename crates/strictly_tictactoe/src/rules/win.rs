//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// Three positions that win when held by the same player.
pub type Line = [Position; 3];

/// Every winning line: rows, then columns, then diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player holding all three squares of `line`.
///
/// Empty squares never match each other, so an all-empty line has no winner.
pub fn line_winner(board: &Board, line: Line) -> Option<Player> {
    let [a, b, c] = line.map(|pos| board.get(pos).player());
    match (a, b, c) {
        (Some(a), Some(b), Some(c)) if a == b && b == c => Some(a),
        _ => None,
    }
}

/// Returns the first winning line in table order.
///
/// Every one of the eight lines is evaluated on each call, even after a
/// match; keep the scan unconditional.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    let mut found = None;
    for line in WINNING_LINES {
        if line_winner(board, line).is_some() && found.is_none() {
            found = Some(line);
        }
    }
    found
}

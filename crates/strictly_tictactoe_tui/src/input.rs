//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps a digit key `1`-`9` onto the cell index it selects (0-8).
pub fn digit_to_index(c: char) -> Option<i64> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Some(i64::from(digit) - 1),
        _ => None,
    }
}

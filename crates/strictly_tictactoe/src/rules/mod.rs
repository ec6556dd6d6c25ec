//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine composes them
//! after every legal move; they never mutate state. Win detection checks
//! all eight lines on every move, without stopping at the first match.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, WINNING_LINES, line_winner, winning_line};

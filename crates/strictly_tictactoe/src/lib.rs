//! Strictly Tic-Tac-Toe - the rules engine.
//!
//! A single [`GameEngine`] owns the board, whose turn it is, and whether the
//! game has been won or drawn. It has no I/O; presentation layers call
//! [`GameEngine::play_move`] and [`GameEngine::reset`] and render from its
//! accessors.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.play_move(index)?;
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert_eq!(engine.current_status_message(), "X Won!");
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveResult};
pub use engine::GameEngine;
pub use position::Position;
pub use rules::{Line, WINNING_LINES};
pub use types::{Board, GameStatus, Player, Square};

//! Moves, move outcomes, and move errors.

use super::{GameStatus, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Outcome of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveResult {
    /// The mark that was placed.
    placed: Move,
    /// Game status after the move.
    status: GameStatus,
    /// Player to move next. `None` once the game has ended.
    next_player: Option<Player>,
}

impl MoveResult {
    pub(crate) fn new(placed: Move, status: GameStatus, next_player: Option<Player>) -> Self {
        Self {
            placed,
            status,
            next_player,
        }
    }

    /// Returns true if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Error that can occur when applying a move.
///
/// Every variant leaves the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The requested cell index is outside 0-8.
    #[display("Cell index {} is out of range (expected 0-8)", _0)]
    InvalidIndex(i64),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}

//! The tic-tac-toe game engine.
//!
//! [`GameEngine`] owns the board, the player to move, and the game status.
//! Presentation code drives it through [`GameEngine::play_move`] and
//! [`GameEngine::reset`] and renders from the read-only accessors.

use super::action::{Move, MoveError, MoveResult};
use super::rules::{self, Line};
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Single-game rules engine.
///
/// States are `InProgress`, `Won(X)`, `Won(O)` and `Draw`. Only a legal
/// [`play_move`](Self::play_move) leaves `InProgress`; only
/// [`reset`](Self::reset) leaves a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<Line>,
}

impl GameEngine {
    /// Creates an engine in its freshly reset state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Clears the board and starts a new round with X to move.
    ///
    /// Valid at any time; mid-game this abandons the current round.
    #[instrument(skip(self), fields(previous = ?self.status))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidIndex`] if `index` is outside 0-8
    /// - [`MoveError::GameOver`] if the game has already been won or drawn
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    ///
    /// No state changes on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_move(&mut self, index: i64) -> Result<MoveResult, MoveError> {
        let position = Position::try_from(index)?;

        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let placed = Move::new(self.current_player, position);
        self.board.set(position, Square::Occupied(placed.player));
        debug!(%placed, "Mark placed");

        self.evaluate();

        let next_player = if self.status.is_terminal() {
            match self.status.winner() {
                Some(winner) => info!(%winner, line = ?self.winning_line, "Game won"),
                None => info!("Game drawn"),
            }
            None
        } else {
            self.current_player = self.current_player.opponent();
            Some(self.current_player)
        };

        Ok(MoveResult::new(placed, self.status, next_player))
    }

    /// Updates status after a mark has been placed, before the turn switch.
    ///
    /// All eight lines are checked before fullness, so a ninth mark that
    /// completes a line wins rather than draws.
    fn evaluate(&mut self) {
        if let Some(line) = rules::winning_line(&self.board) {
            self.winning_line = Some(line);
            self.status = GameStatus::Won(self.current_player);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    /// Human-readable status line.
    pub fn current_status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("It's {}'s turn", self.current_player),
            GameStatus::Won(player) => format!("{} Won!", player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the last mover once the game has ended.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the line that won the game, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Positions that accept a move right now.
    ///
    /// Empty once the game has ended.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            Vec::new()
        } else {
            Position::empty_squares(&self.board)
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Application state and key handling.

use crossterm::event::KeyCode;
use strictly_tictactoe::{GameEngine, MoveError, Position};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_to_index, move_cursor};

/// Main application state.
///
/// All game state lives in the engine; the app only adds the cursor and
/// the last rejected-move notice.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message from the last rejected move, cleared by the next key.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.notice = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor.to_index() as i64);
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.play(index);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Forwards a move to the engine, keeping the cursor on the played cell.
    fn play(&mut self, index: i64) {
        match self.engine.play_move(index) {
            Ok(result) => {
                debug!(placed = %result.placed(), status = ?result.status(), "Move applied");
                self.cursor = result.placed().position;
            }
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                self.notice = Some(rejection_notice(e));
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.cursor = Position::Center;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn rejection_notice(error: MoveError) -> String {
    match error {
        MoveError::GameOver => format!("{}. Press 'r' to restart.", error),
        MoveError::InvalidIndex(_) | MoveError::CellOccupied(_) => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{GameStatus, Player, Square};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);

        assert_eq!(
            app.engine().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(
            app.engine().board().get(Position::Center),
            Square::Occupied(Player::O)
        );
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(
            app.engine().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.engine().current_player(), Player::O);
    }

    #[test]
    fn test_occupied_cell_sets_notice_until_next_key() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);

        assert_eq!(app.notice(), Some("Center is already occupied"));
        assert_eq!(app.engine().board().occupied(), 1);

        app.handle_key(KeyCode::Left);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_game_over_notice_and_restart() {
        let mut app = App::new();
        // X: 1 2 3, O: 4 5
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('4'),
                KeyCode::Char('2'),
                KeyCode::Char('5'),
                KeyCode::Char('3'),
            ],
        );
        assert_eq!(app.engine().status(), GameStatus::Won(Player::X));

        app.handle_key(KeyCode::Char('9'));
        assert_eq!(
            app.notice(),
            Some("Game is already over. Press 'r' to restart.")
        );

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.engine(), &GameEngine::new());
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = App::new();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}

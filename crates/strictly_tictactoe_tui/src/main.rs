//! Strictly Tic-Tac-Toe - terminal client
//!
//! Two players share one keyboard. All rules live in
//! [`strictly_tictactoe::GameEngine`]; this binary only renders and forwards
//! key presses.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use strictly_tictactoe::GameEngine;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use app::App;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TuiConfig::load_or_default(&cli.config)?;
    let forced_filter = cli.log_filter.is_some();
    if let Some(filter) = cli.log_filter {
        config = config.with_log_filter(filter);
    }

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            initialize_file_tracing(&config, forced_filter)?;
            run_tui(&config)
        }
        Command::Play { moves } => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&config, forced_filter))
                .with_writer(io::stderr)
                .init();
            run_play(&moves)
        }
    }
}

/// Builds the log filter: an explicit flag wins, then `RUST_LOG`, then config.
fn env_filter(config: &TuiConfig, forced: bool) -> EnvFilter {
    if forced {
        return EnvFilter::new(config.log_filter());
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so output does not interfere with the TUI.
fn initialize_file_tracing(config: &TuiConfig, forced: bool) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, forced))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("TUI tracing initialized");
    Ok(())
}

/// Run the interactive terminal game.
#[instrument(skip_all)]
fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Strictly Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let _restore = RestoreOnDrop(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, config);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");

    res
}

/// Runs the wrapped closure when dropped, including on early `?` returns.
struct RestoreOnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        error!(error = %e, "Failed to leave alternate screen");
    }
}

/// Draw, read one key, repeat until the user quits.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &TuiConfig) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app, config))?;

        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported by some terminals.
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }

    Ok(())
}

/// Apply `moves` in order, printing the board and status after each.
///
/// Rejected moves are reported and skipped.
#[instrument(skip_all, fields(moves = moves.len()))]
fn run_play(moves: &[i64]) -> Result<()> {
    let mut engine = GameEngine::new();
    let mut out = io::stdout().lock();

    print_state(&mut out, &engine)?;

    for &index in moves {
        match engine.play_move(index) {
            Ok(result) => {
                debug!(placed = %result.placed(), "Move applied");
                writeln!(out, "{}", result.placed())?;
            }
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                writeln!(out, "Rejected move {}: {}", index, e)?;
            }
        }
        print_state(&mut out, &engine)?;
    }

    Ok(())
}

fn print_state(out: &mut impl Write, engine: &GameEngine) -> io::Result<()> {
    writeln!(out, "{}", engine.board().display())?;
    writeln!(out, "{}", engine.current_status_message())?;
    writeln!(out)
}

//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "strictly_tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Log filter directive (overrides the config file)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply moves headlessly and print the board after each
    Play {
        /// Cell indices (0-8, left-to-right, top-to-bottom) in play order
        #[arg(allow_negative_numbers = true)]
        moves: Vec<i64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["strictly_tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, std::path::PathBuf::from("strictly_tictactoe.toml"));
        assert_eq!(cli.log_filter, None);
    }

    #[test]
    fn test_play_accepts_out_of_range_moves() {
        let cli =
            Cli::try_parse_from(["strictly_tictactoe", "play", "0", "-1", "9"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                moves: vec![0, -1, 9]
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "strictly_tictactoe",
            "tui",
            "--config",
            "custom.toml",
            "--log-filter",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Tui));
        assert_eq!(cli.config, std::path::PathBuf::from("custom.toml"));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
    }
}

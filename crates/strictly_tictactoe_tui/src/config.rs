//! TUI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings for the terminal client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show 1-9 key hints in empty cells.
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,
}

fn default_title() -> String {
    "Strictly Tic-Tac-Toe".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_cell_numbers() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the log filter, e.g. from a command-line flag.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
        assert!(*config.show_cell_numbers());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_cell_numbers = false").unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();

        assert!(!*config.show_cell_numbers());
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.title(), "Strictly Tic-Tac-Toe");
        assert_eq!(config.log_file(), &PathBuf::from("strictly_tictactoe.log"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_cell_numbers = \"sometimes\"").unwrap();

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_log_filter_override() {
        let config = TuiConfig::default().with_log_filter("strictly_tictactoe=trace");
        assert_eq!(config.log_filter(), "strictly_tictactoe=trace");
    }
}

//! Error types for the CLI application.

use std::fmt;

use headsup_ai::AiError;
use headsup_engine::errors::GameError;

use crate::config::ConfigError;

/// Everything a command handler can fail with. Each variant maps to exit code `2`.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, reading stdin)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The engine refused an operation the command could not recover from
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<AiError> for CliError {
    fn from(error: AiError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let err: CliError = GameError::InsufficientChips {
            needed: 20,
            available: 5,
        }
        .into();
        assert!(matches!(err, CliError::Engine(_)));
        assert!(err.to_string().starts_with("Engine error:"));
    }

    #[test]
    fn unknown_opponent_is_bad_input() {
        let err: CliError = AiError::UnknownKind("oracle".into()).into();
        assert!(matches!(err, CliError::InvalidInput(ref m) if m.contains("oracle")));
    }
}

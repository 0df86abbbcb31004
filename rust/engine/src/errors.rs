use thiserror::Error;

/// Rejections raised by the engine. Every variant leaves the round untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient chips: needed {needed}, available {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    /// Only reachable through a broken deal schedule.
    #[error("Insufficient cards: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidAction(reason.into())
    }
}

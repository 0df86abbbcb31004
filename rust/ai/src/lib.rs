//! # headsup-ai: scripted opponent for heads-up poker
//!
//! The opponent's decision is a pure function of its hand strength, the amount it
//! owes and its stack ([`scripted::choose_policy_action`]). [`AIOpponent`] wraps that
//! decision behind a trait object so the front end can pick an opponent by name.
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_ai::{create_ai, play_opponent_turn};
//! use headsup_engine::engine::Engine;
//! use headsup_engine::player::PlayerAction;
//!
//! let ai = create_ai("scripted").unwrap();
//! let mut engine = Engine::new(Some(42));
//! engine.start_hand().unwrap();
//! engine.apply_player_action(PlayerAction::Call).unwrap();
//!
//! // after whatever "thinking" pause the caller wants
//! let transition = play_opponent_turn(&mut engine, ai.as_ref()).unwrap();
//! assert!(!transition.snapshot.awaiting_opponent);
//! ```

use headsup_engine::engine::Engine;
use headsup_engine::errors::GameError;
use headsup_engine::events::Transition;
use headsup_engine::player::PlayerAction;
use thiserror::Error;

pub mod scripted;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: &[&str] = &["scripted"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiError {
    #[error("unknown opponent kind: {0} (expected one of: {kinds})", kinds = AI_KINDS.join(", "))]
    UnknownKind(String),
}

/// Trait defining the interface for opponents.
///
/// # Example Implementation
///
/// ```rust
/// use headsup_ai::AIOpponent;
/// use headsup_engine::engine::Engine;
/// use headsup_engine::player::PlayerAction;
///
/// struct AlwaysFold;
///
/// impl AIOpponent for AlwaysFold {
///     fn get_action(&self, _engine: &Engine) -> PlayerAction {
///         PlayerAction::Fold
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysFold"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Decide the opponent's move for the pending turn.
    ///
    /// Implementations only read the engine; the caller applies the result with
    /// [`Engine::advance_opponent_turn`].
    fn get_action(&self, engine: &Engine) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Factory function to create opponents by kind.
///
/// ```rust
/// use headsup_ai::{create_ai, AiError};
///
/// let ai = create_ai("scripted").unwrap();
/// assert_eq!(ai.name(), "ScriptedAI");
/// assert!(matches!(create_ai("oracle"), Err(AiError::UnknownKind(_))));
/// ```
pub fn create_ai(kind: &str) -> Result<Box<dyn AIOpponent>, AiError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "scripted" => Ok(Box::new(scripted::ScriptedAI::new())),
        _ => Err(AiError::UnknownKind(kind.to_string())),
    }
}

/// Asks `ai` for a decision and applies it as the opponent's move.
pub fn play_opponent_turn(
    engine: &mut Engine,
    ai: &dyn AIOpponent,
) -> Result<Transition, GameError> {
    let action = ai.get_action(engine);
    engine.advance_opponent_turn(action)
}

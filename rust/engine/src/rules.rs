use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Small blind posted by the dealer.
pub const SMALL_BLIND: u32 = 10;
/// Big blind posted by the non-dealer.
pub const BIG_BLIND: u32 = 20;

/// Table parameters for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRules {
    pub small_blind: u32,
    pub big_blind: u32,
    /// When false a street only closes once both bets are equal and non-zero,
    /// so a street checked through by both seats stays open.
    pub advance_on_checked_street: bool,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            advance_on_checked_street: false,
        }
    }
}

/// An action whose chip cost has been checked against the actor's stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to pay to match the current bet (may be 0).
    Call(u32),
    /// `total` leaves the stack; the current bet grows by `increment`.
    Raise { total: u32, increment: u32 },
}

/// Validates a player action according to betting rules and stack size.
///
/// # Arguments
///
/// * `stack` - Actor's remaining chip stack
/// * `to_call` - Amount needed to match the current bet
/// * `action` - The action the actor wishes to perform
///
/// # Errors
///
/// - [`GameError::InvalidAction`] - checking while facing a bet, or a zero raise
/// - [`GameError::InsufficientChips`] - the call or raise costs more than `stack`
///
/// # Examples
///
/// ```
/// use headsup_engine::rules::{validate_action, ValidatedAction};
/// use headsup_engine::player::PlayerAction;
///
/// let result = validate_action(1000, 10, PlayerAction::Raise(40));
/// assert_eq!(result, Ok(ValidatedAction::Raise { total: 50, increment: 40 }));
/// ```
///
/// ```
/// use headsup_engine::rules::validate_action;
/// use headsup_engine::player::PlayerAction;
/// use headsup_engine::errors::GameError;
///
/// let result = validate_action(5, 10, PlayerAction::Call);
/// assert!(matches!(result, Err(GameError::InsufficientChips { needed: 10, available: 5 })));
/// ```
pub fn validate_action(stack: u32, to_call: u32, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::invalid("cannot check facing a bet"))
            }
        }
        A::Call => {
            if to_call > stack {
                Err(GameError::InsufficientChips {
                    needed: to_call,
                    available: stack,
                })
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(amount) => {
            if amount == 0 {
                return Err(GameError::invalid("raise amount must be positive"));
            }
            let total = to_call.saturating_add(amount);
            if total > stack {
                Err(GameError::InsufficientChips {
                    needed: total,
                    available: stack,
                })
            } else {
                Ok(ValidatedAction::Raise {
                    total,
                    increment: amount,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_facing_bet_is_invalid() {
        let err = validate_action(1000, 10, A::Check).unwrap_err();
        assert_eq!(err, GameError::InvalidAction("cannot check facing a bet".into()));
    }

    #[test]
    fn exact_stack_call_is_allowed() {
        assert_eq!(validate_action(10, 10, A::Call), Ok(ValidatedAction::Call(10)));
    }

    #[test]
    fn raise_counts_the_call_portion() {
        let err = validate_action(50, 20, A::Raise(40)).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientChips {
                needed: 60,
                available: 50
            }
        );
    }

    #[test]
    fn zero_raise_is_invalid() {
        assert!(matches!(
            validate_action(100, 0, A::Raise(0)),
            Err(GameError::InvalidAction(_))
        ));
    }
}

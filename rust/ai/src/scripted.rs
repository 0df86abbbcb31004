//! Deterministic opponent: raises strong hands, calls cheap bets with a pair,
//! folds everything else.

use headsup_engine::engine::Engine;
use headsup_engine::hand::{HandRanking, HandResult};
use headsup_engine::player::PlayerAction;

use crate::AIOpponent;

/// Largest raise increment the opponent ever makes.
pub const MAX_RAISE: u32 = 50;
/// Most the opponent will pay to stay in with a pair or two pair.
pub const CALL_LIMIT: u32 = 20;

/// Picks the opponent's move from its hand strength alone.
///
/// - Three of a Kind or better raises by `min(50, stack - to_call)` when that is
///   positive, so the whole raise (call portion included) always fits the stack.
/// - A Pair or better calls when at most 20 is owed, checking when nothing is owed,
///   and folds if the call is more than the stack.
/// - Anything else folds, even when checking would be free.
///
/// ```
/// use headsup_ai::scripted::choose_policy_action;
/// use headsup_engine::hand::{HandRanking, HandResult};
/// use headsup_engine::player::PlayerAction;
///
/// let trips = HandResult { ranking: HandRanking::ThreeOfAKind, cards: vec![] };
/// assert_eq!(choose_policy_action(&trips, 0, 1000), PlayerAction::Raise(50));
/// assert_eq!(choose_policy_action(&trips, 20, 60), PlayerAction::Raise(40));
/// ```
pub fn choose_policy_action(hand: &HandResult, to_call: u32, stack: u32) -> PlayerAction {
    if hand.ranking >= HandRanking::ThreeOfAKind {
        let increment = MAX_RAISE.min(stack.saturating_sub(to_call));
        if increment > 0 {
            return PlayerAction::Raise(increment);
        }
    }
    if hand.ranking >= HandRanking::Pair && to_call <= CALL_LIMIT {
        return match to_call {
            0 => PlayerAction::Check,
            owed if owed > stack => PlayerAction::Fold,
            _ => PlayerAction::Call,
        };
    }
    PlayerAction::Fold
}

/// [`AIOpponent`] backed by [`choose_policy_action`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedAI;

impl ScriptedAI {
    pub fn new() -> Self {
        Self
    }
}

impl AIOpponent for ScriptedAI {
    fn get_action(&self, engine: &Engine) -> PlayerAction {
        let view = engine.opponent_view();
        choose_policy_action(&view.hand, view.to_call, view.stack)
    }

    fn name(&self) -> &str {
        "ScriptedAI"
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::history::Street;
use crate::player::Seat;

/// Where the current hand stands. Exactly one phase is active at a time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Finished,
}

impl GamePhase {
    /// Streets on which actions are accepted.
    pub fn is_betting(self) -> bool {
        self.street().is_some()
    }

    pub fn street(self) -> Option<Street> {
        match self {
            GamePhase::Preflop => Some(Street::Preflop),
            GamePhase::Flop => Some(Street::Flop),
            GamePhase::Turn => Some(Street::Turn),
            GamePhase::River => Some(Street::River),
            _ => None,
        }
    }

    /// Hole cards of both seats are public in these phases.
    pub fn reveals_hands(self) -> bool {
        matches!(self, GamePhase::Showdown | GamePhase::Finished)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Waiting => "waiting",
            GamePhase::Preflop => "preflop",
            GamePhase::Flop => "flop",
            GamePhase::Turn => "turn",
            GamePhase::River => "river",
            GamePhase::Showdown => "showdown",
            GamePhase::Finished => "finished",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Opponent,
    Tie,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Player => "player",
            Winner::Opponent => "opponent",
            Winner::Tie => "tie",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Seat> for Winner {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::Player => Winner::Player,
            Seat::Opponent => Winner::Opponent,
        }
    }
}

/// How a finished hand ended. Hand names are only present for showdowns.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Winner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_hand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losing_hand: Option<String>,
}

/// Round-scoped state of one hand: rebuilt by every `start_hand`, except `dealer`,
/// which survives and alternates.
#[derive(Debug, Clone)]
pub struct GameRound {
    pub(crate) phase: GamePhase,
    pub(crate) deck: Deck,
    pub(crate) player_hole: Vec<Card>,
    pub(crate) opponent_hole: Vec<Card>,
    pub(crate) community: Vec<Card>,
    pub(crate) pot: u32,
    pub(crate) current_bet: u32,
    pub(crate) dealer: Seat,
    pub(crate) outcome: Option<Outcome>,
}

impl GameRound {
    pub fn waiting(dealer: Seat) -> Self {
        Self {
            phase: GamePhase::Waiting,
            deck: Deck::new(),
            player_hole: Vec::new(),
            opponent_hole: Vec::new(),
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            dealer,
            outcome: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }
    pub fn dealer(&self) -> Seat {
        self.dealer
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn hole(&self, seat: Seat) -> &[Card] {
        match seat {
            Seat::Player => &self.player_hole,
            Seat::Opponent => &self.opponent_hole,
        }
    }

    /// Hole cards followed by the community cards dealt so far.
    pub fn visible_cards(&self, seat: Seat) -> Vec<Card> {
        let mut cards = self.hole(seat).to_vec();
        cards.extend_from_slice(&self.community);
        cards
    }
}

/// Read-only view of the table handed to the presentation layer.
///
/// `opponent_hole` stays `None` until the hands are revealed, and `outcome` is
/// only filled in once the phase is `Finished`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: GamePhase,
    pub pot: u32,
    pub current_bet: u32,
    pub player_chips: u32,
    pub opponent_chips: u32,
    pub player_bet: u32,
    pub opponent_bet: u32,
    pub player_hole: Vec<Card>,
    pub opponent_hole: Option<Vec<Card>>,
    pub community: Vec<Card>,
    pub dealer: Seat,
    pub deck_remaining: usize,
    pub awaiting_opponent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl RoundSnapshot {
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.player_bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_streets_accept_bets() {
        let betting: Vec<GamePhase> = [
            GamePhase::Waiting,
            GamePhase::Preflop,
            GamePhase::Flop,
            GamePhase::Turn,
            GamePhase::River,
            GamePhase::Showdown,
            GamePhase::Finished,
        ]
        .into_iter()
        .filter(|p| p.is_betting())
        .collect();
        assert_eq!(
            betting,
            vec![
                GamePhase::Preflop,
                GamePhase::Flop,
                GamePhase::Turn,
                GamePhase::River
            ]
        );
    }

    #[test]
    fn waiting_round_is_empty() {
        let round = GameRound::waiting(Seat::Player);
        assert_eq!(round.phase(), GamePhase::Waiting);
        assert_eq!(round.pot(), 0);
        assert!(round.community().is_empty());
        assert_eq!(round.deck_remaining(), 52);
    }
}

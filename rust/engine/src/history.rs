use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Winner;
use crate::player::{PlayerAction, Seat};

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

/// Records a single accepted action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    pub street: Street,
    pub action: PlayerAction,
}

/// Hands revealed at showdown and who took the pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winner: Winner,
    pub player_hand: String,
    pub opponent_hand: String,
}

/// In-memory record of the hand in progress (or the last one played).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Sequential identifier within the session (`hand-NNNNNN`)
    pub hand_id: String,
    /// RNG seed of the session (enables deterministic replay)
    pub seed: u64,
    pub dealer: Seat,
    /// Chronological list of accepted actions
    pub actions: Vec<ActionRecord>,
    /// Community cards dealt so far
    pub board: Vec<Card>,
    /// Short summary once the hand is over
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn new(seq: u32, seed: u64, dealer: Seat) -> Self {
        Self {
            hand_id: format_hand_id(seq),
            seed,
            dealer,
            actions: Vec::new(),
            board: Vec::new(),
            result: None,
            showdown: None,
        }
    }

    pub fn record(&mut self, seat: Seat, street: Street, action: PlayerAction) {
        self.actions.push(ActionRecord {
            seat,
            street,
            action,
        });
    }

    /// Serializes the record as a single JSON line.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn format_hand_id(seq: u32) -> String {
    format!("hand-{:06}", seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_ids_are_zero_padded() {
        assert_eq!(format_hand_id(7), "hand-000007");
    }

    #[test]
    fn record_serializes_to_one_line() {
        let mut rec = HandRecord::new(1, 42, Seat::Player);
        rec.record(Seat::Player, Street::Preflop, PlayerAction::Raise(40));
        let line = rec.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        let back: HandRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, rec);
    }
}

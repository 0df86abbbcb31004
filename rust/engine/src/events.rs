use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::RoundSnapshot;
use crate::hand::HandRanking;
use crate::history::Street;
use crate::player::Seat;

/// Something that happened at the table, in the order it happened.
///
/// `Display` renders the chat line the collaborator shows; [`TableEvent::speaker`]
/// says which side "says" it (table announcements come from the opponent).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    HandStarted {
        dealer: Seat,
    },
    Checked {
        seat: Seat,
    },
    Called {
        seat: Seat,
        amount: u32,
    },
    Raised {
        seat: Seat,
        amount: u32,
    },
    Folded {
        seat: Seat,
    },
    StreetDealt {
        street: Street,
        cards: Vec<Card>,
    },
    ShowdownWon {
        winner: Seat,
        winning: HandRanking,
        losing: HandRanking,
    },
    PotSplit {
        ranking: HandRanking,
    },
}

impl TableEvent {
    pub fn speaker(&self) -> Seat {
        match self {
            TableEvent::Checked { seat }
            | TableEvent::Called { seat, .. }
            | TableEvent::Raised { seat, .. } => *seat,
            _ => Seat::Opponent,
        }
    }
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::HandStarted { .. } => write!(f, "New game started! Good luck!"),
            TableEvent::Checked { .. } => write!(f, "Check."),
            TableEvent::Called { amount, .. } => write!(f, "Call! Betting {} chips.", amount),
            TableEvent::Raised { amount, .. } => write!(f, "Raise! Betting {} chips.", amount),
            TableEvent::Folded { seat: Seat::Player } => {
                write!(f, "You folded. I win this hand!")
            }
            TableEvent::Folded {
                seat: Seat::Opponent,
            } => write!(f, "I fold. You win this hand!"),
            TableEvent::StreetDealt { street, .. } => match street {
                Street::Preflop => write!(f, "Hole cards dealt!"),
                Street::Flop => write!(f, "Flop dealt!"),
                Street::Turn => write!(f, "Turn dealt!"),
                Street::River => write!(f, "River dealt!"),
            },
            TableEvent::ShowdownWon {
                winner: Seat::Player,
                winning,
                losing,
            } => write!(f, "You win! {} beats {}", winning, losing),
            TableEvent::ShowdownWon {
                winner: Seat::Opponent,
                winning,
                losing,
            } => write!(f, "I win! {} beats {}", winning, losing),
            TableEvent::PotSplit { .. } => write!(f, "It's a tie! Pot is split."),
        }
    }
}

/// Result of one accepted engine operation: the state afterwards and the
/// narration produced on the way there.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub snapshot: RoundSnapshot,
    pub events: Vec<TableEvent>,
}

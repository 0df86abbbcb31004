use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The two seats at the table. The human sits in `Player`, the scripted side in `Opponent`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Player,
    Opponent,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Seat::Player => "player",
            Seat::Opponent => "opponent",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a player action during a betting round.
/// There is no all-in: a wager the stack cannot cover is rejected.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid if nothing is owed)
    Check,
    /// Match the current bet
    Call,
    /// Match the current bet, then raise it by the given amount
    Raise(u32),
}

/// Default starting stack size for each seat in chips
pub const STARTING_STACK: u32 = 1_000;

/// Largest stack a seat may start with. Two of them plus the pot always fit in a `u32`.
pub const MAX_STACK: u32 = u32::MAX / 2;

/// Chip state for one seat: the stack and what it has put in on the current street.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    chips: u32,
    street_bet: u32,
}

impl Participant {
    pub fn new(chips: u32) -> Self {
        Self {
            chips,
            street_bet: 0,
        }
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }

    /// Credits a won pot. The stacks start at or below [`MAX_STACK`], so the sum stays in range.
    pub fn add_chips(&mut self, amount: u32) {
        self.chips += amount;
    }

    /// Moves `amount` from the stack into this street's bet.
    pub fn bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: self.chips,
            });
        }
        self.chips -= amount;
        self.street_bet += amount;
        Ok(())
    }

    pub fn reset_street(&mut self) {
        self.street_bet = 0;
    }
}

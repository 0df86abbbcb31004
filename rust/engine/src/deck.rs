use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered pile of cards. Dealing removes from the end; nothing is ever put back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Fresh deck in canonical order (see [`full_deck`]).
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// Stacked deck with an explicit order; the last card is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns a shuffled copy, leaving `self` untouched.
    ///
    /// Fisher–Yates: walk `i` from the last index down to 1 and swap with a
    /// uniform index in `0..=i`. Passing a seeded RNG makes the order reproducible.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards.clone();
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }
        Deck { cards }
    }

    /// Removes the last `n` cards and returns them in the order they came off the deck.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Convenience wrapper: canonical deck order as a plain vector.
pub fn new_deck() -> Vec<Card> {
    full_deck()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn deal_takes_from_the_end() {
        let mut deck = Deck::new();
        let dealt = deck.deal(2).unwrap();
        assert_eq!(dealt[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(dealt[1], Card::new(Rank::King, Suit::Spades));
        assert_eq!(deck.remaining(), 50);
    }

    #[test]
    fn overdraw_is_rejected_without_change() {
        let mut deck = Deck::from_cards(vec![Card::new(Rank::Two, Suit::Clubs)]);
        let err = deck.deal(2).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientCards {
                requested: 2,
                remaining: 1
            }
        );
        assert_eq!(deck.remaining(), 1);
    }
}

//! # headsup-engine: Heads-Up Poker Engine Core
//!
//! A two-seat Texas Hold'em engine for a human playing against a scripted
//! opponent. It owns the deck, evaluates hands, and runs the betting state
//! machine from the blinds through the showdown. Presentation layers drive it
//! through [`engine::Engine`] and render the returned snapshots and narration.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and card parsing
//! - [`deck`] - Canonical deck, Fisher–Yates shuffling, dealing from the end
//! - [`hand`] - Hand category evaluation (ten rankings, no kickers)
//! - [`engine`] - Betting engine: blinds, actions, streets, showdown
//! - [`game`] - Phases, the per-hand round state, and snapshots
//! - [`player`] - Seats, actions, and chip stacks
//! - [`rules`] - Action validation and table parameters
//! - [`events`] - Narration events produced by each transition
//! - [`history`] - In-memory record of the current hand
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_engine::hand::{evaluate, HandRanking};
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Ten, Suit::Spades),
//! ];
//!
//! assert_eq!(evaluate(&cards).ranking, HandRanking::RoyalFlush);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use headsup_engine::deck::Deck;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let a = Deck::new().shuffled(&mut ChaCha20Rng::seed_from_u64(42));
//! let b = Deck::new().shuffled(&mut ChaCha20Rng::seed_from_u64(42));
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod rules;

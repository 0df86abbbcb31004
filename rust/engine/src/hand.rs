use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Hand categories, weakest to strongest. The discriminant is the 1..=10 ordinal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRanking {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandRanking {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandRanking::HighCard => "High Card",
            HandRanking::Pair => "Pair",
            HandRanking::TwoPair => "Two Pair",
            HandRanking::ThreeOfAKind => "Three of a Kind",
            HandRanking::Straight => "Straight",
            HandRanking::Flush => "Flush",
            HandRanking::FullHouse => "Full House",
            HandRanking::FourOfAKind => "Four of a Kind",
            HandRanking::StraightFlush => "Straight Flush",
            HandRanking::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one evaluation. `cards` holds the whole input sorted high to low,
/// not a best-five subset; only `ranking` is compared between hands.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub ranking: HandRanking,
    pub cards: Vec<Card>,
}

/// Classifies a set of cards into one of the ten categories.
///
/// Fewer than five cards always yields [`HandRanking::HighCard`] with the input
/// returned as given. Flush means every card of the input shares a suit, and there
/// is no kicker information: two results with the same ranking are a tie.
///
/// ```
/// use headsup_engine::cards::Card;
/// use headsup_engine::hand::{evaluate, HandRanking};
///
/// let cards: Vec<Card> = ["Ah", "2c", "3d", "4s", "5h"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(evaluate(&cards).ranking, HandRanking::Straight);
/// ```
pub fn evaluate(cards: &[Card]) -> HandResult {
    if cards.len() < 5 {
        return HandResult {
            ranking: HandRanking::HighCard,
            cards: cards.to_vec(),
        };
    }

    let sorted = sort_desc(cards);
    let values: Vec<u8> = sorted.iter().map(Card::value).collect();
    let counts = value_counts(&values);
    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let is_straight = detect_straight(&values);

    let ranking = if is_flush && is_straight && values[0] == 14 {
        HandRanking::RoyalFlush
    } else if is_flush && is_straight {
        HandRanking::StraightFlush
    } else {
        match counts.as_slice() {
            [4, ..] => HandRanking::FourOfAKind,
            [3, 2, ..] => HandRanking::FullHouse,
            _ if is_flush => HandRanking::Flush,
            _ if is_straight => HandRanking::Straight,
            _ => multiples_ranking(&counts),
        }
    };

    HandResult {
        ranking,
        cards: sorted,
    }
}

/// Strength read usable before the board is complete.
///
/// Five or more cards defer to [`evaluate`]. With one to four cards only the
/// pairing categories can be made, so those are read from the value counts.
pub fn assess_strength(cards: &[Card]) -> HandResult {
    if cards.len() >= 5 {
        return evaluate(cards);
    }
    let sorted = sort_desc(cards);
    let values: Vec<u8> = sorted.iter().map(Card::value).collect();
    let counts = value_counts(&values);
    let ranking = match counts.as_slice() {
        [4, ..] => HandRanking::FourOfAKind,
        _ => multiples_ranking(&counts),
    };
    HandResult {
        ranking,
        cards: sorted,
    }
}

fn multiples_ranking(counts: &[u8]) -> HandRanking {
    match counts {
        [3, 2, ..] => HandRanking::FullHouse,
        [3, ..] => HandRanking::ThreeOfAKind,
        [2, 2, ..] => HandRanking::TwoPair,
        [2, ..] => HandRanking::Pair,
        _ => HandRanking::HighCard,
    }
}

fn sort_desc(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.value().cmp(&a.value()));
    sorted
}

// Multiset of per-value counts, largest first.
fn value_counts(values: &[u8]) -> Vec<u8> {
    let mut rank_counts = [0u8; 15];
    for &v in values {
        rank_counts[v as usize] += 1;
    }
    let mut counts: Vec<u8> = rank_counts.into_iter().filter(|&c| c > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
}

fn detect_straight(values_desc: &[u8]) -> bool {
    let mut uniq = values_desc.to_vec();
    uniq.dedup();
    if uniq.len() < 5 {
        return false;
    }
    // strictly descending, so a span of 4 across five entries means consecutive
    if uniq.windows(5).any(|w| w[0] - w[4] == 4) {
        return true;
    }
    // wheel: A-5-4-3-2
    [14, 5, 4, 3, 2].iter().all(|v| uniq.contains(v))
}

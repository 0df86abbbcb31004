//! Card, table, and rejection formatters for terminal display.
//!
//! Cards use Unicode suit symbols where the terminal is likely to render them and
//! fall back to `h d c s` letters otherwise.
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_cli::formatters::{format_card, format_cards};
//!
//! let ten = Card::new(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten) == "10♠" || format_card(&ten) == "10s");
//! assert!(format_cards(&[ten]).starts_with("[10"));
//! ```

use headsup_engine::cards::Card;
use headsup_engine::errors::GameError;
use headsup_engine::game::{RoundSnapshot, Winner};
use headsup_engine::player::Seat;

/// On Windows only modern terminals are trusted with suit symbols.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_card(card: &Card) -> String {
    if supports_unicode() {
        card.to_string()
    } else {
        format!("{}{}", card.rank.label(), card.suit.letter())
    }
}

/// `[A♠ K♦]`, or `[]` when there is nothing to show.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

/// Multi-line table view; the opponent's cards show as `[?? ??]` until revealed.
pub fn format_table(snap: &RoundSnapshot) -> String {
    let opponent = match &snap.opponent_hole {
        Some(cards) => format_cards(cards),
        None => "[?? ??]".to_string(),
    };
    let dealer_mark = |seat: Seat| if snap.dealer == seat { " (D)" } else { "" };
    let mut lines = vec![
        format!(
            "Phase: {}  Pot: {}  Current bet: {}",
            snap.phase.as_str(),
            snap.pot,
            snap.current_bet
        ),
        format!("Board: {}", format_cards(&snap.community)),
        format!(
            "AI{}: {} chips, bet {}  {}",
            dealer_mark(Seat::Opponent),
            snap.opponent_chips,
            snap.opponent_bet,
            opponent
        ),
        format!(
            "You{}: {} chips, bet {}  {}",
            dealer_mark(Seat::Player),
            snap.player_chips,
            snap.player_bet,
            format_cards(&snap.player_hole)
        ),
    ];
    if snap.phase.is_betting() && snap.to_call() > 0 {
        lines.push(format!("To call: {}", snap.to_call()));
    }
    lines.join("\n")
}

pub fn format_winner(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "you",
        Winner::Opponent => "AI",
        Winner::Tie => "split",
    }
}

/// What the table tells the player when an action is refused.
pub fn describe_rejection(error: &GameError) -> String {
    match error {
        GameError::InsufficientChips { needed, available } => format!(
            "You don't have enough chips for that! (needed {}, you have {})",
            needed, available
        ),
        GameError::InvalidAction(msg) if msg.contains("check") => {
            "You can't check when there's a bet to call!".to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::engine::Engine;

    #[test]
    fn hidden_opponent_cards_are_masked() {
        let mut engine = Engine::new(Some(3));
        let snap = engine.start_hand().unwrap().snapshot;
        let table = format_table(&snap);
        assert!(table.contains("[?? ??]"));
        assert!(table.contains("Pot: 30"));
        assert!(table.contains("You (D): 990 chips"));
        assert!(table.contains("To call: 10"));
    }

    #[test]
    fn check_rejection_uses_table_wording() {
        let msg = describe_rejection(&GameError::InvalidAction("cannot check facing a bet".into()));
        assert_eq!(msg, "You can't check when there's a bet to call!");
    }

    #[test]
    fn empty_board_prints_brackets() {
        assert_eq!(format_cards(&[]), "[]");
    }
}

//! Input parsing and validation for interactive commands.

use std::collections::HashSet;

use headsup_engine::cards::{Card, ParseCardError};
use headsup_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts (case-insensitive): `fold`/`f`, `check`/`k`, `call`/`c`,
/// `raise N`/`r N`, and `q`/`quit`.
///
/// ```rust
/// # use headsup_cli::validation::{parse_player_action, ParseResult};
/// use headsup_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(
///     parse_player_action("raise 40"),
///     ParseResult::Action(PlayerAction::Raise(40))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 50')".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, q",
            other
        )),
    }
}

/// Parses card tokens like `As`, `10h`, `Td`; rejects repeats of the same card.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, String> {
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        let card: Card = token.parse().map_err(|e: ParseCardError| e.to_string())?;
        if !seen.insert(card) {
            return Err(format!("duplicate card '{}'", token));
        }
        cards.push(card);
    }
    Ok(cards)
}

//! `eval`: ranks a set of cards given on the command line.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::ui;
use crate::validation::parse_cards;
use headsup_engine::hand::evaluate;
use std::io::Write;

pub fn handle_eval_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_cards(cards).map_err(CliError::InvalidInput)?;
    if cards.len() < 5 {
        ui::display_warning(err, "fewer than 5 cards always rank as High Card")?;
    }
    let result = evaluate(&cards);
    writeln!(out, "Cards: {}", format_cards(&result.cards))?;
    writeln!(
        out,
        "Ranking: {} ({})",
        result.ranking,
        result.ranking.value()
    )?;
    Ok(())
}

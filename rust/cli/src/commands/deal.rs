//! `deal`: starts a single hand and shows everything, opponent cards included.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_table};
use headsup_engine::engine::Engine;
use headsup_engine::player::Seat;
use std::io::Write;
use tracing::debug;

/// Deals one hand with `seed` (falling back to the configured seed, then a random
/// one) and prints both hole cards plus the preflop table, or JSON with `json`.
pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut engine = Engine::with_rules(
        Some(seed),
        cfg.starting_stack,
        cfg.starting_stack,
        cfg.rules(),
    );
    let snapshot = engine.start_hand()?.snapshot;
    let opponent_hole = engine.round().hole(Seat::Opponent).to_vec();
    debug!(seed, "dealt inspection hand");

    if json {
        let doc = serde_json::json!({
            "seed": seed,
            "snapshot": snapshot,
            "opponent_hole": opponent_hole,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(());
    }

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Hole You: {}", format_cards(&snapshot.player_hole))?;
    writeln!(out, "Hole AI: {}", format_cards(&opponent_hole))?;
    writeln!(out, "{}", format_table(&snapshot))?;
    Ok(())
}

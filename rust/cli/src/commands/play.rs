//! # Play Command
//!
//! Interactive session against the scripted opponent. Each hand:
//!
//! 1. the table is printed and the player types `fold`, `check`, `call`, `raise N`
//!    or `q`;
//! 2. the engine commits the move and the narration is printed;
//! 3. after the configured pause the opponent's answer is applied and narrated.
//!
//! Refused moves are explained and the prompt repeats. The session ends after the
//! requested number of hands, when a stack can no longer post its blind, on `q`,
//! or at end of input.

use crate::config;
use crate::error::CliError;
use crate::formatters::{describe_rejection, format_table, format_winner};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use headsup_ai::{AIOpponent, create_ai, play_opponent_turn};
use headsup_engine::engine::Engine;
use headsup_engine::player::Seat;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Flags of the `play` subcommand; `None` falls back to the configuration.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub hands: Option<u32>,
    pub seed: Option<u64>,
    pub think_ms: Option<u64>,
    pub opponent: String,
}

#[derive(Debug, PartialEq, Eq)]
enum HandEnd {
    Finished,
    Quit,
}

pub fn handle_play_command(
    opts: PlayOptions,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == Some(0) {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let ai = create_ai(&opts.opponent)?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let think = Duration::from_millis(opts.think_ms.unwrap_or(cfg.think_ms));

    let mut engine = Engine::with_rules(
        Some(seed),
        cfg.starting_stack,
        cfg.starting_stack,
        cfg.rules(),
    );
    info!(seed, opponent = ai.name(), "session started");

    writeln!(
        out,
        "play: opponent={} seed={} stack={} blinds={}/{}",
        ai.name(),
        seed,
        cfg.starting_stack,
        cfg.small_blind,
        cfg.big_blind
    )?;
    if !cfg.advance_on_checked_street {
        ui::display_warning(
            err,
            "streets checked through by both players do not advance; raise to move on",
        )?;
    }

    let mut played = 0u32;
    loop {
        if opts.hands.is_some_and(|limit| played >= limit) {
            break;
        }
        if !engine.can_start_hand() {
            writeln!(out, "A stack can no longer cover the blinds.")?;
            break;
        }

        writeln!(out)?;
        writeln!(out, "Hand {}", engine.hands_started() + 1)?;
        let started = engine.start_hand()?;
        ui::narrate(out, &started.events)?;

        if play_hand(&mut engine, ai.as_ref(), think, input, out, err)? == HandEnd::Quit {
            debug!(played, "player left mid-hand");
            break;
        }
        played += 1;
        if let Some(record) = engine.history() {
            if let Ok(line) = record.to_json_line() {
                trace!(record = %line, "hand record");
            }
            writeln!(
                out,
                "{}: {}",
                record.hand_id,
                record.result.as_deref().unwrap_or("unfinished")
            )?;
        }
    }

    let you = engine.participant(Seat::Player).chips();
    let them = engine.participant(Seat::Opponent).chips();
    writeln!(out)?;
    writeln!(out, "Hands played: {}", played)?;
    writeln!(out, "Final chips: you {}, AI {}", you, them)?;
    info!(played, you, them, "session finished");
    Ok(())
}

/// Drives one started hand to `Finished`, or stops on `q` / end of input.
fn play_hand(
    engine: &mut Engine,
    ai: &dyn AIOpponent,
    think: Duration,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<HandEnd, CliError> {
    loop {
        let snap = engine.snapshot();
        writeln!(out, "{}", format_table(&snap))?;
        if snap.is_finished() {
            if let Some(outcome) = &snap.outcome {
                writeln!(out, "Winner: {}", format_winner(outcome.winner))?;
            }
            return Ok(HandEnd::Finished);
        }

        write!(out, "Your action (fold/check/call/raise N/q): ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(input) else {
            writeln!(out)?;
            return Ok(HandEnd::Quit);
        };
        let action = match parse_player_action(&line) {
            ParseResult::Action(action) => action,
            ParseResult::Quit => return Ok(HandEnd::Quit),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        match engine.apply_player_action(action) {
            Ok(transition) => ui::narrate(out, &transition.events)?,
            Err(rejected) => {
                debug!(error = %rejected, "action refused");
                ui::say(out, Seat::Opponent, &describe_rejection(&rejected))?;
                continue;
            }
        }

        if engine.awaiting_opponent() {
            if !think.is_zero() {
                std::thread::sleep(think);
            }
            let answer = play_opponent_turn(engine, ai)?;
            ui::narrate(out, &answer.events)?;
        }
    }
}

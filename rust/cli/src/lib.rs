//! # headsup CLI
//!
//! Command-line front end for the heads-up engine: an interactive `play` session
//! against the scripted opponent plus a few inspection commands.
//!
//! The entry point is [`run`], which parses arguments, dispatches to a command
//! handler and turns the outcome into an exit code.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = headsup_cli::run(["headsup", "eval", "As", "Ks", "Qs", "Js", "10s"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```
//!
//! ## Subcommands
//!
//! - `play [--hands N] [--seed S] [--think-ms MS]`: play against the scripted opponent
//! - `deal [--seed S] [--json]`: deal one hand for inspection
//! - `eval <CARDS>...`: rank a set of cards
//! - `cfg`: show the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{COMMANDS, Commands, HeadsupCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_play_command,
};

pub use error::CliError;

/// Success exit code.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for every error, including argument errors.
pub const EXIT_ERROR: i32 = 2;

/// Runs the CLI with stdin as the source of interactive input.
///
/// Returns `0` on success and `2` on any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    run_with_input(args, &mut lock, out, err)
}

/// Same as [`run`], reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HeadsupCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            hands,
            seed,
            think_ms,
            opponent,
        } => handle_play_command(
            PlayOptions {
                hands,
                seed,
                think_ms,
                opponent,
            },
            input,
            out,
            err,
        ),
        Commands::Deal { seed, json } => handle_deal_command(seed, json, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            EXIT_ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout with success
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: headsup <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: headsup --help");
    EXIT_ERROR
}

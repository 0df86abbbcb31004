//! Command-line surface of the `headsup` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "headsup",
    version,
    about = "Heads-up Texas Hold'em against a scripted opponent"
)]
pub struct HeadsupCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against the scripted opponent, reading actions from stdin
    Play {
        /// Stop after this many hands (default: until a stack cannot post blinds)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Opponent "thinking" pause in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
        /// Opponent kind
        #[arg(long, default_value = "scripted")]
        opponent: String,
    },
    /// Deal one hand and show both hole cards and the preflop table
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Print the table as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate cards such as `As Kd 10h` and print the hand ranking
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Subcommand names, listed after a parse error.
pub const COMMANDS: &[&str] = &["play", "deal", "eval", "cfg"];

//! Command handlers, one module per subcommand.
//!
//! Each handler has the shape `handle_X_command(..., out, err) -> Result<(), CliError>`:
//! output streams are passed in, and errors propagate as [`CliError`](crate::error::CliError)
//! for `run` to report.

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};

//! Diagnostic logging for the binary. User-facing output never goes through here.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "HEADSUP_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr `fmt` subscriber filtered by `HEADSUP_LOG` (default `warn`).
///
/// Returns `false` if a global subscriber was already set.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}

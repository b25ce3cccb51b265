//! Logging setup on the `tracing` ecosystem.
//!
//! Logs go to stderr so that a report written to stdout stays clean.
//!
//! Level resolution, first match wins:
//! 1. `--verbose`: debug for the `fa_*` crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for the `fa_*` crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 5] = ["food_access", "fa_core", "fa_graph", "fa_rank", "fa_io"];

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|c| format!("{c}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber.  Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(directives("debug"))
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives("info")))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

//! Log subscriber setup.
//!
//! The library crates log through the `log` facade; the subscriber installed
//! here also captures those records and writes everything to stderr, so
//! stdout carries only command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Returns the filter directive for the given verbosity flags.
pub fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` is honoured unless `-v` or `-q` was given.
pub fn init(verbose: u8, quiet: bool) {
    let directive = level_directive(verbose, quiet);
    let filter = if verbose > 0 || quiet {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose > 1),
        )
        .init();
}

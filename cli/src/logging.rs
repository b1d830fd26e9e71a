//! Diagnostic logging via `tracing`.
//!
//! User-facing progress goes through `ProgressReporter`; this subscriber only
//! carries diagnostics, on stderr. Without `-v` only errors are logged, so
//! warnings already shown by the reporter are not printed twice.

use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count. `RUST_LOG` takes precedence.
#[must_use]
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    }
}

/// ANSI escapes only on a terminal and never with `--no-color`.
#[must_use]
pub fn use_ansi(stderr_is_terminal: bool, no_color: bool) -> bool {
    stderr_is_terminal && !no_color
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, no_color: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi(std::io::stderr().is_terminal(), no_color))
        .with_target(false)
        .try_init();
}

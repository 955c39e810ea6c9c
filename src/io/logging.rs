//! Diagnostic logging on stderr

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Default filter directive for the requested verbosity
///
/// Quiet wins over verbose when both are set.
pub const fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Whether colour codes should be written to `stream`
///
/// Redirected output (files, pipes) stays plain text.
pub fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the verbosity flags. A second call is a no-op, which
/// keeps repeated processor runs in one process (tests) from failing.
pub fn init(quiet: bool, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_ansi(ansi_enabled(&std::io::stderr()))
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

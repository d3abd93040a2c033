//! Structured log output on stderr

use tracing_subscriber::EnvFilter;

/// Default filter directive for the requested verbosity
///
/// `quiet` wins over `verbose`.
pub const fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flags. Installing twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr diagnostics subscriber.
///
/// `RUST_LOG` drives the filter (default `warn`); `verbose` forces `debug`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. repeated run() in one process) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

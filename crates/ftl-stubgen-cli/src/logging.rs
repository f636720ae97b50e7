//! Log output for the CLI

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Build the filter: an explicit level wins, then `RUST_LOG`, then `info`.
pub fn env_filter(level: Option<&str>) -> Result<EnvFilter> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    Ok(filter)
}

/// Install a fmt subscriber writing to stderr.
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = env_filter(level)?;

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}

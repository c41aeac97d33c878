//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// `filter` is an `EnvFilter` directive such as `info` or
/// `link_shortener=debug,tower_http=info`. `format` is `json` for one JSON
/// object per line, anything else for human-readable text.
///
/// # Errors
///
/// Returns an error if the directive does not parse or a subscriber is
/// already installed.
pub fn init(filter: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid RUST_LOG directive '{filter}'"))?;

    let builder = fmt().with_env_filter(filter).with_target(true);

    let installed = if format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

//! Logging utilities wrapping `tracing` initialisation

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LoggingOptions;
use crate::error::{Error, Result};

/// Initialise the global tracing subscriber, writing to stderr.
///
/// Subsequent calls are ignored to avoid reinitialisation panics.
pub fn init(options: &LoggingOptions) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let level = options.level.as_str();
    let env_filter = EnvFilter::try_new(level)
        .map_err(|e| Error::Config(format!("Invalid log level '{level}': {e}")))?;

    Registry::default()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(options.color)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_filter() {
        let options = LoggingOptions {
            level: "qrcanvas=loud".to_string(),
            color: false,
        };
        if !tracing::dispatcher::has_been_set() {
            assert!(matches!(init(&options), Err(Error::Config(_))));
        }
    }
}

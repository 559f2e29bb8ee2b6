//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Output always goes to stderr: the RPC binary owns stdout for responses.
//!
//! # Log Levels
//!
//! - `warn`: storage failures, rejected input, missing render targets
//! - `info`: startup and shutdown
//! - `debug`: state transitions (profile loads, person switches, panel toggles)
//! - `trace`: per-event detail (speech events, applies)

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive, e.g. `thinkup=debug`.
pub const LOG_ENV: &str = "THINKUP_LOG";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directive used when `THINKUP_LOG` is unset or invalid.
    pub default_directive: String,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            with_ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, directive: &str) -> Self {
        if !directive.trim().is_empty() {
            self.default_directive = directive.to_string();
        }
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Returns `false` when one was already installed, so
/// tests and both binaries may call it freely.
pub fn init_logging(config: &LogConfig) -> bool {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(layer)
        .try_init()
        .is_ok()
}

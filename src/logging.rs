//! Logging for the `textclean` binary.
//!
//! The library itself never logs; only the batch runner does. Everything
//! goes to stderr so stdout carries nothing but normalized text.

use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format.
    #[default]
    Compact,
    /// Human-readable multi-line format.
    Pretty,
    /// JSON format for machine parsing.
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`.
    pub use_env_filter: bool,
    pub format: LogFormat,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            with_ansi: false,
        }
    }
}

impl LogConfig {
    fn env_filter(&self) -> EnvFilter {
        let builder = EnvFilter::builder().with_default_directive(self.level_filter.into());
        if self.use_env_filter {
            builder.from_env_lossy()
        } else {
            builder.parse_lossy("")
        }
    }
}

/// Install the global subscriber. Call once, before any work.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_ansi(config.with_ansi)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.with_ansi)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
    }
}

//! Logging through `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so that stdout only carries the validation results. Identity
//! numbers are personal data: they are printed on stdout but never logged.

use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most verbose level that gets logged.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` decide the filter when it is set.
    pub use_env_filter: bool,
    pub format: LogFormat,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line format.
    Pretty,
    /// Single-line format.
    #[default]
    Compact,
    /// JSON format for machine parsing.
    Json,
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

/// Installs the global tracing subscriber, writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    init_logging_with_writer(config, io::stderr)
}

/// Installs the global tracing subscriber with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_writer(writer)
                .with_ansi(config.with_ansi);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    }
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let from_level = || EnvFilter::default().add_directive(config.level_filter.into());
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| from_level())
    } else {
        from_level()
    }
}

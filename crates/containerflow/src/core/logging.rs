//! Logging infrastructure for diagram generation
//!
//! This module provides structured logging using the `tracing` crate.
//! The library itself only emits spans and events; binaries decide where
//! they go by calling [`init_logging`].
//!
//! # Log Levels
//!
//! - `trace`: Per-container and per-relationship detail
//! - `debug`: Per-document counts and dropped entries
//! - `info`: Generation start and completion (default)
//! - `warn`: Entries that are skipped or identifiers that collide
//! - `error`: Failed saves
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `CONTAINERFLOW_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `CONTAINERFLOW_LOG_FORMAT`: Set log format (compact|pretty|json)
//! - `RUST_LOG`: Standard `tracing-subscriber` filter directives
//!
//! # Filtering Logs
//!
//! ```bash
//! # Show only normalizer decisions
//! RUST_LOG="containerflow::containers::normalizer=debug" containerflow generate
//!
//! # Everything at info, relationship rendering at trace
//! RUST_LOG="info,containerflow::containers::relationships=trace" containerflow check
//! ```

use std::str::FromStr;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Environment variable consulted for the log level
pub const LOG_LEVEL_ENV: &str = "CONTAINERFLOW_LOG_LEVEL";

/// Environment variable consulted for the log format
pub const LOG_FORMAT_ENV: &str = "CONTAINERFLOW_LOG_FORMAT";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Pick the filter directive for [`init_logging`]
///
/// An explicit level wins, then `CONTAINERFLOW_LOG_LEVEL`, then `RUST_LOG`,
/// then `info`.
pub fn resolve_log_level(
    explicit: Option<&str>,
    crate_env: Option<String>,
    rust_log: Option<String>,
) -> String {
    explicit
        .map(str::to_string)
        .or(crate_env)
        .or(rust_log)
        .unwrap_or_else(|| "info".to_string())
}

/// Initialize the tracing subscriber with the given log level and format
///
/// * `level` - Optional filter directive. If None, uses `CONTAINERFLOW_LOG_LEVEL`
///   or `RUST_LOG`, or defaults to `info`.
/// * `format` - Optional log format. If None, uses `CONTAINERFLOW_LOG_FORMAT`,
///   or defaults to `compact`.
///
/// Returns an error if the format is unknown or a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = resolve_log_level(
        level,
        std::env::var(LOG_LEVEL_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );

    let log_format = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var(LOG_FORMAT_ENV).ok())
        .unwrap_or_else(|| "compact".to_string());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    Registry::default()
        .with(filter)
        .with(format_layer(format))
        .try_init()?;

    Ok(())
}

/// Build the fmt layer for a format; logs go to stderr so diagrams printed
/// to stdout stay clean
fn format_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let detailed = format != LogFormat::Compact;
    let span_events = if detailed {
        FmtSpan::ACTIVE
    } else {
        FmtSpan::NONE
    };

    let layer = fmt::Layer::<S>::default()
        .with_writer(std::io::stderr)
        .with_target(detailed)
        .with_level(true)
        .with_file(detailed)
        .with_line_number(detailed)
        .with_span_events(span_events);

    match format {
        LogFormat::Compact => Box::new(layer),
        LogFormat::Pretty => Box::new(layer.pretty()),
        LogFormat::Json => Box::new(layer.json()),
    }
}

/// Initialize logging with default settings (info level, compact format)
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}

//! Structured logging for the bmssp CLI.
//!
//! Diagnostics go to `stderr` via `tracing` so solver summaries on `stdout`
//! stay machine-readable. The `log` facade is bridged so dependencies using
//! either API land in the same stream.

use std::io;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "BMSSP_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostic events.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain text for terminals.
    #[default]
    Human,
    /// Newline-delimited JSON for log collectors.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: raw.trim().to_owned(),
            }),
        }
    }
}

/// Errors raised while configuring structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `BMSSP_LOG_FORMAT` held a value other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Reads the requested format from `BMSSP_LOG_FORMAT`.
///
/// An unset variable selects [`LogFormat::Human`]. Non-Unicode values are
/// converted lossily before parsing and therefore rejected as unsupported.
///
/// # Errors
/// Returns [`LoggingError::UnsupportedFormat`] for unrecognised values.
pub fn format_from_env() -> Result<LogFormat, LoggingError> {
    match std::env::var_os(LOG_FORMAT_ENV) {
        Some(raw) => raw.to_string_lossy().parse(),
        None => Ok(LogFormat::default()),
    }
}

/// Installs the global subscriber and the `log` bridge.
///
/// The level filter comes from `RUST_LOG` and defaults to `info`. Repeated
/// calls are no-ops, and losing the race for the global subscriber slot to
/// another component is reported on `stderr` rather than treated as fatal.
///
/// # Errors
/// Returns [`LoggingError`] when [`format_from_env`] rejects the configured
/// format.
pub fn init_logging() -> Result<(), LoggingError> {
    let format = format_from_env()?;
    if INSTALLED.set(()).is_err() {
        return Ok(());
    }

    // Best-effort: another logger owning the `log` slot keeps its bridge.
    let _ = LogTracer::init();

    if let Err(err) = install(format) {
        eprintln!("structured logging already configured elsewhere: {err}");
    }
    Ok(())
}

fn install(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let events = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(io::stderr);

    match format {
        LogFormat::Human => tracing_subscriber::registry()
            .with(filter)
            .with(events)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(events.json().with_current_span(true).with_span_list(true))
            .try_init(),
    }
}

//! Logging bootstrap.
use crate::settings::{LogFormat, TelemetrySettings};
use std::{
    env::{VarError, var},
    error::Error,
};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt};

/// Errors that may occur when setting up logging.
#[derive(Debug, Error)]
pub(crate) enum TelemetryError {
    /// `RUST_LOG` is set, but not to valid filter directives.
    #[error("Invalid log filter in RUST_LOG: {0}")]
    InvalidEnv(#[source] ParseError),
    /// `RUST_LOG` is set, but not to valid unicode.
    #[error("RUST_LOG is not valid unicode.")]
    NotUnicode,
    /// The configured filter directives are malformed.
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber was already installed.
    #[error("Unable to install the log subscriber: {0}")]
    Install(#[source] Box<dyn Error + Send + Sync>),
}

/// Pick the filter: directives from the environment when given, the configured ones otherwise.
fn build_filter(from_env: Option<&str>, configured: &str) -> Result<EnvFilter, TelemetryError> {
    match from_env {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(TelemetryError::InvalidEnv)
        },
        None => Ok(EnvFilter::try_new(configured)?),
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured filter.
///
/// # Errors
///
/// See [`TelemetryError`].
pub(crate) fn init(settings: &TelemetrySettings) -> Result<(), TelemetryError> {
    let from_env = match var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => Some(directives),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => return Err(TelemetryError::NotUnicode),
    };
    let filter = build_filter(from_env.as_deref(), &settings.filter)?;
    let builder = fmt().with_env_filter(filter);

    match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(TelemetryError::Install)
}

//! Layered configuration: built-in defaults, then an optional TOML file, then `BOOKSHELF_*`
//! environment variables (`__` separates sections, e.g. `BOOKSHELF_SERVER__PORT=5000`).
use bookshelf::IdPolicy;
use config::{
    Config, ConfigError, Environment, File,
    builder::{ConfigBuilder, DefaultState},
};
use serde::Deserialize;
use std::env::var;
use thiserror::Error;

/// Names the configuration file, without extension.
const CONFIG_FILE_VAR: &str = "BOOKSHELF_CONFIG";
/// The configuration file used when [`CONFIG_FILE_VAR`] is unset.
const DEFAULT_CONFIG_FILE: &str = "bookshelf";
/// Prefix of the environment variables that override settings.
const ENV_PREFIX: &str = "BOOKSHELF";

/// Errors that may occur when loading settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    /// A source could not be read, or its values have the wrong types.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The GraphQL endpoint is not an absolute path.
    #[error("The GraphQL path {0:?} must start with '/'.")]
    InvalidPath(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Where to listen.
    pub(crate) server: ServerSettings,
    /// How the GraphQL endpoint behaves.
    pub(crate) graphql: GraphqlSettings,
    /// Logging.
    pub(crate) telemetry: TelemetrySettings,
}

impl Settings {
    /// Load settings from the configuration file and the environment.
    ///
    /// # Errors
    ///
    /// See [`SettingsError`]. A missing configuration file is not an error.
    pub(crate) fn load() -> Result<Self, SettingsError> {
        let file = var(CONFIG_FILE_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());
        Self::from_sources(
            Config::builder()
                .add_source(File::with_name(&file).required(false))
                .add_source(environment()),
        )
    }

    /// Build and validate settings from an assembled set of sources.
    fn from_sources(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        if !settings.graphql.path.starts_with('/') {
            return Err(SettingsError::InvalidPath(settings.graphql.path));
        }

        Ok(settings)
    }
}

/// The environment source, without a snapshot of the actual environment attached.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Where to listen.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct ServerSettings {
    /// The address to bind.
    pub(crate) host: String,
    /// The port to bind.
    pub(crate) port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 4000,
        }
    }
}

/// How the GraphQL endpoint behaves.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct GraphqlSettings {
    /// The path queries are posted to.
    pub(crate) path: String,
    /// Whether a `GET` on the path serves GraphiQL.
    pub(crate) playground: bool,
    /// Whether an id that is not a number is an error rather than a miss.
    pub(crate) strict_ids: bool,
}

impl GraphqlSettings {
    /// The id policy the resolver should use.
    pub(crate) const fn id_policy(&self) -> IdPolicy {
        if self.strict_ids {
            IdPolicy::Strict
        } else {
            IdPolicy::Lenient
        }
    }
}

impl Default for GraphqlSettings {
    fn default() -> Self {
        Self {
            path: "/".to_owned(),
            playground: true,
            strict_ids: false,
        }
    }
}

/// Logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct TelemetrySettings {
    /// Filter directives, used when `RUST_LOG` is unset.
    pub(crate) filter: String,
    /// How log lines are written.
    pub(crate) log_format: LogFormat,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

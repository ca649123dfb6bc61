//! Application Settings
//!
//! Layered: built-in defaults, then an optional `symptom-advisor.{toml,yaml,json}`
//! file, then `SYMPTOM_ADVISOR__*` environment variables.

use advisor::{AdvisorConfig, MatchPolicy};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Default config file name (extension resolved by the `config` crate)
const DEFAULT_CONFIG_FILE: &str = "symptom-advisor";
const ENV_PREFIX: &str = "SYMPTOM_ADVISOR";

/// Errors loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// CSV file holding the symptom rules
    pub rules_path: String,
    /// Symptom matching policy
    pub match_policy: MatchPolicy,
    /// Tracing level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Prometheus exporter listen address; disabled when unset
    #[serde(default)]
    pub metrics_addr: Option<String>,
}

impl AppConfig {
    /// Load from the default file name and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from a given config file (optional) and environment
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let settings = defaults()?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load from an inline TOML document layered over the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Advisor settings carried by this config
    pub fn advisor(&self) -> AdvisorConfig {
        AdvisorConfig {
            match_policy: self.match_policy,
        }
    }

    /// Parsed tracing level, falling back to INFO
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            rules_path: "symptom_rules.csv".to_string(),
            match_policy: MatchPolicy::Contains,
            log_level: "info".to_string(),
            metrics_addr: None,
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    let defaults = AppConfig::default();
    Config::builder()
        .set_default("bind_addr", defaults.bind_addr)?
        .set_default("rules_path", defaults.rules_path)?
        .set_default("match_policy", defaults.match_policy.as_str())?
        .set_default("log_level", defaults.log_level)
}

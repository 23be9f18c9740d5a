//! Configuration models for pokedex.
//!
//! Every field has a default, so an absent file and an empty file both
//! produce a working configuration pointed at the public PokeAPI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for pokedex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data service settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Output rendering settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Data service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; lookups go to `{base_url}/pokemon/{identifier}`.
    /// Values can contain ${ENV_VAR} for environment variable expansion
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How the output region is printed
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering format for the output region.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment: heading, image, three paragraphs
    #[default]
    Html,
    /// Same lines as plain text
    Text,
    /// Result serialized as JSON
    Json,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Load from `path` if given, otherwise fall back to defaults.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Base URL with env vars expanded and trailing slashes removed.
    pub fn resolve_base_url(&self) -> String {
        expand_env_vars(&self.api.base_url)
            .trim_end_matches('/')
            .to_string()
    }

    /// Check that the resolved base URL is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.resolve_base_url();
        let has_scheme = base_url.starts_with("http://") || base_url.starts_with("https://");
        let has_host = base_url
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());

        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        Ok(())
    }
}

/// Expand environment variables in a string.
///
/// Supports ${VAR_NAME} syntax.
/// If the variable is not set, the placeholder is left unchanged.
pub fn expand_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let Ok(re) = regex::Regex::new(r"\$\{([^}]+)\}") else {
        return result;
    };

    for cap in re.captures_iter(s) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid base_url '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

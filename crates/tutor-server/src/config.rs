//! Server configuration loaded from the process environment.

use std::fmt;
use std::path::PathBuf;

use tutor_core::{ModelConfig, DEFAULT_MODEL};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_INDEX_PATH: &str = "static/index.html";

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("Missing required environment variable '{0}'")]
    Missing(&'static str),

    /// A variable is set but cannot be used.
    #[error("Invalid value '{value}' for '{var}': {message}")]
    Invalid {
        var: &'static str,
        value: String,
        message: String,
    },
}

/// Everything the server needs at startup.
pub struct ServerConfig {
    pub api_key: String,
    pub model: ModelConfig,
    pub host: String,
    pub port: u16,
    pub index_path: PathBuf,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("index_path", &self.index_path)
            .finish()
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("GOOGLE_API_KEY").ok_or(ConfigError::Missing("GOOGLE_API_KEY"))?;

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            model: ModelConfig {
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: get("GEMINI_API_BASE"),
            },
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            index_path: get("INDEX_HTML_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_PATH)),
        })
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

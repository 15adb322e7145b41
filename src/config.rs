//! Server configuration.
//!
//! Values layer in increasing precedence: struct defaults, then an optional
//! TOML file, then environment variables, then CLI flags (applied by the
//! binary). The environment names match the reference deployment: `HOST`,
//! `PORT`, `REQUIRE_AUTH`, `SERVE_STATIC`, and `FRONTEND_DIST`.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Process configuration for the HTTP adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Reject requests without an owner header instead of falling back to
    /// the shared anonymous owner.
    #[serde(default)]
    pub require_auth: bool,
    /// Owner id used when authentication is not required and the request
    /// carries no owner header.
    #[serde(default = "default_anonymous_owner")]
    pub anonymous_owner: String,
    /// Directory of frontend assets to serve as a fallback. Disabled when
    /// absent.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_anonymous_owner() -> String {
    "anonymous".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            require_auth: false,
            anonymous_owner: default_anonymous_owner(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded from file");
        Ok(config)
    }

    /// Loads configuration from an optional file, then applies environment
    /// overrides.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Applies environment variable overrides in place.
    #[instrument(skip(self))]
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.port = port
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid PORT value: {}", e)))?;
        }
        if let Ok(value) = std::env::var("REQUIRE_AUTH") {
            self.require_auth = value == "true";
        }
        if std::env::var("SERVE_STATIC").as_deref() == Ok("true") {
            let dist = std::env::var("FRONTEND_DIST")
                .unwrap_or_else(|_| "frontend/dist".to_string());
            self.static_dir = Some(PathBuf::from(dist));
        }
        debug!(
            host = %self.host,
            port = self.port,
            require_auth = self.require_auth,
            "Applied environment overrides"
        );
        Ok(())
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

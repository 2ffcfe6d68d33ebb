//! Configuration loading and constants.
//!
//! Loads the demo server's configuration from a TOML file and defines the
//! default paths, reasons, and header values it uses. `AppConfig` is the root
//! configuration struct; every section except `[http]` may be omitted.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

use crate::render::HandlerOptions;

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Health responses must never be served from an intermediate cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Default Routes
// =============================================================================

/// Health endpoint using the configured format
pub const DEFAULT_HEALTH_PATH: &str = "/health";

/// Health endpoint that always renders JSON
pub const DEFAULT_HEALTH_JSON_PATH: &str = formatcp!("{}/json", DEFAULT_HEALTH_PATH);

/// Suggested path for the status toggle route (disabled unless configured)
pub const DEFAULT_TOGGLE_PATH: &str = "/toggle-health";

// =============================================================================
// Status Reasons
// =============================================================================

/// Reason set by the toggle route when flipping to DOWN
pub const TOGGLE_DOWN_REASON: &str = "Service manually marked as unhealthy";

/// Reason set while the server drains connections on shutdown
pub const SHUTDOWN_REASON: &str = "Server is shutting down";

// =============================================================================
// Shutdown Timing
// =============================================================================

/// Seconds to keep serving DOWN before connections start draining
pub const DEFAULT_SHUTDOWN_DRAIN_SECS: u64 = 1;

/// Seconds to wait for in-flight connections during graceful shutdown
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "healthline=debug,tower_http=debug";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub shutdown: ShutdownConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Health endpoint routes and rendering
#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    /// Route for the configurable-format endpoint
    #[serde(default = "HealthConfig::default_path")]
    pub path: String,
    /// Route for the always-JSON endpoint
    #[serde(default = "HealthConfig::default_json_path")]
    pub json_path: String,
    /// Route that flips UP/DOWN; not mounted when absent
    pub toggle_path: Option<String>,
    /// Render `path` as JSON instead of plain text
    #[serde(default)]
    pub use_json: bool,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            json_path: Self::default_json_path(),
            toggle_path: None,
            use_json: false,
        }
    }
}

impl HealthConfig {
    fn default_path() -> String {
        DEFAULT_HEALTH_PATH.to_string()
    }

    fn default_json_path() -> String {
        DEFAULT_HEALTH_JSON_PATH.to_string()
    }

    /// Handler options for the configurable-format endpoint
    pub fn handler_options(&self) -> HandlerOptions {
        HandlerOptions {
            use_json: self.use_json,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut paths = vec![("health.path", &self.path), ("health.json_path", &self.json_path)];
        if let Some(toggle) = &self.toggle_path {
            paths.push(("health.toggle_path", toggle));
        }

        for (key, path) in &paths {
            if !path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{} must start with '/', got {:?}",
                    key, path
                )));
            }
        }

        for (i, (key, path)) in paths.iter().enumerate() {
            if let Some((other, _)) = paths[i + 1..].iter().find(|(_, p)| p == path) {
                return Err(ConfigError::Validation(format!(
                    "{} and {} both use route {:?}",
                    key, other, path
                )));
            }
        }

        Ok(())
    }
}

/// Shutdown sequencing
#[derive(Debug, Clone, Deserialize)]
pub struct ShutdownConfig {
    /// Seconds to report DOWN before draining (default: 1)
    #[serde(default = "ShutdownConfig::default_drain")]
    pub drain_seconds: u64,
    /// Graceful shutdown timeout in seconds (default: 30)
    #[serde(default = "ShutdownConfig::default_grace")]
    pub grace_seconds: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            drain_seconds: Self::default_drain(),
            grace_seconds: Self::default_grace(),
        }
    }
}

impl ShutdownConfig {
    fn default_drain() -> u64 {
        DEFAULT_SHUTDOWN_DRAIN_SECS
    }

    fn default_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable (default)
    #[default]
    Text,
    /// Structured JSON lines
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }
}

impl std::str::FromStr for AppConfig {
    type Err = ConfigError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let config: AppConfig = toml::from_str(contents)?;
        config.health.validate()?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

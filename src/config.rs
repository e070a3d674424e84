//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines the
//! constants for the health response, response headers, logging and shutdown.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::path::Path;

// =============================================================================
// Health Endpoint
// =============================================================================

/// Route of the liveness endpoint
pub const HEALTH_PATH: &str = "/health";

/// Literal body returned by the liveness endpoint
pub const HEALTH_BODY: &str = "OK";

/// Liveness answers must never be served from a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Response header echoing the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Server Lifecycle
// =============================================================================

/// Seconds to wait for in-flight connections after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Default bind address (all IPv4 interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path, used only if the file exists
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "build_test=debug,tower_http=debug";

/// Default listen address as shown in `--help`
pub const DEFAULT_LISTEN_ADDR: &str = formatcp!("{}:{}", DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.socket_addr()?;
        Ok(config)
    }

    /// Load from an explicit path, or fall back to the default path if present,
    /// or to compiled-in defaults otherwise.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line overrides on top of file or default values.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
    }

    /// Address the HTTP server binds to.
    ///
    /// The host must be an IP literal. IPv6 may also be written in one pair of
    /// brackets (`[::1]`).
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.http.host.as_str();
        let ip = match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            Some(inner) => inner.parse::<Ipv6Addr>().map(IpAddr::V6),
            None => host.parse::<IpAddr>(),
        }
        .map_err(|_| {
            ConfigError::Validation(format!("http.host must be an IP address, got '{}'", host))
        })?;
        Ok(SocketAddr::new(ip, self.http.port))
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

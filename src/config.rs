//! Service configuration.
//!
//! [`ServiceConfig`] is the validated configuration consumed by the server.
//! It can be assembled in code with [`ServiceConfigBuilder`] or parsed from
//! command-line flags and environment variables with [`ServiceArgs`].
//!
//! The OAuth and database settings belong to collaborators outside the
//! transformation core; they are carried and reported but never used here.

use crate::error::{TransformError, TransformResult};
use crate::platform::Platform;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

pub const DEFAULT_SERVICE_NAME: &str = "zoom-platform-microservice";
pub const DEFAULT_ZOOM_API_BASE_URL: &str = "https://api.zoom.us/v2";

/// Validated runtime configuration.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// `env_logger` filter, e.g. "info" or "zoom_transform=debug"
    pub log_level: String,
    /// Name reported by `/health`
    pub service_name: String,
    /// Vendor used by `raw-to-zoom` when the request names none
    pub default_raw_platform: Platform,
    /// Maximum MCP ledger entries; 0 disables the ledger
    pub ledger_capacity: usize,
    pub zoom_api_base_url: String,
    pub oauth_client_id: Option<String>,
    pub oauth_client_secret: Option<String>,
    pub oauth_redirect_uri: Option<String>,
    pub database_url: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            default_raw_platform: Platform::RingCentral,
            ledger_capacity: 1000,
            zoom_api_base_url: DEFAULT_ZOOM_API_BASE_URL.to_string(),
            oauth_client_id: None,
            oauth_client_secret: None,
            oauth_redirect_uri: None,
            database_url: None,
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("service_name", &self.service_name)
            .field("default_raw_platform", &self.default_raw_platform)
            .field("ledger_capacity", &self.ledger_capacity)
            .field("zoom_api_base_url", &self.zoom_api_base_url)
            .field("oauth_client_id", &self.oauth_client_id)
            .field(
                "oauth_client_secret",
                &self.oauth_client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("oauth_redirect_uri", &self.oauth_redirect_uri)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ServiceConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> TransformResult<()> {
        if self.port == 0 {
            return Err(TransformError::invalid_configuration("Port cannot be 0"));
        }

        if self.service_name.trim().is_empty() {
            return Err(TransformError::invalid_configuration("Service name cannot be empty"));
        }

        if !self.zoom_api_base_url.starts_with("http://")
            && !self.zoom_api_base_url.starts_with("https://")
        {
            return Err(TransformError::invalid_configuration(
                "Zoom API base URL must start with http:// or https://",
            ));
        }

        if !self.default_raw_platform.is_raw_vendor() {
            return Err(TransformError::invalid_configuration(format!(
                "Default raw platform must be a vendor platform, got '{}'",
                self.default_raw_platform
            )));
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_address(&self) -> TransformResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| TransformError::invalid_configuration(format!("Invalid bind address: {}", e)))
    }

    pub fn ledger_enabled(&self) -> bool {
        self.ledger_capacity > 0
    }

    pub fn oauth_configured(&self) -> bool {
        self.oauth_client_id.is_some() && self.oauth_client_secret.is_some()
    }
}

/// Fluent construction of a [`ServiceConfig`].
///
/// ```rust
/// use zoom_transform::config::ServiceConfigBuilder;
///
/// let config = ServiceConfigBuilder::new()
///     .with_port(9090)
///     .with_service_name("transform-staging")
///     .build()
///     .unwrap();
/// assert_eq!(config.port, 9090);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = name.into();
        self
    }

    pub fn with_default_raw_platform(mut self, platform: Platform) -> Self {
        self.config.default_raw_platform = platform;
        self
    }

    pub fn with_ledger_capacity(mut self, capacity: usize) -> Self {
        self.config.ledger_capacity = capacity;
        self
    }

    pub fn with_zoom_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.zoom_api_base_url = url.into();
        self
    }

    pub fn with_oauth(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: Option<String>,
    ) -> Self {
        self.config.oauth_client_id = Some(client_id.into());
        self.config.oauth_client_secret = Some(client_secret.into());
        self.config.oauth_redirect_uri = redirect_uri;
        self
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> TransformResult<ServiceConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Command-line and environment configuration for the server binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "zoom-transform")]
#[command(about = "Telephony entity transformation service for Zoom Phone")]
pub struct ServiceArgs {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log filter passed to env_logger
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Service name reported by the health check
    #[arg(long, env = "SERVICE_NAME", default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,

    /// Vendor assumed by raw-to-zoom requests that name none
    #[arg(long, env = "DEFAULT_RAW_PLATFORM", default_value = "ringcentral")]
    pub default_raw_platform: String,

    /// Maximum MCP ledger entries (0 disables the ledger)
    #[arg(long, env = "MCP_LEDGER_CAPACITY", default_value_t = 1000)]
    pub ledger_capacity: usize,

    #[arg(long, env = "ZOOM_API_BASE_URL", default_value = DEFAULT_ZOOM_API_BASE_URL)]
    pub zoom_api_base_url: String,

    #[arg(long, env = "ZOOM_CLIENT_ID")]
    pub oauth_client_id: Option<String>,

    #[arg(long, env = "ZOOM_CLIENT_SECRET", hide_env_values = true)]
    pub oauth_client_secret: Option<String>,

    #[arg(long, env = "ZOOM_REDIRECT_URI")]
    pub oauth_redirect_uri: Option<String>,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

impl ServiceArgs {
    /// Convert parsed arguments into a validated [`ServiceConfig`].
    pub fn into_config(self) -> TransformResult<ServiceConfig> {
        let default_raw_platform: Platform = self
            .default_raw_platform
            .parse()
            .map_err(|e| TransformError::invalid_configuration(format!("--default-raw-platform: {}", e)))?;
        let config = ServiceConfig {
            host: self.host,
            port: self.port,
            log_level: self.log_level,
            service_name: self.service_name,
            default_raw_platform,
            ledger_capacity: self.ledger_capacity,
            zoom_api_base_url: self.zoom_api_base_url,
            oauth_client_id: self.oauth_client_id,
            oauth_client_secret: self.oauth_client_secret,
            oauth_redirect_uri: self.oauth_redirect_uri,
            database_url: self.database_url,
        };
        config.validate()?;
        Ok(config)
    }
}

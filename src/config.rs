//! Server configuration

use serde::{Deserialize, Serialize};

/// Caption source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the video platform's web front-end
    pub base_url: String,

    /// Timeout for each outbound request in seconds
    pub request_timeout_secs: u64,

    /// User-Agent header sent to the platform
    pub user_agent: String,

    /// Accept-Language header; affects the display names of languages
    pub accept_language: String,

    /// Innertube client name sent with player requests
    pub client_name: String,

    /// Innertube client version sent with player requests
    pub client_version: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com".to_string(),
            request_timeout_secs: 30,
            user_agent: concat!("caption-server/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_language: "en-US".to_string(),
            client_name: "ANDROID".to_string(),
            client_version: "20.10.38".to_string(),
        }
    }
}

impl SourceConfig {
    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,

    /// Caption source configuration
    pub source: SourceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_enabled: true,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            source: SourceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

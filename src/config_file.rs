//! Configuration file support
//!
//! Loads server configuration from TOML files. Every section and every
//! field is optional; anything left out takes the built-in default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ServerConfig, SourceConfig};
use crate::error::{CaptionError, Result};

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: Option<ServerSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Caption source settings
    pub source: Option<SourceSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: Option<String>,
    /// Port to listen on
    pub port: Option<u16>,
    /// Enable CORS
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSettings {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub accept_language: Option<String>,
    pub client_name: Option<String>,
    pub client_version: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| CaptionError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CaptionError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let defaults = ServerConfig::default();
        Self {
            server: Some(ServerSettings {
                host: Some(defaults.host),
                port: Some(defaults.port),
                cors_enabled: Some(defaults.cors_enabled),
            }),
            logging: Some(LoggingSettings {
                level: Some(defaults.log_level),
                format: Some(defaults.log_format),
            }),
            source: Some(SourceSettings {
                base_url: Some(defaults.source.base_url),
                request_timeout_secs: Some(defaults.source.request_timeout_secs),
                user_agent: Some(defaults.source.user_agent),
                accept_language: Some(defaults.source.accept_language),
                client_name: Some(defaults.source.client_name),
                client_version: Some(defaults.source.client_version),
            }),
        }
    }

    /// Convert to ServerConfig
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        let server = self.server.unwrap_or_default();
        let logging = self.logging.unwrap_or_default();
        let source = self.source.unwrap_or_default();
        let default_source = defaults.source;

        ServerConfig {
            host: server.host.unwrap_or(defaults.host),
            port: server.port.unwrap_or(defaults.port),
            cors_enabled: server.cors_enabled.unwrap_or(defaults.cors_enabled),
            log_level: logging.level.unwrap_or(defaults.log_level),
            log_format: logging.format.unwrap_or(defaults.log_format),
            source: SourceConfig {
                base_url: source.base_url.unwrap_or(default_source.base_url),
                request_timeout_secs: source
                    .request_timeout_secs
                    .unwrap_or(default_source.request_timeout_secs),
                user_agent: source.user_agent.unwrap_or(default_source.user_agent),
                accept_language: source
                    .accept_language
                    .unwrap_or(default_source.accept_language),
                client_name: source.client_name.unwrap_or(default_source.client_name),
                client_version: source
                    .client_version
                    .unwrap_or(default_source.client_version),
            },
        }
    }
}

/// Load a ServerConfig from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_server_config<P: AsRef<Path>>(path: P) -> Result<ServerConfig> {
    if !path.as_ref().exists() {
        return Ok(ServerConfig::default());
    }
    Ok(ConfigFile::from_file(path)?.into_server_config())
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    ConfigFile::default_config().to_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default_config();
        assert_eq!(config.server.as_ref().unwrap().port, Some(5000));
        assert_eq!(
            config.source.as_ref().unwrap().request_timeout_secs,
            Some(30)
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[server]\nport = 8080\n\n[source]\nrequest_timeout_secs = 5\n"
        )
        .unwrap();

        let config = load_server_config(temp_file.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.source.request_timeout_secs, 5);
        assert_eq!(config.source.base_url, "https://www.youtube.com");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = load_server_config(temp_file.path()).unwrap();
        assert_eq!(config.port, ServerConfig::default().port);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_server_config(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[server]\nport = \"not a number\"\n").unwrap();

        let err = load_server_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, CaptionError::Config(_)));
    }

    #[test]
    fn test_generate_default_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        generate_default_config(&path).unwrap();

        let loaded = ConfigFile::from_file(&path).unwrap();
        let config = loaded.into_server_config();
        assert_eq!(config.port, 5000);
        assert_eq!(config.source.client_name, "ANDROID");
    }
}

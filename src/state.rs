//! Application state
//!
//! Built once at startup and shared read-only by every request: the
//! server configuration and the caption source the handlers query.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::source::{CaptionSource, YouTubeSource};

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Where caption tracks come from
    pub source: Arc<dyn CaptionSource>,
}

impl AppState {
    /// Create a new AppState around an existing caption source
    pub fn new(config: ServerConfig, source: Arc<dyn CaptionSource>) -> Self {
        Self { config, source }
    }

    /// Create AppState with the YouTube source described by `config`
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let source = YouTubeSource::new(config.source.clone())?;
        Ok(Self::new(config, Arc::new(source)))
    }
}

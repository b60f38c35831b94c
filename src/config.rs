/// Configuration management for the Postframe service
use crate::error::{StudioError, StudioResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub service: ServiceConfig,
    pub upstream: UpstreamConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub hostname: String,
    pub port: u16,
    pub version: String,
    /// Maximum accepted asset upload size in bytes
    pub asset_upload_limit: usize,
}

/// Upstream image-generation API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the generative API, without a trailing slash
    pub base_url: String,
    /// Model used for text-to-image prediction
    pub model: String,
    /// Client timeout for the single generation round trip, in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Full `:predict` endpoint URL for the configured model.
    /// The caller appends the API key as a query credential.
    pub fn predict_url(&self) -> String {
        format!("{}/models/{}:predict", self.base_url, self.model)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> StudioResult<Self> {
        dotenv::dotenv().ok();

        let hostname =
            env::var("POSTFRAME_HOSTNAME").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("POSTFRAME_PORT")
            .unwrap_or_else(|_| "2590".to_string())
            .parse()
            .map_err(|_| StudioError::Validation("Invalid port number".to_string()))?;
        let version = env::var("POSTFRAME_VERSION")
            .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let asset_upload_limit = env::var("POSTFRAME_ASSET_UPLOAD_LIMIT")
            .unwrap_or_else(|_| "10485760".to_string())
            .parse()
            .unwrap_or(10 * 1024 * 1024);

        let base_url = env::var("POSTFRAME_IMAGE_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());
        let model = env::var("POSTFRAME_IMAGE_MODEL")
            .unwrap_or_else(|_| "imagen-3.0-generate-002".to_string());
        let timeout_secs = env::var("POSTFRAME_IMAGE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .map_err(|_| StudioError::Validation("Invalid upstream timeout".to_string()))?;

        let config = Self {
            service: ServiceConfig {
                hostname,
                port,
                version,
                asset_upload_limit,
            },
            upstream: UpstreamConfig {
                base_url,
                model,
                timeout_secs,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> StudioResult<()> {
        if self.upstream.base_url.is_empty() {
            return Err(StudioError::Validation(
                "Upstream base URL must not be empty".to_string(),
            ));
        }
        if self.upstream.timeout_secs == 0 {
            return Err(StudioError::Validation(
                "Upstream timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Upstream image generation: one non-retried call to the configured
/// text-to-image prediction endpoint, plus the default prompt templates.
use crate::config::UpstreamConfig;
use crate::error::{StudioError, StudioResult};
use serde::{Deserialize, Serialize};
use tracing::error;

/// What the generated image is for; selects the default prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Content,
    Background,
}

/// The auto-generated prompt used when the caller supplies no custom one
pub fn default_prompt(kind: PromptKind, text: &str) -> String {
    match kind {
        PromptKind::Content => format!(
            "Create a modern, clean illustration related to: \"{}\". \
             Use vibrant colors and professional design. \
             Style: minimal, tech-focused, high quality.",
            text
        ),
        PromptKind::Background => format!(
            "Create an abstract background design inspired by: \"{}\". \
             Use gradients, geometric shapes, and modern aesthetics. \
             Style: clean, professional, suitable as a background.",
            text
        ),
    }
}

/// Prediction request payload
#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
struct PredictParameters {
    #[serde(rename = "sampleCount")]
    sample_count: u32,
}

/// Expected success payload shape
#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
}

/// Client for the upstream image-generation API
#[derive(Debug, Clone)]
pub struct ImageClient {
    http_client: reqwest::Client,
    config: UpstreamConfig,
}

impl ImageClient {
    pub fn new(config: UpstreamConfig) -> StudioResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("Postframe/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StudioError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Request exactly one generated sample and return its base64 payload
    /// verbatim. The caller prefixes the data-URL media-type header.
    ///
    /// No retry, no backoff: any failure is terminal for this call.
    pub async fn generate(&self, prompt: &str, api_key: &str) -> StudioResult<String> {
        if prompt.trim().is_empty() {
            return Err(StudioError::Validation("Prompt is required.".to_string()));
        }
        if api_key.trim().is_empty() {
            return Err(StudioError::Validation("API key is required.".to_string()));
        }

        // Key travels as a query credential, as the upstream API expects
        let url = format!("{}?key={}", self.config.predict_url(), api_key);
        let payload = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters { sample_count: 1 },
        };

        let response = self
            .http_client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "image generation request failed to send");
                StudioError::Internal(format!("Upstream request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "image generation API error");
            return Err(StudioError::Upstream {
                status: status.as_u16(),
            });
        }

        let result: PredictResponse = response.json().await.map_err(|e| {
            error!(error = %e, "image generation response was not valid JSON");
            StudioError::UnexpectedUpstream
        })?;

        result
            .predictions
            .into_iter()
            .next()
            .and_then(|p| p.bytes_base64_encoded)
            .ok_or_else(|| {
                error!("image generation response missing predictions payload");
                StudioError::UnexpectedUpstream
            })
    }
}

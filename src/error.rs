/// Unified error types for the Postframe service
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the composer service
#[derive(Error, Debug)]
pub enum StudioError {
    /// Request validation errors (missing prompt/key, bad update payload)
    #[error("{0}")]
    Validation(String),

    /// Upstream image-generation API returned a non-success status
    #[error("Failed to generate image. Status: {status}")]
    Upstream { status: u16 },

    /// Upstream returned 2xx but the payload shape was not the expected one
    #[error("Unexpected response from image generation API.")]
    UnexpectedUpstream,

    /// Asset ingestion rejected the payload (non-image media type, empty body)
    #[error("Asset error: {0}")]
    Asset(String),

    /// Export/rasterization errors
    #[error("Export error: {0}")]
    Export(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body: a single client-facing message string
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Convert StudioError to HTTP response
impl IntoResponse for StudioError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            StudioError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            StudioError::Upstream { status } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                self.to_string(),
            ),
            StudioError::UnexpectedUpstream => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            StudioError::Asset(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            StudioError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            StudioError::Export(_) | StudioError::Internal(_) | StudioError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                // Don't leak details
                "An internal server error occurred.".to_string(),
            ),
        };

        let body = Json(ErrorBody { error: message });

        (status, body).into_response()
    }
}

/// Result type alias for composer operations
pub type StudioResult<T> = Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_embeds_status_code() {
        let err = StudioError::Upstream { status: 403 };
        assert_eq!(err.to_string(), "Failed to generate image. Status: 403");
    }

    #[test]
    fn internal_errors_do_not_leak_details() {
        let response = StudioError::Internal("secret detail".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

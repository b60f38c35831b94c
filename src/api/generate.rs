/// AI image request relay: forwards a user-supplied credential and prompt
/// to the upstream image-generation endpoint and returns the decoded image.
use crate::{
    context::AppContext,
    error::{StudioError, StudioResult},
    generate::{default_prompt, PromptKind},
};
use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

/// Build relay routes
pub fn routes() -> Router<AppContext> {
    Router::new().route("/api/generate-image", post(generate_image))
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,
    /// When set and no prompt is given, the default prompt for this purpose
    /// is derived from the current caption instead of rejecting the call
    #[serde(default)]
    pub kind: Option<PromptKind>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    /// Base64 image bytes, not a URL; the field name is kept verbatim for
    /// wire compatibility with the composer client
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// POST /api/generate-image
///
/// Missing prompt or key is rejected before any network I/O. The upstream
/// call is made exactly once: no retry, no backoff. A non-success upstream
/// status is propagated at that same status with a message embedding the
/// code.
async fn generate_image(
    State(ctx): State<AppContext>,
    Json(request): Json<GenerateImageRequest>,
) -> StudioResult<Json<GenerateImageResponse>> {
    let supplied = request.prompt.unwrap_or_default();
    let prompt = if supplied.trim().is_empty() {
        match request.kind {
            Some(kind) => {
                let editor = ctx.editor.read().await;
                default_prompt(kind, &editor.config().text)
            }
            None => {
                return Err(StudioError::Validation("Prompt is required.".to_string()));
            }
        }
    } else {
        supplied
    };

    let api_key = request.api_key.unwrap_or_default();
    if api_key.trim().is_empty() {
        return Err(StudioError::Validation("API key is required.".to_string()));
    }

    let image = ctx.images.generate(&prompt, &api_key).await?;

    Ok(Json(GenerateImageResponse { image_url: image }))
}

/// Composition endpoints: the editor session, templates, layout and export
use crate::{
    compositor::{self, Layout},
    context::AppContext,
    error::StudioResult,
    export,
    model::{templates, ConfigUpdate, ContentKind, PostConfig, Template},
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

/// Build composition routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/post", get(current_post))
        .route("/api/post/update", post(update_post))
        .route("/api/post/template/:template_id", post(apply_template))
        .route("/api/post/templates", get(list_templates))
        .route("/api/post/content-type", post(set_content_type))
        .route("/api/post/reset", post(reset_post))
        .route("/api/post/append-text", post(append_text))
        .route("/api/post/clear/:target", post(clear_target))
        .route("/api/post/layout", get(layout))
        .route("/api/post/export", post(export_post))
}

/// The editor session as seen by clients
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostState {
    pub config: PostConfig,
    pub active_template: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentTypeRequest {
    pub kind: ContentKind,
}

#[derive(Debug, Deserialize)]
pub struct AppendTextRequest {
    pub suffix: String,
}

async fn current_post(State(ctx): State<AppContext>) -> Json<PostState> {
    let editor = ctx.editor.read().await;
    Json(PostState {
        config: editor.config().clone(),
        active_template: editor.active_template().to_string(),
    })
}

/// Apply one tagged field update
async fn update_post(
    State(ctx): State<AppContext>,
    Json(update): Json<ConfigUpdate>,
) -> Json<PostState> {
    let mut editor = ctx.editor.write().await;
    editor.apply(update);
    Json(PostState {
        config: editor.config().clone(),
        active_template: editor.active_template().to_string(),
    })
}

/// Apply a named template. An unknown id leaves the configuration
/// unchanged and still answers 200 with the current state.
async fn apply_template(
    State(ctx): State<AppContext>,
    Path(template_id): Path<String>,
) -> Json<PostState> {
    let mut editor = ctx.editor.write().await;
    editor.apply_template(&template_id);
    Json(PostState {
        config: editor.config().clone(),
        active_template: editor.active_template().to_string(),
    })
}

async fn list_templates() -> Json<Vec<Template>> {
    Json(templates::all().to_vec())
}

async fn set_content_type(
    State(ctx): State<AppContext>,
    Json(request): Json<ContentTypeRequest>,
) -> Json<PostState> {
    let mut editor = ctx.editor.write().await;
    editor.set_content_type(request.kind);
    Json(PostState {
        config: editor.config().clone(),
        active_template: editor.active_template().to_string(),
    })
}

async fn reset_post(State(ctx): State<AppContext>) -> Json<PostState> {
    let mut editor = ctx.editor.write().await;
    editor.reset_to_default();
    Json(PostState {
        config: editor.config().clone(),
        active_template: editor.active_template().to_string(),
    })
}

/// Append to the main caption (emoji picker path)
async fn append_text(
    State(ctx): State<AppContext>,
    Json(request): Json<AppendTextRequest>,
) -> Json<PostState> {
    let mut editor = ctx.editor.write().await;
    editor.append_to_text(&request.suffix);
    Json(PostState {
        config: editor.config().clone(),
        active_template: editor.active_template().to_string(),
    })
}

/// Clear one optional content field: background, content or code
async fn clear_target(
    State(ctx): State<AppContext>,
    Path(target): Path<String>,
) -> StudioResult<Json<PostState>> {
    let mut editor = ctx.editor.write().await;
    match target.as_str() {
        "background" => editor.clear_background_image(),
        "content" => editor.clear_content_image(),
        "code" => editor.clear_code_block(),
        other => {
            return Err(crate::error::StudioError::NotFound(format!(
                "Unknown clear target: {}",
                other
            )))
        }
    }
    Ok(Json(PostState {
        config: editor.config().clone(),
        active_template: editor.active_template().to_string(),
    }))
}

/// The deterministic layout for the current configuration
async fn layout(State(ctx): State<AppContext>) -> Json<Layout> {
    let editor = ctx.editor.read().await;
    Json(compositor::compose(editor.config()))
}

/// Rasterize the current post and serve the PNG as a download
async fn export_post(State(ctx): State<AppContext>) -> StudioResult<Response> {
    let config = {
        let editor = ctx.editor.read().await;
        editor.config().clone()
    };

    let exported = export::export_png(ctx.rasterizer.as_ref(), &config)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", exported.filename),
            ),
        ],
        exported.png,
    )
        .into_response())
}

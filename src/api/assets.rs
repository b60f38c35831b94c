/// Asset upload endpoints: raw image bytes in, data-URL-backed config out
use crate::{
    api::post::PostState,
    assets,
    context::AppContext,
    error::{StudioError, StudioResult},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
    routing::post,
    Router,
};

/// Build asset routes
pub fn routes() -> Router<AppContext> {
    Router::new().route("/api/post/assets/:target", post(upload_asset))
}

/// POST /api/post/assets/{profile|background|content}
///
/// Accepts raw binary image data with a Content-Type header. The bytes are
/// encoded as a data URL and applied to the targeted field; a rejected
/// upload changes nothing.
async fn upload_asset(
    State(ctx): State<AppContext>,
    Path(target): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> StudioResult<Json<PostState>> {
    if body.len() > ctx.config.service.asset_upload_limit {
        return Err(StudioError::Asset(format!(
            "Upload exceeds the {} byte limit",
            ctx.config.service.asset_upload_limit
        )));
    }

    let media_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let data_url = assets::to_data_url(&body, media_type.as_deref())?;

    let mut editor = ctx.editor.write().await;
    match target.as_str() {
        "profile" => editor.set_profile_image(data_url),
        "background" => editor.set_background_image(data_url),
        "content" => editor.set_content_image(data_url),
        other => {
            return Err(StudioError::NotFound(format!(
                "Unknown asset target: {}",
                other
            )))
        }
    }

    Ok(Json(PostState {
        config: editor.config().clone(),
        active_template: editor.active_template().to_string(),
    }))
}

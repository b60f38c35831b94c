/// Asset ingestion: turn raw image bytes into a data URL usable directly as
/// an image source in the composed layout.
use crate::error::{StudioError, StudioResult};
use base64::{engine::general_purpose, Engine as _};
use tracing::warn;

/// Media type assumed when the upload does not declare one
pub const DEFAULT_MEDIA_TYPE: &str = "image/png";

/// Encode image bytes as a `data:` URL.
///
/// No size limit and no downscaling: an oversized upload simply produces a
/// large string, which is the caller's responsibility to tolerate. Only the
/// media type family is checked; a failed ingestion leaves the prior image
/// untouched because no configuration update happens on the error path.
pub fn to_data_url(bytes: &[u8], media_type: Option<&str>) -> StudioResult<String> {
    let media_type = media_type.unwrap_or(DEFAULT_MEDIA_TYPE);

    if !media_type.starts_with("image/") {
        warn!(media_type, "rejecting non-image asset upload");
        return Err(StudioError::Asset(format!(
            "Unsupported media type: {}",
            media_type
        )));
    }
    if bytes.is_empty() {
        warn!("rejecting empty asset upload");
        return Err(StudioError::Asset("Empty image payload".to_string()));
    }

    let encoded = general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", media_type, encoded))
}

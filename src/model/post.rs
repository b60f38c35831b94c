/// The post configuration record and its closed field enums
use serde::{Deserialize, Serialize};

/// Editable range for the main text font size, in points
pub const FONT_SIZE_MIN: u32 = 16;
pub const FONT_SIZE_MAX: u32 = 64;

/// Editable range for the thread caption font size, in points
pub const THREAD_FONT_SIZE_MIN: u32 = 12;
pub const THREAD_FONT_SIZE_MAX: u32 = 32;

/// Editable range for the content image height, in pixels
pub const CONTENT_IMAGE_SIZE_MIN: u32 = 100;
pub const CONTENT_IMAGE_SIZE_MAX: u32 = 400;

/// Font weight of the main text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Placement of an optional block relative to the main text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockPosition {
    Above,
    Below,
}

/// Syntax label shown in the code block header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Javascript,
    Typescript,
    Python,
    Java,
    Cpp,
    Html,
    Css,
    Sql,
    Bash,
    Json,
}

/// Color scheme of the code block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeTheme {
    Dark,
    Light,
}

/// The active content kind of a post. Selecting one clears the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    Code,
}

/// Everything needed to render one post.
///
/// Wire names are camelCase to stay compatible with the composer client's
/// JSON payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConfig {
    /// Main caption, free-form, may include multi-byte emoji
    pub text: String,
    /// Secondary "thread" caption, rendered only when flagged and non-empty
    pub thread_text: String,
    pub show_thread_text: bool,
    /// Display handle
    pub username: String,
    /// Placeholder reference or data-URL-encoded image
    pub profile_image: String,
    /// Solid background color (hex); remains the fallback under an image
    pub background_color: String,
    /// Background image data URL, or empty for none
    pub background_image: String,
    pub text_color: String,
    pub font_size: u32,
    pub thread_font_size: u32,
    pub font_family: String,
    pub font_weight: FontWeight,
    /// Content image data URL, or empty for none
    pub content_image: String,
    pub content_image_size: u32,
    pub image_position: BlockPosition,
    pub show_content_image: bool,
    pub code_block: String,
    pub code_language: CodeLanguage,
    pub code_position: BlockPosition,
    pub show_code_block: bool,
    pub code_theme: CodeTheme,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            text: "15 Programming Tips You NEED to Know! \u{1f4bb}\u{1f680}".to_string(),
            thread_text: "A thread \u{1f9f5}".to_string(),
            show_thread_text: true,
            username: "@musa_codes".to_string(),
            profile_image: "/placeholder.svg?height=100&width=100".to_string(),
            background_color: "#000000".to_string(),
            background_image: String::new(),
            text_color: "#ffffff".to_string(),
            font_size: 32,
            thread_font_size: 18,
            font_family: "Inter".to_string(),
            font_weight: FontWeight::Bold,
            content_image: String::new(),
            content_image_size: 200,
            image_position: BlockPosition::Above,
            show_content_image: false,
            code_block: String::new(),
            code_language: CodeLanguage::Javascript,
            code_position: BlockPosition::Above,
            show_code_block: false,
            code_theme: CodeTheme::Dark,
        }
    }
}

impl PostConfig {
    /// Clamp a main-text font size to the editable range
    pub fn clamp_font_size(value: u32) -> u32 {
        value.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
    }

    /// Clamp a thread-caption font size to the editable range
    pub fn clamp_thread_font_size(value: u32) -> u32 {
        value.clamp(THREAD_FONT_SIZE_MIN, THREAD_FONT_SIZE_MAX)
    }

    /// Clamp a content image height to the editable range
    pub fn clamp_content_image_size(value: u32) -> u32 {
        value.clamp(CONTENT_IMAGE_SIZE_MIN, CONTENT_IMAGE_SIZE_MAX)
    }

    /// The content kind currently active on this configuration
    pub fn content_kind(&self) -> ContentKind {
        if self.show_code_block {
            ContentKind::Code
        } else if self.show_content_image {
            ContentKind::Image
        } else {
            ContentKind::Text
        }
    }
}

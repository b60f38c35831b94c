/// Deterministic layout: a pure function from a post configuration to the
/// ordered list of visual blocks and their effective render parameters.
///
/// The editable ranges on the model are wider than what the canvas can hold,
/// so effective sizes are clamped again here. The two-tier bound is
/// intentional: the editor accepts up to the model maximum, the canvas never
/// renders past the constants below.
use crate::model::{BlockPosition, CodeLanguage, CodeTheme, FontWeight, PostConfig};
use serde::{Deserialize, Serialize};

/// On-canvas ceiling for the main caption font size
pub const RENDER_MAX_MAIN_FONT: u32 = 28;
/// On-canvas ceiling for the thread caption font size
pub const RENDER_MAX_THREAD_FONT: u32 = 16;
/// On-canvas ceiling for the content image height; constrains only the
/// height axis, so the aspect ratio is preserved
pub const RENDER_MAX_IMAGE_HEIGHT: u32 = 200;

/// One visual block, in emit order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    #[serde(rename_all = "camelCase")]
    Code {
        code: String,
        language: CodeLanguage,
        theme: CodeTheme,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        source: String,
        /// Effective height in pixels, already render-clamped
        height: u32,
    },
    #[serde(rename_all = "camelCase")]
    MainText {
        text: String,
        /// Effective size in points, already render-clamped
        font_size: u32,
        font_family: String,
        font_weight: FontWeight,
    },
    #[serde(rename_all = "camelCase")]
    ThreadText { text: String, font_size: u32 },
}

/// Canvas backdrop: the image, when present, is drawn over the solid color,
/// which remains the underlying fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backdrop {
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub text_color: String,
}

/// Fixed overlay elements, independent of block ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub profile_image: String,
    pub username: String,
    pub follow_label: String,
}

/// The composed visual layout of one post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub backdrop: Backdrop,
    pub blocks: Vec<Block>,
    pub overlay: Overlay,
}

impl PostConfig {
    fn code_visible(&self) -> bool {
        self.show_code_block && !self.code_block.is_empty()
    }

    fn image_visible(&self) -> bool {
        self.show_content_image && !self.content_image.is_empty()
    }
}

/// Compose the ordered block list for a configuration.
///
/// Ordering: code-above, image-above, main text, image-below, code-below,
/// thread caption. Mutual exclusion means code and image never appear
/// together, but if both were flagged the source order above still decides.
pub fn compose(config: &PostConfig) -> Layout {
    let mut blocks = Vec::new();

    if config.code_visible() && config.code_position == BlockPosition::Above {
        blocks.push(code_block(config));
    }
    if config.image_visible() && config.image_position == BlockPosition::Above {
        blocks.push(image_block(config));
    }

    blocks.push(Block::MainText {
        text: config.text.clone(),
        font_size: config.font_size.min(RENDER_MAX_MAIN_FONT),
        font_family: config.font_family.clone(),
        font_weight: config.font_weight,
    });

    if config.image_visible() && config.image_position == BlockPosition::Below {
        blocks.push(image_block(config));
    }
    if config.code_visible() && config.code_position == BlockPosition::Below {
        blocks.push(code_block(config));
    }

    if config.show_thread_text && !config.thread_text.is_empty() {
        blocks.push(Block::ThreadText {
            text: config.thread_text.clone(),
            font_size: config.thread_font_size.min(RENDER_MAX_THREAD_FONT),
        });
    }

    Layout {
        backdrop: Backdrop {
            background_color: config.background_color.clone(),
            background_image: (!config.background_image.is_empty())
                .then(|| config.background_image.clone()),
            text_color: config.text_color.clone(),
        },
        blocks,
        overlay: Overlay {
            profile_image: config.profile_image.clone(),
            username: config.username.clone(),
            follow_label: "Follow".to_string(),
        },
    }
}

fn code_block(config: &PostConfig) -> Block {
    Block::Code {
        code: config.code_block.clone(),
        language: config.code_language,
        theme: config.code_theme,
    }
}

fn image_block(config: &PostConfig) -> Block {
    Block::Image {
        source: config.content_image.clone(),
        height: config.content_image_size.min(RENDER_MAX_IMAGE_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigUpdate;
    use crate::PostEditor;

    fn kinds(layout: &Layout) -> Vec<&'static str> {
        layout
            .blocks
            .iter()
            .map(|b| match b {
                Block::Code { .. } => "code",
                Block::Image { .. } => "image",
                Block::MainText { .. } => "text",
                Block::ThreadText { .. } => "thread",
            })
            .collect()
    }

    #[test]
    fn code_above_precedes_main_text() {
        let mut editor = PostEditor::new();
        editor.apply(ConfigUpdate::ShowThreadText(false));
        editor.apply(ConfigUpdate::ShowCodeBlock(true));
        editor.apply(ConfigUpdate::CodeBlock("x".into()));
        editor.apply(ConfigUpdate::CodePosition(BlockPosition::Above));

        let layout = compose(editor.config());
        assert_eq!(kinds(&layout), vec!["code", "text"]);

        editor.apply(ConfigUpdate::CodePosition(BlockPosition::Below));
        let layout = compose(editor.config());
        assert_eq!(kinds(&layout), vec!["text", "code"]);
    }

    #[test]
    fn overlay_is_always_emitted() {
        let layout = compose(&PostConfig::default());
        assert_eq!(layout.overlay.follow_label, "Follow");
        assert_eq!(layout.overlay.username, "@musa_codes");
    }

    #[test]
    fn hidden_or_empty_blocks_are_not_emitted() {
        let mut config = PostConfig::default();
        // Flagged but empty code emits nothing
        config.show_code_block = true;
        config.code_block.clear();
        config.show_thread_text = true;
        config.thread_text.clear();
        let layout = compose(&config);
        assert_eq!(kinds(&layout), vec!["text"]);
    }

    #[test]
    fn thread_caption_comes_after_all_content_blocks() {
        let mut config = PostConfig::default();
        config.content_image = "data:image/png;base64,AAAA".into();
        config.show_content_image = true;
        config.image_position = BlockPosition::Below;
        let layout = compose(&config);
        assert_eq!(kinds(&layout), vec!["text", "image", "thread"]);
    }

    #[test]
    fn effective_sizes_are_render_clamped() {
        let mut config = PostConfig::default();
        config.font_size = 64;
        config.thread_font_size = 32;
        config.content_image = "data:image/png;base64,AAAA".into();
        config.show_content_image = true;
        config.content_image_size = 400;

        let layout = compose(&config);
        for block in &layout.blocks {
            match block {
                Block::MainText { font_size, .. } => assert_eq!(*font_size, RENDER_MAX_MAIN_FONT),
                Block::ThreadText { font_size, .. } => {
                    assert_eq!(*font_size, RENDER_MAX_THREAD_FONT)
                }
                Block::Image { height, .. } => assert_eq!(*height, RENDER_MAX_IMAGE_HEIGHT),
                Block::Code { .. } => {}
            }
        }
    }

    #[test]
    fn small_sizes_pass_through_unclamped() {
        let mut config = PostConfig::default();
        config.font_size = 20;
        config.thread_font_size = 14;
        let layout = compose(&config);
        assert!(layout.blocks.contains(&Block::MainText {
            text: config.text.clone(),
            font_size: 20,
            font_family: config.font_family.clone(),
            font_weight: config.font_weight,
        }));
        assert!(layout.blocks.contains(&Block::ThreadText {
            text: config.thread_text.clone(),
            font_size: 14,
        }));
    }

    #[test]
    fn defensive_tie_break_emits_code_before_image() {
        // Cannot happen through the editor, but composition stays defined
        let mut config = PostConfig::default();
        config.code_block = "x".into();
        config.show_code_block = true;
        config.code_position = BlockPosition::Above;
        config.content_image = "data:image/png;base64,AAAA".into();
        config.show_content_image = true;
        config.image_position = BlockPosition::Above;
        config.show_thread_text = false;

        let layout = compose(&config);
        assert_eq!(kinds(&layout), vec!["code", "image", "text"]);
    }

    #[test]
    fn backdrop_image_overlays_but_keeps_the_color() {
        let mut config = PostConfig::default();
        config.background_image = "data:image/png;base64,AAAA".into();
        let layout = compose(&config);
        assert_eq!(layout.backdrop.background_color, "#000000");
        assert_eq!(
            layout.backdrop.background_image.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }
}

/// The configuration store: owns the current post configuration and applies
/// every mutation atomically.
///
/// All operations are total. Numeric fields are clamped at the point of
/// mutation, and two invariants are re-established on every path that can
/// disturb them:
/// - at most one content kind (text / image / code) is active;
/// - `show_content_image` is true iff `content_image` is non-empty.
use crate::model::{templates, ConfigUpdate, ContentKind, PostConfig};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PostEditor {
    config: PostConfig,
    active_template: String,
}

impl Default for PostEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl PostEditor {
    /// Start from the hard-coded defaults, with the default template active
    pub fn new() -> Self {
        Self {
            config: PostConfig::default(),
            active_template: "default".to_string(),
        }
    }

    pub fn config(&self) -> &PostConfig {
        &self.config
    }

    pub fn active_template(&self) -> &str {
        &self.active_template
    }

    /// Replace a single field
    pub fn apply(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Text(v) => self.config.text = v,
            ConfigUpdate::ThreadText(v) => self.config.thread_text = v,
            ConfigUpdate::ShowThreadText(v) => self.config.show_thread_text = v,
            ConfigUpdate::Username(v) => self.config.username = v,
            ConfigUpdate::ProfileImage(v) => self.config.profile_image = v,
            ConfigUpdate::BackgroundColor(v) => self.config.background_color = v,
            ConfigUpdate::BackgroundImage(v) => self.config.background_image = v,
            ConfigUpdate::TextColor(v) => self.config.text_color = v,
            ConfigUpdate::FontSize(v) => {
                self.config.font_size = PostConfig::clamp_font_size(v)
            }
            ConfigUpdate::ThreadFontSize(v) => {
                self.config.thread_font_size = PostConfig::clamp_thread_font_size(v)
            }
            ConfigUpdate::FontFamily(v) => self.config.font_family = v,
            ConfigUpdate::FontWeight(v) => self.config.font_weight = v,
            ConfigUpdate::ContentImage(v) => {
                self.config.show_content_image = !v.is_empty();
                self.config.content_image = v;
            }
            ConfigUpdate::ContentImageSize(v) => {
                self.config.content_image_size = PostConfig::clamp_content_image_size(v)
            }
            ConfigUpdate::ImagePosition(v) => self.config.image_position = v,
            // The flag tracks the image field: it can only be raised while an
            // image is present, and lowering it discards the image
            ConfigUpdate::ShowContentImage(v) => {
                if !v {
                    self.config.content_image.clear();
                }
                self.config.show_content_image = v && !self.config.content_image.is_empty();
            }
            ConfigUpdate::CodeBlock(v) => self.config.code_block = v,
            ConfigUpdate::CodeLanguage(v) => self.config.code_language = v,
            ConfigUpdate::CodePosition(v) => self.config.code_position = v,
            ConfigUpdate::ShowCodeBlock(v) => self.config.show_code_block = v,
            ConfigUpdate::CodeTheme(v) => self.config.code_theme = v,
        }
    }

    /// Shallow-merge a template over the current configuration.
    /// Unknown ids are a silent no-op.
    pub fn apply_template(&mut self, template_id: &str) {
        let Some(template) = templates::find(template_id) else {
            debug!(template_id, "unknown template, leaving configuration unchanged");
            return;
        };

        let mut merged = template.config.merge_over(&self.config);
        merged.font_size = PostConfig::clamp_font_size(merged.font_size);
        merged.thread_font_size = PostConfig::clamp_thread_font_size(merged.thread_font_size);
        merged.content_image_size =
            PostConfig::clamp_content_image_size(merged.content_image_size);
        merged.show_content_image = !merged.content_image.is_empty();

        self.config = merged;
        self.active_template = template.id.clone();
    }

    /// Select the active content kind, clearing the two inactive ones
    pub fn set_content_type(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Text => {
                self.config.code_block.clear();
                self.config.show_code_block = false;
                self.config.content_image.clear();
                self.config.show_content_image = false;
            }
            ContentKind::Image => {
                self.config.code_block.clear();
                self.config.show_code_block = false;
                self.config.show_content_image = !self.config.content_image.is_empty();
            }
            ContentKind::Code => {
                self.config.content_image.clear();
                self.config.show_content_image = false;
                self.config.show_code_block = true;
            }
        }
    }

    pub fn reset_to_default(&mut self) {
        self.apply_template("default");
    }

    /// Append to the main caption (emoji picker path)
    pub fn append_to_text(&mut self, suffix: &str) {
        self.config.text.push_str(suffix);
    }

    /// Set the content image from an upload or a completed AI generation
    pub fn set_content_image(&mut self, data_url: String) {
        self.config.show_content_image = !data_url.is_empty();
        self.config.content_image = data_url;
    }

    /// Set the background image from an upload or a completed AI generation
    pub fn set_background_image(&mut self, data_url: String) {
        self.config.background_image = data_url;
    }

    pub fn set_profile_image(&mut self, data_url: String) {
        self.config.profile_image = data_url;
    }

    pub fn clear_background_image(&mut self) {
        self.config.background_image.clear();
    }

    pub fn clear_content_image(&mut self) {
        self.config.content_image.clear();
        self.config.show_content_image = false;
    }

    pub fn clear_code_block(&mut self) {
        self.config.code_block.clear();
        self.config.show_code_block = false;
    }
}

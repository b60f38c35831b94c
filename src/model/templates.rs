/// Named preset templates: static, process-wide, read-only
use crate::model::post::{BlockPosition, CodeLanguage, CodeTheme, FontWeight, PostConfig};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Partial configuration override carried by a template.
///
/// Every field is optional; applying a template shallow-merges the present
/// fields over the current configuration and never touches the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_thread_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_image_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_position: Option<BlockPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_content_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_language: Option<CodeLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_position: Option<BlockPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_code_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_theme: Option<CodeTheme>,
}

impl TemplateConfig {
    /// A partial that covers every field, taken from a full configuration.
    /// Used by the `default` template so a reset restores the exact initial
    /// state regardless of what the user changed in between.
    pub fn from_full(config: PostConfig) -> Self {
        Self {
            text: Some(config.text),
            thread_text: Some(config.thread_text),
            show_thread_text: Some(config.show_thread_text),
            username: Some(config.username),
            profile_image: Some(config.profile_image),
            background_color: Some(config.background_color),
            background_image: Some(config.background_image),
            text_color: Some(config.text_color),
            font_size: Some(config.font_size),
            thread_font_size: Some(config.thread_font_size),
            font_family: Some(config.font_family),
            font_weight: Some(config.font_weight),
            content_image: Some(config.content_image),
            content_image_size: Some(config.content_image_size),
            image_position: Some(config.image_position),
            show_content_image: Some(config.show_content_image),
            code_block: Some(config.code_block),
            code_language: Some(config.code_language),
            code_position: Some(config.code_position),
            show_code_block: Some(config.show_code_block),
            code_theme: Some(config.code_theme),
        }
    }

    /// Shallow-merge the present fields over `base`
    pub fn merge_over(&self, base: &PostConfig) -> PostConfig {
        let mut merged = base.clone();
        let overlay = self.clone();
        if let Some(v) = overlay.text {
            merged.text = v;
        }
        if let Some(v) = overlay.thread_text {
            merged.thread_text = v;
        }
        if let Some(v) = overlay.show_thread_text {
            merged.show_thread_text = v;
        }
        if let Some(v) = overlay.username {
            merged.username = v;
        }
        if let Some(v) = overlay.profile_image {
            merged.profile_image = v;
        }
        if let Some(v) = overlay.background_color {
            merged.background_color = v;
        }
        if let Some(v) = overlay.background_image {
            merged.background_image = v;
        }
        if let Some(v) = overlay.text_color {
            merged.text_color = v;
        }
        if let Some(v) = overlay.font_size {
            merged.font_size = v;
        }
        if let Some(v) = overlay.thread_font_size {
            merged.thread_font_size = v;
        }
        if let Some(v) = overlay.font_family {
            merged.font_family = v;
        }
        if let Some(v) = overlay.font_weight {
            merged.font_weight = v;
        }
        if let Some(v) = overlay.content_image {
            merged.content_image = v;
        }
        if let Some(v) = overlay.content_image_size {
            merged.content_image_size = v;
        }
        if let Some(v) = overlay.image_position {
            merged.image_position = v;
        }
        if let Some(v) = overlay.show_content_image {
            merged.show_content_image = v;
        }
        if let Some(v) = overlay.code_block {
            merged.code_block = v;
        }
        if let Some(v) = overlay.code_language {
            merged.code_language = v;
        }
        if let Some(v) = overlay.code_position {
            merged.code_position = v;
        }
        if let Some(v) = overlay.show_code_block {
            merged.show_code_block = v;
        }
        if let Some(v) = overlay.code_theme {
            merged.code_theme = v;
        }
        merged
    }
}

/// A named preset merged over the current configuration when applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub config: TemplateConfig,
}

lazy_static! {
    /// The fixed preset gallery. The `default` entry is the initial state.
    static ref CATALOG: Vec<Template> = vec![
        Template {
            id: "default".to_string(),
            name: "Classic Dark".to_string(),
            config: TemplateConfig::from_full(PostConfig::default()),
        },
        Template {
            id: "minimal".to_string(),
            name: "Minimal Light".to_string(),
            config: TemplateConfig {
                background_color: Some("#ffffff".to_string()),
                background_image: Some(String::new()),
                text_color: Some("#111827".to_string()),
                font_family: Some("Inter".to_string()),
                font_weight: Some(FontWeight::Normal),
                ..TemplateConfig::default()
            },
        },
        Template {
            id: "gradient".to_string(),
            name: "Purple Gradient".to_string(),
            config: TemplateConfig {
                background_color: Some("#7c3aed".to_string()),
                background_image: Some(String::new()),
                text_color: Some("#ffffff".to_string()),
                font_weight: Some(FontWeight::Bold),
                ..TemplateConfig::default()
            },
        },
        Template {
            id: "ocean".to_string(),
            name: "Ocean".to_string(),
            config: TemplateConfig {
                background_color: Some("#0ea5e9".to_string()),
                background_image: Some(String::new()),
                text_color: Some("#f0f9ff".to_string()),
                ..TemplateConfig::default()
            },
        },
        Template {
            id: "sunset".to_string(),
            name: "Sunset".to_string(),
            config: TemplateConfig {
                background_color: Some("#f97316".to_string()),
                background_image: Some(String::new()),
                text_color: Some("#1c1917".to_string()),
                font_weight: Some(FontWeight::Bold),
                ..TemplateConfig::default()
            },
        },
        Template {
            id: "terminal".to_string(),
            name: "Terminal".to_string(),
            config: TemplateConfig {
                background_color: Some("#0d1117".to_string()),
                background_image: Some(String::new()),
                text_color: Some("#22c55e".to_string()),
                font_family: Some("JetBrains Mono".to_string()),
                code_theme: Some(CodeTheme::Dark),
                ..TemplateConfig::default()
            },
        },
    ];
}

/// All templates, in gallery order
pub fn all() -> &'static [Template] {
    &CATALOG
}

/// Look up a template by id
pub fn find(id: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_default_entry() {
        assert!(find("default").is_some());
        assert!(find("no-such-template").is_none());
    }

    #[test]
    fn default_template_restores_initial_state_over_anything() {
        let mut scribbled = PostConfig::default();
        scribbled.text = "something else".to_string();
        scribbled.font_size = 64;
        scribbled.content_image = "data:image/png;base64,AAAA".to_string();
        scribbled.show_content_image = true;

        let restored = find("default").unwrap().config.merge_over(&scribbled);
        assert_eq!(restored, PostConfig::default());
    }

    #[test]
    fn partial_merge_leaves_untouched_fields_alone() {
        let base = PostConfig::default();
        let merged = find("minimal").unwrap().config.merge_over(&base);
        assert_eq!(merged.background_color, "#ffffff");
        assert_eq!(merged.text, base.text);
        assert_eq!(merged.font_size, base.font_size);
    }
}

/// Tagged single-field updates to a post configuration.
///
/// The composer client's string-keyed `update(key, value)` becomes a closed
/// sum type: one variant per editable field, so an unknown key or a value of
/// the wrong shape is rejected at deserialization time.
use crate::model::post::{BlockPosition, CodeLanguage, CodeTheme, FontWeight};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ConfigUpdate {
    Text(String),
    ThreadText(String),
    ShowThreadText(bool),
    Username(String),
    ProfileImage(String),
    BackgroundColor(String),
    BackgroundImage(String),
    TextColor(String),
    FontSize(u32),
    ThreadFontSize(u32),
    FontFamily(String),
    FontWeight(FontWeight),
    ContentImage(String),
    ContentImageSize(u32),
    ImagePosition(BlockPosition),
    ShowContentImage(bool),
    CodeBlock(String),
    CodeLanguage(CodeLanguage),
    CodePosition(BlockPosition),
    ShowCodeBlock(bool),
    CodeTheme(CodeTheme),
}

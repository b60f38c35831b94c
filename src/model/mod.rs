/// Post configuration model: the record describing one post, the tagged
/// update variants applied to it, and the static template catalog.
pub mod post;
pub mod templates;
pub mod update;

pub use post::{
    BlockPosition, CodeLanguage, CodeTheme, ContentKind, FontWeight, PostConfig,
};
pub use templates::{Template, TemplateConfig};
pub use update::ConfigUpdate;

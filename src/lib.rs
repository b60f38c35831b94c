/// Postframe - social post composer service
///
/// A declarative post configuration model, a deterministic compositor from
/// configuration to visual layout, PNG export, and a relay to an external
/// text-to-image API, served over HTTP.
pub mod api;
pub mod assets;
pub mod compositor;
pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod export;
pub mod generate;
pub mod model;
pub mod server;

pub use compositor::{compose, Layout};
pub use config::ServerConfig;
pub use context::AppContext;
pub use editor::PostEditor;
pub use error::{StudioError, StudioResult};
pub use model::{ConfigUpdate, PostConfig};

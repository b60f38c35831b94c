/// Application context and dependency injection
use crate::{
    config::ServerConfig,
    editor::PostEditor,
    error::StudioResult,
    export::{BlockRasterizer, Rasterizer},
    generate::ImageClient,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application context holding all shared services.
///
/// The editor is the single in-memory composition session: created once at
/// startup with the hard-coded defaults, mutated by API calls, gone at
/// process end. All writes go through the lock, so no two mutations can
/// interleave mid-update.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub editor: Arc<RwLock<PostEditor>>,
    pub images: Arc<ImageClient>,
    pub rasterizer: Arc<dyn Rasterizer>,
}

impl AppContext {
    /// Create a new application context from configuration
    pub fn new(config: ServerConfig) -> StudioResult<Self> {
        config.validate()?;

        let images = ImageClient::new(config.upstream.clone())?;

        Ok(Self {
            config: Arc::new(config),
            editor: Arc::new(RwLock::new(PostEditor::new())),
            images: Arc::new(images),
            rasterizer: Arc::new(BlockRasterizer),
        })
    }

    pub fn version(&self) -> &str {
        &self.config.service.version
    }
}

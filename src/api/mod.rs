/// API routes and handlers
pub mod assets;
pub mod generate;
pub mod post;

use crate::context::AppContext;
use axum::Router;

/// Build API routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .merge(generate::routes())
        .merge(post::routes())
        .merge(assets::routes())
}

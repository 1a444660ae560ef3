pub mod assessment;
pub mod config_manager;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

/// Build the application router with its middleware stack.
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.system_config.max_upload_bytes;

    Router::new()
        .merge(routes::create_routes())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

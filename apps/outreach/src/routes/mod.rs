pub mod health;
pub mod pages;
pub mod preview;
pub mod store;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Asset URLs are root-relative ("/Natera logo.svg"), so the bundle directory
    // backs every path no route claims.
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_index))
        .route("/navigate", post(pages::handle_navigate))
        .route("/restart", post(pages::handle_restart))
        .route("/demo-setup", post(pages::handle_demo_setup))
        // Outreach preview
        .route("/api/v1/preview", get(preview::handle_get_preview))
        .route("/api/v1/preview/next", post(preview::handle_next))
        .route("/api/v1/preview/prev", post(preview::handle_prev))
        .route(
            "/api/v1/preview/jump/:role_key",
            post(preview::handle_jump),
        )
        .route("/api/v1/preview/chat", post(preview::handle_speak_to_cleo))
        .route("/api/v1/scroll", post(preview::handle_scroll))
        // Client store
        .route(
            "/api/v1/store/:key",
            get(store::handle_get_value)
                .put(store::handle_put_value)
                .delete(store::handle_delete_value),
        )
        .route("/api/v1/store", delete(store::handle_clear))
        .fallback_service(assets)
        .with_state(state)
}

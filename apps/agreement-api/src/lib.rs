//! Agreement API - HTTP collector for the sublease agreement generator
//!
//! Exposes one form endpoint: a validated submission comes in, a
//! rendered PDF goes back as a download.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::AppState;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/agreement", post(handlers::generate_agreement))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

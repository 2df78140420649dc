use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::AppState;
use super::handlers::{pages, summarize};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/summarizer", get(pages::summarizer))
        .route("/summarize", post(summarize::summarize_endpoint))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! API routes for the query service

pub mod chat;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;

/// Build all routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/chat", post(chat::chat))
}

/// GET / - liveness marker. Responds while the process is up, independent of
/// provider availability.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "Ok" }))
}

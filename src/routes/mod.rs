use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::state::AppState;

pub mod categories;
pub mod doc;
pub mod health;
pub mod stock;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/stock", stock::router())
}

/// The full application router: API routes, health, docs and the JSON 404
/// fallback. Middleware layers are applied by the binary; tests drive this
/// router directly.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = serde_json::json!({
        "message": "Not Found",
        "path": uri.path(),
    });
    (StatusCode::NOT_FOUND, Json(body))
}

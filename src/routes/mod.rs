use axum::{Json, Router, http::{StatusCode, Uri}, routing::get};
use serde_json::json;

use crate::state::AppState;

pub mod admin;
pub mod catalog;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod sitemap;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .merge(users::router())
        .merge(catalog::router())
        .merge(favorites::router())
        .nest("/admin", admin::router())
}

/// The full application with state bound; transport layers are added by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = json!({ "error": "Ruta no encontrada", "path": uri.path() });
    (StatusCode::NOT_FOUND, Json(body))
}

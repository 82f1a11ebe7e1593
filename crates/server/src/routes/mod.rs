//! API route handlers
//!
//! - `health`: liveness and readiness
//! - `annotate`: single and batch annotation
//! - `lexicon`: read-only views of the loaded dictionary

pub mod annotate;
pub mod health;
pub mod lexicon;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /, no authentication)
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "MedNLP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/annotate",
            "/api/v1/batch",
            "/api/v1/lexicon",
            "/api/v1/lexicon/{category}",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound("no such route".to_string())
}

mod health;
mod vault;

pub use health::*;
pub use vault::*;

use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

/// Body sent when a handler panics
pub(crate) fn internal_error_body() -> Json<Value> {
    Json(json!({ "error": "Internal Server Error" }))
}

/// Run filesystem work on the blocking pool so a long scan never stalls the
/// runtime threads serving other requests.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> vault_triage_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

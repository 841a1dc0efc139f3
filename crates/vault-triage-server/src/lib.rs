//! Vault Triage HTTP Server Library
//!
//! Thin JSON layer over `vault-triage-core`: routing, CORS, error mapping.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

pub mod config;
mod error;
mod handlers;
mod state;


pub use error::ApiError;
pub use state::AppState;

/// Build the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/vault/connect", post(handlers::connect))
        .route("/api/vault/status", get(handlers::status))
        .route("/api/vault/disconnect", post(handlers::disconnect))
        .route(
            "/api/vault/scan",
            post(handlers::scan).get(handlers::cached_scan),
        )
        .fallback(handlers::not_found)
        .with_state(state);

    with_middleware(router)
}

/// Panic recovery and CORS shared by every route.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    log::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        handlers::internal_error_body(),
    )
        .into_response()
}

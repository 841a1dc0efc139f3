use std::path::PathBuf;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use vault_triage_core::{ScanResult, TriageError, VaultConnectionInfo};

use super::run_blocking;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VaultStatusResponse {
    pub vault: Option<VaultConnectionInfo>,
}

/// Non-empty string `path` of a JSON body, if present.
fn path_field(body: &Option<Json<Value>>) -> Option<&str> {
    body.as_ref()
        .and_then(|Json(value)| value.get("path"))
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
}

fn required_path(body: &Option<Json<Value>>) -> Result<PathBuf, ApiError> {
    path_field(body)
        .map(PathBuf::from)
        .ok_or_else(|| ApiError::BadRequest("path is required".to_string()))
}

// POST /api/vault/connect
pub async fn connect(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<VaultConnectionInfo>, ApiError> {
    let path = required_path(&body)?;

    let connection = state.connection.clone();
    let info = run_blocking(move || connection.connect(&path)).await?;
    Ok(Json(info))
}

// GET /api/vault/status
pub async fn status(State(state): State<AppState>) -> Json<VaultStatusResponse> {
    Json(VaultStatusResponse {
        vault: state.connection.status(),
    })
}

// POST /api/vault/disconnect
pub async fn disconnect(State(state): State<AppState>) -> Json<VaultStatusResponse> {
    state.connection.disconnect();
    Json(VaultStatusResponse { vault: None })
}

// POST /api/vault/scan
// Scans `path` from the body, or the connected vault when no path is given.
pub async fn scan(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<ScanResult>, ApiError> {
    let given = body
        .as_ref()
        .and_then(|Json(value)| value.get("path"))
        .is_some_and(|path| !path.is_null());

    let path = if given {
        required_path(&body)?
    } else {
        connected_path(&state)?
    };

    let scanner = state.scanner.clone();
    let result = run_blocking(move || scanner.scan(&path)).await?;
    Ok(Json(result))
}

// GET /api/vault/scan
pub async fn cached_scan(State(state): State<AppState>) -> Result<Json<ScanResult>, ApiError> {
    let path = connected_path(&state)?;

    let scanner = state.scanner.clone();
    match run_blocking(move || scanner.cached(&path)).await? {
        Some(result) => Ok(Json(result)),
        None => Err(ApiError::NotFound("No scan cache found".to_string())),
    }
}

fn connected_path(state: &AppState) -> Result<PathBuf, ApiError> {
    state
        .connection
        .status()
        .map(|info| PathBuf::from(info.path))
        .ok_or_else(|| TriageError::NoVaultConnected.into())
}

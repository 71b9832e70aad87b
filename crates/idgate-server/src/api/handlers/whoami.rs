//! Caller identity handler
//!
//! Resolving the caller's session back to a stored profile is not wired up
//! yet; the endpoint returns a static placeholder regardless of input.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;

/// Placeholder identity returned until session resolution is implemented
const PLACEHOLDER_NAME: &str = "Idgate MVP";

/// Request carrying the caller's session credential
#[derive(Debug, Default, Deserialize)]
pub struct WhoAmIRequest {
    /// Session credential (currently unused)
    #[serde(default)]
    pub token: Option<String>,
}

/// Caller identity response
#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    /// Display name of the caller
    pub name: String,
}

/// Report the caller's identity
///
/// POST /v1/iam/whoami
pub async fn whoami(
    State(_state): State<Arc<AppState>>,
    _request: Option<Json<WhoAmIRequest>>,
) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        name: PLACEHOLDER_NAME.to_string(),
    })
}

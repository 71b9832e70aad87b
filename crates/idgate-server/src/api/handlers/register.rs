//! Registration handler
//!
//! User registration is categorically unimplemented; the endpoint exists as
//! a boundary contract and always reports the distinct not-implemented
//! signal, never an authorization failure.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;
use crate::api::error::ApiError;

/// Registration request (shape reserved)
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    /// Email address to register
    #[serde(default)]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// Registration response (shape reserved)
#[derive(Debug, Serialize)]
pub struct RegisterResponse {}

/// Register a new user
///
/// POST /v1/iam/register
pub async fn register(
    State(_state): State<Arc<AppState>>,
    _request: Option<Json<RegisterRequest>>,
) -> Result<Json<RegisterResponse>, ApiError> {
    Err(ApiError::Unimplemented("Register"))
}

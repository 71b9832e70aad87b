//! Login exchange handler
//!
//! This is the token-exchange entry point. It validates an externally-issued
//! identity assertion and, if the assertion passes verification and the
//! email policy, mints an internally-signed session credential.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use idgate_core::SessionIssuer;
use idgate_verify::IdentityVerifier;

use crate::api::error::ApiError;
use crate::profile::{ProfileStore, UserProfile};

/// IAM server configuration
#[derive(Debug, Clone)]
pub struct IamConfig {
    /// Audience inbound assertions must be issued for
    /// (the client application identifier configured per deployment)
    pub client_id: String,
}

/// Application state shared across handlers
pub struct AppState {
    /// Verifier for inbound identity assertions
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Issuer for outbound session credentials
    pub issuer: SessionIssuer,
    /// Profile store written after successful exchanges
    pub profiles: Arc<dyn ProfileStore>,
    /// Server configuration
    pub config: IamConfig,
}

/// Request to exchange an identity assertion for a session credential
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// The externally-issued assertion token
    pub token: String,
}

/// Response from a successful exchange
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// The internally-signed session credential
    pub access_token: String,
}

/// Exchange an identity assertion for a session credential
///
/// POST /v1/iam/login
///
/// The path is linear: token present → verified (signature, issuer,
/// audience, temporal claims, email policy) → subject present → issued.
/// Every failure short-circuits to the uniform unauthorized error; the
/// reason is logged here and never returned to the caller.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.token.is_empty() {
        warn!("Login rejected: empty assertion token");
        return Err(ApiError::Unauthorized);
    }

    let claims = state
        .verifier
        .verify(&request.token, &state.config.client_id)
        .await
        .map_err(|e| {
            warn!(error = %e, "Assertion verification failed");
            ApiError::Unauthorized
        })?;

    let subject = match claims.subject.as_deref() {
        Some(sub) if !sub.is_empty() => sub.to_string(),
        _ => {
            warn!("Verified assertion carries no subject claim");
            return Err(ApiError::Unauthorized);
        }
    };

    let access_token = state.issuer.issue(&subject).map_err(|e| {
        error!(error = %e, "Session credential signing failed");
        ApiError::Unauthorized
    })?;

    // Post-issuance hook: profile data never gates the exchange, so a
    // failed upsert is logged and the credential is returned anyway.
    let profile = UserProfile::from_claims(&subject, &claims);
    if let Err(e) = state.profiles.upsert(profile).await {
        warn!(error = %e, subject = %subject, "Profile upsert failed");
    }

    info!(subject = %subject, "Issued session credential");

    Ok(Json(LoginResponse { access_token }))
}

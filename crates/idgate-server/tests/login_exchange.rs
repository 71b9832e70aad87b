//! Login Exchange Integration Tests
//!
//! These tests verify the token-exchange behavior at the handler level:
//!
//! 1. A session credential is issued iff the assertion verifies and carries
//!    a verified email
//! 2. The issued credential preserves the subject and honors the validity
//!    window
//! 3. All rejection paths collapse to the same uniform unauthorized error
//! 4. The stub operations answer with their distinct signals

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use idgate_core::{IssuerConfig, SessionClaims, SessionIssuer};
use idgate_core::issuer::{DEFAULT_AUDIENCE, DEFAULT_ISSUER, DEFAULT_VALIDITY_SECS};
use idgate_verify::MockVerifier;

use idgate_server::api::error::ApiError;
use idgate_server::api::handlers::{
    login, register, whoami, LoginRequest, LoginResponse,
};
use idgate_server::{AppState, IamConfig, MemoryProfileStore, ProfileStore};

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

const TEST_PRIVATE_PEM: &str = include_str!("testdata/rsa_private.pem");
const TEST_PUBLIC_PEM: &str = include_str!("testdata/rsa_public.pem");

const CLIENT_ID: &str = "test-client-id";

// =============================================================================
// Test Helpers
// =============================================================================

/// Build an AppState whose mock verifier stamps assertions with the given
/// audience. The server always expects CLIENT_ID.
fn state_with_assertion_audience(audience: &str) -> Arc<AppState> {
    let issuer = SessionIssuer::from_rsa_pem(IssuerConfig::default(), TEST_PRIVATE_PEM.as_bytes())
        .expect("test key should parse");

    Arc::new(AppState {
        verifier: Arc::new(MockVerifier::new(audience)),
        issuer,
        profiles: Arc::new(MemoryProfileStore::new()),
        config: IamConfig {
            client_id: CLIENT_ID.to_string(),
        },
    })
}

fn test_state() -> Arc<AppState> {
    state_with_assertion_audience(CLIENT_ID)
}

async fn do_login(state: Arc<AppState>, token: &str) -> Result<Json<LoginResponse>, ApiError> {
    login(
        State(state),
        Json(LoginRequest {
            token: token.to_string(),
        }),
    )
    .await
}

/// Decode an issued credential the way a downstream service would
fn decode_credential(token: &str) -> SessionClaims {
    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_PEM.as_bytes()).unwrap();
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[DEFAULT_ISSUER]);
    validation.set_audience(&[DEFAULT_AUDIENCE]);
    decode::<SessionClaims>(token, &key, &validation)
        .expect("issued credential should verify")
        .claims
}

// =============================================================================
// Exchange Flow Tests
// =============================================================================

#[tokio::test]
async fn test_valid_exchange_issues_credential() {
    let state = test_state();

    let response = do_login(state, "user-123").await.unwrap();
    let claims = decode_credential(&response.0.access_token);

    assert_eq!(claims.sub, "user-123");
    assert_eq!(claims.iss, DEFAULT_ISSUER);
    assert_eq!(claims.aud, DEFAULT_AUDIENCE);
    assert_eq!(claims.exp - claims.iat, DEFAULT_VALIDITY_SECS);
    assert_eq!(claims.iat, claims.nbf);
}

#[tokio::test]
async fn test_consecutive_logins_mint_distinct_token_ids() {
    let state = test_state();

    let first = do_login(state.clone(), "user-123").await.unwrap();
    let second = do_login(state, "user-123").await.unwrap();

    let first_claims = decode_credential(&first.0.access_token);
    let second_claims = decode_credential(&second.0.access_token);

    assert_ne!(first_claims.jti, second_claims.jti);
}

#[tokio::test]
async fn test_profile_written_after_exchange() {
    let state = test_state();

    do_login(state.clone(), "user-123").await.unwrap();

    let profile = state
        .profiles
        .get("user-123")
        .await
        .unwrap()
        .expect("profile should be stored after a successful exchange");
    assert_eq!(profile.email.as_deref(), Some("user-123@example.com"));
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[tokio::test]
async fn test_empty_token_rejected() {
    let state = test_state();

    let result = do_login(state, "").await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_unverified_email_rejected_before_issuance() {
    let state = test_state();

    let result = do_login(state.clone(), "unverified:user-123").await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));

    // No credential, no profile: the exchange never reached issuance
    assert_eq!(state.profiles.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_failed_verification_rejected() {
    let state = test_state();

    let result = do_login(state, "FAIL:signature mismatch").await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_audience_mismatch_rejected() {
    // Assertions are stamped for a different client than the server expects
    let state = state_with_assertion_audience("another-client-id");

    let result = do_login(state, "user-123").await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_rejection_is_idempotent() {
    let state = test_state();

    for _ in 0..3 {
        let result = do_login(state.clone(), "FAIL:replayed bad assertion").await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}

#[tokio::test]
async fn test_all_rejections_share_one_status() {
    let state = test_state();

    let empty = do_login(state.clone(), "").await.unwrap_err();
    let unverified = do_login(state.clone(), "unverified:bob").await.unwrap_err();
    let invalid = do_login(state, "FAIL:expired").await.unwrap_err();

    for err in [empty, unverified, invalid] {
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

// =============================================================================
// Stub Operation Tests
// =============================================================================

#[tokio::test]
async fn test_register_reports_not_implemented() {
    let state = test_state();

    let err = register(State(state), None).await.unwrap_err();
    assert!(matches!(err, ApiError::Unimplemented("Register")));

    // Distinct from the authorization failure, by status and by code
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn test_whoami_returns_placeholder() {
    let state = test_state();

    let response = whoami(State(state), None).await;
    assert_eq!(response.0.name, "Idgate MVP");
}

//! IAM Server Binary
//!
//! Runs the idgate token-exchange HTTP server.

use std::env;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use idgate_core::{IssuerConfig, SessionIssuer};
use idgate_verify::{OidcConfig, OidcVerifier};

use idgate_server::{create_router, AppState, IamConfig, MemoryProfileStore};

#[tokio::main]
async fn main() {
    // Initialize logging
    let log_level = env::var("IDGATE_LOG_LEVEL")
        .unwrap_or_else(|_| "info".into())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Configuration
    let port: u16 = env::var("IDGATE_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("IDGATE_PORT must be a valid port number");

    let oidc_issuer = env::var("IDGATE_OIDC_ISSUER")
        .unwrap_or_else(|_| "https://accounts.google.com".into());

    let jwks_url = env::var("IDGATE_JWKS_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/certs".into());

    let client_id = env::var("IDGATE_CLIENT_ID")
        .expect("IDGATE_CLIENT_ID must be set to the expected assertion audience");

    // Signing key: loaded once, immutable for the process lifetime
    let key_path = env::var("IDGATE_SIGNING_KEY_PATH")
        .expect("IDGATE_SIGNING_KEY_PATH must point to an RSA private key PEM");
    let key_pem = std::fs::read(&key_path)
        .unwrap_or_else(|e| panic!("Failed to read signing key {}: {}", key_path, e));

    let issuer = SessionIssuer::from_rsa_pem(IssuerConfig::default(), &key_pem)
        .expect("Signing key must be a valid RSA private key PEM");

    let verifier = OidcVerifier::new(OidcConfig::new(&oidc_issuer, &jwks_url));

    info!(
        oidc_issuer = %oidc_issuer,
        client_id = %client_id,
        port = port,
        "Starting IAM server"
    );

    // Create application state
    let state = Arc::new(AppState {
        verifier: Arc::new(verifier),
        issuer,
        profiles: Arc::new(MemoryProfileStore::new()),
        config: IamConfig { client_id },
    });

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %addr, "IAM server listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

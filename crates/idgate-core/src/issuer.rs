//! Session credential issuance
//!
//! The issuer mints RS256-signed JWTs proving an authenticated session to
//! downstream services. The signing key is loaded once at process start and
//! shared read-only across requests; rotation is left to operational tooling.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::error::{CoreError, Result};

/// Default platform identity string (`iss` claim)
pub const DEFAULT_ISSUER: &str = "auth.idgate.dev";

/// Default platform name (`aud` claim)
pub const DEFAULT_AUDIENCE: &str = "Idgate Platform";

/// Default credential validity window in seconds (3 days)
pub const DEFAULT_VALIDITY_SECS: i64 = 259_200;

/// RSA private key used to sign session credentials
#[derive(Clone)]
pub struct SessionKey {
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKey")
            .field("encoding_key", &"[redacted]")
            .finish()
    }
}

impl SessionKey {
    /// Parse a signing key from an RSA private key in PEM format
    pub fn from_rsa_pem(pem: &[u8]) -> Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(pem)
            .map_err(|e| CoreError::InvalidKey(e.to_string()))?;
        Ok(Self { encoding_key })
    }
}

/// Configuration for the session issuer
///
/// Constructed explicitly at startup and handed to [`SessionIssuer::new`];
/// there is no ambient global.
#[derive(Debug, Clone)]
pub struct IssuerConfig {
    /// Value of the `iss` claim on issued credentials
    pub issuer: String,

    /// Value of the `aud` claim on issued credentials
    pub audience: String,

    /// Credential lifetime (`exp - iat`)
    pub validity: Duration,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.into(),
            audience: DEFAULT_AUDIENCE.into(),
            validity: Duration::seconds(DEFAULT_VALIDITY_SECS),
        }
    }
}

/// Mints internally-signed session credentials
///
/// Stateless per call apart from reading the shared signing key, so a single
/// issuer can be cloned into any number of concurrent request handlers.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    config: IssuerConfig,
    key: SessionKey,
}

impl SessionIssuer {
    /// Create an issuer from a parsed signing key
    pub fn new(config: IssuerConfig, key: SessionKey) -> Self {
        Self { config, key }
    }

    /// Create an issuer directly from an RSA private key in PEM format
    pub fn from_rsa_pem(config: IssuerConfig, pem: &[u8]) -> Result<Self> {
        Ok(Self::new(config, SessionKey::from_rsa_pem(pem)?))
    }

    /// Get the issuer configuration
    pub fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// Issue a session credential for a verified subject
    ///
    /// Returns the compact JWS serialization of an RS256-signed JWT with a
    /// fresh `jti`, `iat`/`nbf` at the current time, and `exp` at the end of
    /// the configured validity window. Never returns a partially-signed
    /// token: any signing failure is an error.
    pub fn issue(&self, subject: &str) -> Result<String> {
        if subject.is_empty() {
            return Err(CoreError::EmptySubject);
        }

        let now = Utc::now();
        let claims = SessionClaims {
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + self.config.validity).timestamp(),
            sub: subject.to_string(),
        };

        let token = encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.key.encoding_key,
        )?;

        Ok(token)
    }
}

//! OIDC assertion verifier
//!
//! Validates ID tokens from a trusted issuer using its published JWKS.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use moka::future::Cache;
use serde::Deserialize;
use tracing::debug;

use idgate_core::IdentityClaims;

use crate::error::{Result, VerifyError};
use crate::verifier::IdentityVerifier;

/// How long fetched JWKS material is served from cache
const JWKS_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Upper bound on a single JWKS fetch; on timeout the assertion is rejected
const JWKS_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a trusted OIDC issuer
#[derive(Debug, Clone)]
pub struct OidcConfig {
    /// The issuer identifier (iss claim)
    pub issuer: String,

    /// URL to fetch JWKS from
    pub jwks_url: String,

    /// Allowed signature algorithms (default: RS256, ES256)
    pub algorithms: Vec<Algorithm>,
}

fn default_algorithms() -> Vec<Algorithm> {
    vec![Algorithm::RS256, Algorithm::ES256]
}

impl OidcConfig {
    /// Create a new issuer configuration
    pub fn new(issuer: impl Into<String>, jwks_url: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            jwks_url: jwks_url.into(),
            algorithms: default_algorithms(),
        }
    }

    /// Restrict the allowed signature algorithms
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }
}

/// JWKS (JSON Web Key Set) response
#[derive(Debug, Deserialize)]
struct JwksResponse {
    keys: Vec<Jwk>,
}

impl JwksResponse {
    /// Select the key an assertion was signed with
    ///
    /// Assertions normally carry a `kid` header. A provider mid-rotation
    /// publishes several keys at once, so a missing `kid` falls back to the
    /// first key not excluded from signing use.
    fn signing_key(&self, kid: Option<&str>) -> Result<&Jwk> {
        if let Some(kid) = kid {
            return self
                .keys
                .iter()
                .find(|key| key.kid.as_deref() == Some(kid))
                .ok_or_else(|| VerifyError::UnknownKey(kid.to_string()));
        }

        self.keys
            .iter()
            .find(|key| !matches!(key.key_use.as_deref(), Some(u) if u != "sig"))
            .ok_or_else(|| VerifyError::UnknownKey("no signing key published".to_string()))
    }
}

/// Individual JWK (JSON Web Key)
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)] // Fields from JWKS spec, not all used directly
struct Jwk {
    /// Key ID
    kid: Option<String>,
    /// Key type
    kty: String,
    /// Algorithm
    alg: Option<String>,
    /// Use (sig for signing)
    #[serde(rename = "use")]
    key_use: Option<String>,
    /// RSA modulus (for RSA keys)
    n: Option<String>,
    /// RSA exponent (for RSA keys)
    e: Option<String>,
    /// EC curve (for EC keys)
    crv: Option<String>,
    /// EC x coordinate
    x: Option<String>,
    /// EC y coordinate
    y: Option<String>,
}

impl Jwk {
    /// Build a decoding key from the published key components
    fn to_decoding_key(&self) -> Result<DecodingKey> {
        match self.kty.as_str() {
            "RSA" => {
                let (n, e) = self.n.as_deref().zip(self.e.as_deref()).ok_or_else(|| {
                    VerifyError::InvalidFormat("RSA key missing n/e components".into())
                })?;
                DecodingKey::from_rsa_components(n, e)
                    .map_err(|err| VerifyError::InvalidFormat(err.to_string()))
            }
            "EC" => {
                let (x, y) = self.x.as_deref().zip(self.y.as_deref()).ok_or_else(|| {
                    VerifyError::InvalidFormat("EC key missing x/y components".into())
                })?;
                DecodingKey::from_ec_components(x, y)
                    .map_err(|err| VerifyError::InvalidFormat(err.to_string()))
            }
            other => Err(VerifyError::UnsupportedAlgorithm(format!(
                "key type {}",
                other
            ))),
        }
    }
}

/// Claims decoded from an inbound assertion
///
/// Everything is optional at this layer; policy on which claims are
/// mandatory is applied in `claims_from_raw`.
#[derive(Debug, Deserialize)]
struct RawClaims {
    /// Subject
    sub: Option<String>,
    /// Email address
    email: Option<String>,
    /// Provider's email-verification flag
    email_verified: Option<bool>,
    /// Family name
    family_name: Option<String>,
    /// Given name
    given_name: Option<String>,
    /// Full display name
    name: Option<String>,
    /// Profile picture URI
    picture: Option<String>,
    /// Audience (can be string or array)
    aud: Option<serde_json::Value>,
    /// Authorized party
    azp: Option<String>,
}

/// OIDC assertion verifier
///
/// Validates assertion signature, temporal claims, issuer, and audience
/// against the issuer's current signing keys, then extracts a normalized
/// claim set. Key material is cached; concurrent verifications never block
/// on a refresh.
pub struct OidcVerifier {
    /// Trusted issuer configuration
    config: OidcConfig,
    /// JWKS cache (jwks_url -> key set)
    jwks_cache: Cache<String, Arc<JwksResponse>>,
    /// HTTP client for fetching JWKS
    http_client: reqwest::Client,
}

impl OidcVerifier {
    /// Create a new verifier for a trusted issuer
    pub fn new(config: OidcConfig) -> Self {
        Self {
            config,
            jwks_cache: Cache::builder()
                .time_to_live(JWKS_CACHE_TTL)
                .max_capacity(16)
                .build(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Get the trusted issuer identifier
    pub fn issuer(&self) -> &str {
        &self.config.issuer
    }

    /// Fetch the issuer's JWKS (with caching)
    async fn fetch_jwks(&self) -> Result<Arc<JwksResponse>> {
        if let Some(cached) = self.jwks_cache.get(&self.config.jwks_url).await {
            debug!(issuer = %self.config.issuer, "Using cached JWKS");
            return Ok(cached);
        }

        debug!(issuer = %self.config.issuer, url = %self.config.jwks_url, "Fetching JWKS");
        let response = self
            .http_client
            .get(&self.config.jwks_url)
            .timeout(JWKS_FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| VerifyError::JwksFetch(e.to_string()))?;

        let jwks: JwksResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::JwksFetch(e.to_string()))?;

        let jwks = Arc::new(jwks);
        self.jwks_cache
            .insert(self.config.jwks_url.clone(), jwks.clone())
            .await;

        Ok(jwks)
    }

    /// Validate an assertion against an already-fetched key set
    fn check_assertion(
        &self,
        assertion: &str,
        expected_audience: &str,
        jwks: &JwksResponse,
    ) -> Result<IdentityClaims> {
        let header =
            decode_header(assertion).map_err(|e| VerifyError::InvalidFormat(e.to_string()))?;

        if !self.config.algorithms.contains(&header.alg) {
            return Err(VerifyError::UnsupportedAlgorithm(format!(
                "{:?}",
                header.alg
            )));
        }

        let decoding_key = jwks.signing_key(header.kid.as_deref())?.to_decoding_key()?;

        let mut validation = Validation::new(header.alg);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[expected_audience]);
        validation.validate_nbf = true;

        let token_data = decode::<RawClaims>(assertion, &decoding_key, &validation)?;

        claims_from_raw(token_data.claims)
    }
}

/// Extract a normalized claim set from decoded assertion claims
///
/// Extraction is permissive: absent claims become `None`. The one mandatory
/// field is the email-verification flag: absent or false is a hard
/// rejection, enforced here at the verifier boundary.
fn claims_from_raw(raw: RawClaims) -> Result<IdentityClaims> {
    if !raw.email_verified.unwrap_or(false) {
        return Err(VerifyError::EmailNotVerified);
    }

    let mut claims = IdentityClaims::new(true);
    claims.subject = raw.sub;
    claims.email = raw.email;
    claims.family_name = raw.family_name;
    claims.given_name = raw.given_name;
    claims.full_name = raw.name;
    claims.picture = raw.picture;
    claims.audience = raw.aud.as_ref().and_then(audience_value);
    claims.authorized_party = raw.azp;

    debug!(subject = ?claims.subject, "Extracted assertion claims");

    Ok(claims)
}

/// The `aud` claim may be a single string or an array of strings
fn audience_value(aud: &serde_json::Value) -> Option<String> {
    match aud {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(arr) => arr
            .first()
            .and_then(|v| v.as_str())
            .map(String::from),
        _ => None,
    }
}

#[async_trait]
impl IdentityVerifier for OidcVerifier {
    async fn verify(&self, assertion: &str, expected_audience: &str) -> Result<IdentityClaims> {
        if assertion.is_empty() {
            return Err(VerifyError::EmptyToken);
        }

        let jwks = self.fetch_jwks().await?;
        self.check_assertion(assertion, expected_audience, &jwks)
    }

    fn description(&self) -> &str {
        "OIDC assertion verifier"
    }
}

//! Claim sets for assertions and session credentials

use serde::{Deserialize, Serialize};

/// Normalized claim set extracted from a verified identity assertion
///
/// Every attribute except `email_verified` is optional: providers differ in
/// which profile claims they include, and absence is not an error. The
/// email-verification flag is mandatory because credential issuance is gated
/// on it; a verifier never produces an `IdentityClaims` with
/// `email_verified == false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject identifier (`sub`)
    pub subject: Option<String>,

    /// Email address (`email`)
    pub email: Option<String>,

    /// Whether the provider has verified the email address (`email_verified`)
    pub email_verified: bool,

    /// Family name (`family_name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    /// Given name (`given_name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Full display name (`name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Profile picture URI (`picture`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Audience the assertion was issued for (`aud`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// Authorized party (`azp`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_party: Option<String>,
}

impl IdentityClaims {
    /// Create an empty claim set with the given verification status
    pub fn new(email_verified: bool) -> Self {
        Self {
            subject: None,
            email: None,
            email_verified,
            family_name: None,
            given_name: None,
            full_name: None,
            picture: None,
            audience: None,
            authorized_party: None,
        }
    }

    /// Set the subject identifier
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the family name
    pub fn with_family_name(mut self, name: impl Into<String>) -> Self {
        self.family_name = Some(name.into());
        self
    }

    /// Set the given name
    pub fn with_given_name(mut self, name: impl Into<String>) -> Self {
        self.given_name = Some(name.into());
        self
    }

    /// Set the full display name
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    /// Set the profile picture URI
    pub fn with_picture(mut self, uri: impl Into<String>) -> Self {
        self.picture = Some(uri.into());
        self
    }

    /// Set the audience
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the authorized party
    pub fn with_authorized_party(mut self, party: impl Into<String>) -> Self {
        self.authorized_party = Some(party.into());
        self
    }
}

/// Claim set carried by an internally-issued session credential
///
/// Serialized as the JWT payload. Downstream services deserialize this to
/// check expiry and recover the authenticated subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Issuer - the platform identity string
    pub iss: String,

    /// Audience - the platform name
    pub aud: String,

    /// Unique token identifier (UUID v4)
    pub jti: String,

    /// Issued-at, UNIX seconds
    pub iat: i64,

    /// Not-before, UNIX seconds
    pub nbf: i64,

    /// Expiry, UNIX seconds
    pub exp: i64,

    /// Authenticated subject, carried over from the assertion
    pub sub: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_claims_builder() {
        let claims = IdentityClaims::new(true)
            .with_subject("user-123")
            .with_email("alice@example.com")
            .with_given_name("Alice")
            .with_audience("my-client-id");

        assert!(claims.email_verified);
        assert_eq!(claims.subject.as_deref(), Some("user-123"));
        assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
        assert_eq!(claims.given_name.as_deref(), Some("Alice"));
        assert_eq!(claims.audience.as_deref(), Some("my-client-id"));
        assert!(claims.family_name.is_none());
        assert!(claims.picture.is_none());
    }

    #[test]
    fn test_session_claims_roundtrip() {
        let claims = SessionClaims {
            iss: "auth.idgate.dev".into(),
            aud: "Idgate Platform".into(),
            jti: "3b48f1d2-0000-4000-8000-000000000000".into(),
            iat: 1_700_000_000,
            nbf: 1_700_000_000,
            exp: 1_700_259_200,
            sub: "user-123".into(),
        };

        let json = serde_json::to_string(&claims).unwrap();
        let restored: SessionClaims = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, claims);
    }
}

//! Token issuance and validation.
//!
//! Tokens are compact signed JWTs (HS256) carrying the user email as subject,
//! an issued-at timestamp, and an expiry. They are opaque bearer credentials:
//! no revocation list, no refresh — expiry is the only lifetime control.

use crate::domain::UserEmail;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by a bearer token.
///
/// Tokens carry identity and nothing else; authorization decisions are made
/// downstream against stored ownership.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's normalized email address
    pub sub: String,

    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,

    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

/// Errors from token issuance or validation.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signing failed (key material unusable)
    #[error("failed to sign token: {0}")]
    Signing(String),

    /// Signature mismatch, malformed structure, or expiry in the past
    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Issues and validates signed, stateless bearer tokens.
///
/// The key material is derived once from the configured secret and is
/// immutable for the process lifetime; the same instance is shared by
/// issuance (login) and validation (middleware), so no synchronization is
/// needed. Restarting the process with a different secret invalidates all
/// previously issued tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Build a token service from the signing secret and token lifetime.
    pub fn new(secret: &[u8], ttl_hours: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock leeway: a token one second past expiry is expired.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::hours(ttl_hours as i64),
        }
    }

    /// Issue a token for the given identity, expiring `ttl` from now.
    pub fn issue(&self, identity: &UserEmail) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded identity.
    ///
    /// All failure modes (bad signature, malformed token, expired) collapse
    /// into `TokenError::Invalid`; callers treat them uniformly as "no
    /// identity".
    pub fn validate(&self, token: &str) -> Result<UserEmail, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        UserEmail::new(&data.claims.sub).map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn service() -> TokenService {
        TokenService::new(SECRET, 24)
    }

    #[test]
    fn test_issue_validate_roundtrip() {
        let tokens = service();
        let email = UserEmail::new("jo@example.com").unwrap();

        let token = tokens.issue(&email).unwrap();
        let subject = tokens.validate(&token).unwrap();
        assert_eq!(subject, email);
    }

    #[test]
    fn test_claims_carry_configured_ttl() {
        let tokens = TokenService::new(SECRET, 24);
        let email = UserEmail::new("jo@example.com").unwrap();
        let token = tokens.issue(&email).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(SECRET),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, 24 * 60 * 60);
        assert_eq!(data.claims.sub, "jo@example.com");
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "jo@example.com".to_string(),
            iat: now - 25 * 60 * 60,
            exp: now - 60 * 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            tokens.validate(&token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let tokens = service();
        let token = tokens
            .issue(&UserEmail::new("jo@example.com").unwrap())
            .unwrap();
        let other = tokens
            .issue(&UserEmail::new("mallory@example.com").unwrap())
            .unwrap();

        // Splice another token's claims under this token's signature.
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert!(matches!(
            tokens.validate(&forged),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_foreign_key_rejected() {
        let issuer = TokenService::new(b"another-secret-another-secret-ab", 24);
        let email = UserEmail::new("jo@example.com").unwrap();
        let token = issuer.issue(&email).unwrap();

        assert!(service().validate(&token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let tokens = service();
        assert!(tokens.validate("not-a-token").is_err());
        assert!(tokens.validate("").is_err());
        assert!(tokens.validate("a.b").is_err());
    }
}

//! Bearer token verification
//!
//! The service does not issue credentials; callers arrive with an HS256
//! token minted by the identity provider. Verification yields
//! [`Claims`] that the middleware injects into request extensions.

pub mod middleware;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (user id as string)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at
}

/// HS256 token verification
#[derive(Clone)]
pub struct TokenVerifier {
    jwt_secret: String,
}

impl TokenVerifier {
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Mint a token for a user id. Used by tests and operational tooling;
    /// production tokens come from the identity provider.
    pub fn issue(&self, user_id: i64, ttl_hours: i64) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(Duration::hours(ttl_hours))
            .context("valid timestamp")?
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .context("Failed to generate token")?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify() {
        let verifier = TokenVerifier::new("test-secret".to_string());
        let token = verifier.issue(42, 1).unwrap();

        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let verifier = TokenVerifier::new("test-secret".to_string());
        let token = verifier.issue(42, 1).unwrap();

        let other = TokenVerifier::new("other-secret".to_string());
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let verifier = TokenVerifier::new("test-secret".to_string());
        // already expired an hour ago
        let token = verifier.issue(42, -1).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let verifier = TokenVerifier::new("test-secret".to_string());
        assert!(verifier.verify("not-a-token").is_err());
    }
}

//! Session token issuance and verification.
//!
//! Tokens are self-contained HS256 JWTs binding a request to a user id for
//! a fixed validity window. The server keeps no session table and cannot
//! revoke an individual token before it expires; logout is a client-side
//! concern. This is a known limitation, not an oversight.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub mod password;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i64, expiry_hours: i64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours)).timestamp();

        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp,
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    TokenValidation(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::TokenValidation(msg) => write!(f, "JWT validation error: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

pub fn generate_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verify signature and expiry, returning the embedded claims.
///
/// Signature mismatch, malformed payload and expired tokens all surface as
/// `TokenValidation`; the caller treats them alike.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::TokenValidation(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[test]
    fn issue_then_verify_returns_user_id() {
        let claims = Claims::new(42, 24);
        let token = generate_token(&claims, SECRET).unwrap();
        let decoded = verify_token(&token, SECRET).unwrap();
        assert_eq!(decoded.sub, 42);
        assert_eq!(decoded.iat, claims.iat);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn expiry_is_24h_from_issuance() {
        let claims = Claims::new(7, 24);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn token_signed_with_different_key_fails() {
        let claims = Claims::new(1, 24);
        let token = generate_token(&claims, SECRET).unwrap();
        assert!(verify_token(&token, "some-other-secret").is_err());
    }

    #[test]
    fn expired_token_fails() {
        // Build claims already past expiry, beyond the default leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = generate_token(&claims, SECRET).unwrap();
        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn malformed_token_fails() {
        assert!(verify_token("not.a.jwt", SECRET).is_err());
        assert!(verify_token("", SECRET).is_err());
    }

    #[test]
    fn empty_secret_is_rejected() {
        let claims = Claims::new(1, 24);
        assert!(matches!(generate_token(&claims, ""), Err(JwtError::InvalidSecret)));
        assert!(matches!(verify_token("x.y.z", ""), Err(JwtError::InvalidSecret)));
    }
}

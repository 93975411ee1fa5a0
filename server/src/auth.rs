//! Access-token issue and verification.
//!
//! Tokens are HS256 JWTs whose `sub` claim carries the user ID. The
//! secret is a fixed demo value and the password checks upstream accept
//! anything for demo-domain accounts; this is a trust model for demos,
//! not a security boundary.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Signing secret baked into the demo build.
const DEMO_SECRET: &[u8] = b"cabana-demo-secret";

/// Token lifetime in seconds (24 hours).
const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject claim containing the user identifier.
    sub: String,
    iat: u64,
    exp: u64,
}

/// Error returned when issuing or verifying a token fails.
#[derive(Debug)]
pub enum AuthError {
    /// The token signature does not match.
    InvalidSignature,
    /// The token has expired.
    TokenExpired,
    /// The token is malformed or cannot be parsed.
    MalformedToken,
    /// Token construction failed.
    SigningFailed(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSignature => write!(f, "invalid token signature"),
            Self::TokenExpired => write!(f, "token has expired"),
            Self::MalformedToken => write!(f, "malformed token"),
            Self::SigningFailed(reason) => write!(f, "token signing failed: {reason}"),
        }
    }
}

impl std::error::Error for AuthError {}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Issue an access token for `user_id`, valid for 24 hours of real time.
///
/// Tokens are session artifacts, not part of the seeded entity graph, so
/// real wall-clock time is fine here.
pub fn issue_token(user_id: &UserId) -> Result<String, AuthError> {
    let iat = unix_now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(DEMO_SECRET),
    )
    .map_err(|e| AuthError::SigningFailed(e.to_string()))
}

/// Verify a token and extract the user ID from its `sub` claim.
pub fn verify_token(token: &str) -> Result<UserId, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(token, &DecodingKey::from_secret(DEMO_SECRET), &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::MalformedToken,
        })?;
    Ok(UserId(data.claims.sub))
}

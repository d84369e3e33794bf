//! Token issuance, validation, and bearer extraction helpers

use axum::http::HeaderValue;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Issue a signed session token for a subject.
///
/// Expiry is `now + ttl` when a ttl is supplied, otherwise
/// `now + config.token_ttl`.
pub fn issue_token(
    subject: Uuid,
    ttl: Option<Duration>,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let expires_at = Utc::now() + ttl.unwrap_or(config.token_ttl);
    let claims = Claims {
        sub: subject.to_string(),
        exp: expires_at.timestamp() as u64,
    };

    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&header, &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign token");
        AuthError::TokenCreation
    })
}

/// Validate a session token and return its claims.
///
/// Fails on signature mismatch, malformed payload, missing `sub`,
/// or an `exp` in the past. There is no revocation: a token stays
/// valid until its natural expiry.
pub(crate) fn validate_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}

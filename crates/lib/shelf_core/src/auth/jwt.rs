//! JWT token generation and verification.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::info;

use super::AuthError;
use crate::models::auth::{TokenClaims, TokenKind};

/// Access token lifetime: 60 seconds.
pub const ACCESS_TOKEN_EXPIRY_SECS: i64 = 60;

/// Refresh token lifetime: 7 days.
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Generate a signed JWT access token (HS256, 60 s expiry).
pub fn generate_access_token(email: &str, secret: &[u8]) -> Result<String, AuthError> {
    sign_token(
        email,
        TokenKind::Access,
        Duration::seconds(ACCESS_TOKEN_EXPIRY_SECS),
        secret,
    )
}

/// Generate a signed JWT refresh token (HS256, 7 day expiry).
pub fn generate_refresh_token(email: &str, secret: &[u8]) -> Result<String, AuthError> {
    sign_token(
        email,
        TokenKind::Refresh,
        Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        secret,
    )
}

fn sign_token(
    email: &str,
    kind: TokenKind,
    ttl: Duration,
    secret: &[u8],
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: email.to_string(),
        kind,
        exp: (now + ttl).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify a JWT access token, returning the claims on success.
pub fn verify_access_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    verify_token(token, TokenKind::Access, secret)
}

/// Verify a JWT refresh token, returning the claims on success.
pub fn verify_refresh_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    verify_token(token, TokenKind::Refresh, secret)
}

fn verify_token(token: &str, kind: TokenKind, secret: &[u8]) -> Option<TokenClaims> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    // The default 60 s leeway would double the life of a 60 s access token.
    validation.leeway = 0;
    let claims = decode::<TokenClaims>(token, &key, &validation).ok()?.claims;
    (claims.kind == kind).then_some(claims)
}

/// Resolve the JWT secret: env var `JWT_SECRET` → persisted file.
pub fn resolve_jwt_secret() -> String {
    if let Ok(secret) = std::env::var("JWT_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    // Generate and persist
    let secret_path = jwt_secret_path();
    if let Ok(existing) = std::fs::read_to_string(&secret_path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = secret_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(&secret_path, &secret);
    info!(path = %secret_path.display(), "generated new JWT secret");
    secret
}

/// Path to the persisted JWT secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelf")
        .join("jwt-secret")
}

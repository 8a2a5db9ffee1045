//! Authentication domain models.

use serde::{Deserialize, Serialize};

/// Discriminates access tokens from refresh tokens so one cannot stand in
/// for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims embedded in access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user email (the identity claim).
    pub sub: String,
    /// Token kind (`access` or `refresh`).
    pub kind: TokenKind,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

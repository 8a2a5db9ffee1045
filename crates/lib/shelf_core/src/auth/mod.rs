//! Authentication and authorization logic.
//!
//! Provides password hashing, JWT management, and user queries shared by
//! the HTTP layer.

pub mod jwt;
pub mod password;
pub mod queries;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

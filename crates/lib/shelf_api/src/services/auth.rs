//! Authentication service — signup/login/refresh flows over `shelf_core::auth`.

use sqlx::PgPool;
use tracing::info;

use shelf_core::auth::AuthError;
use shelf_core::auth::jwt::{generate_access_token, generate_refresh_token, verify_refresh_token};
use shelf_core::auth::password::{hash_password, verify_password};
use shelf_core::auth::queries::{self, UserRow};

use crate::error::{AppError, AppResult, is_unique_violation};
use crate::models::{AccessTokenResponse, UserResponse};

/// Tokens minted at login: the access token for the response body and the
/// refresh token bound for the cookie.
pub struct LoginTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Basic request validation shared by signup and login.
fn validate_credentials(email: &str, password: &str) -> AppResult<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("A valid email is required".into()));
    }
    if password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }
    Ok(())
}

/// Create a new user account.
pub async fn signup(pool: &PgPool, email: &str, password: &str) -> AppResult<UserResponse> {
    validate_credentials(email, password)?;

    if queries::email_exists(pool, email).await? {
        return Err(AppError::Conflict("Email already exists".into()));
    }

    let password_hash = hash_password(password)?;

    // Concurrent duplicate signups slip past the pre-check and land here,
    // stopped by the users.email unique constraint.
    let user = match queries::create_user(pool, email, &password_hash).await {
        Ok(user) => user,
        Err(AuthError::DbError(ref e)) if is_unique_violation(e) => {
            return Err(AppError::Conflict("Email already exists".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(email, "user signed up");
    Ok(user.into())
}

/// Authenticate with email + password, minting an access/refresh token pair.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<LoginTokens> {
    validate_credentials(email, password)?;

    let user = queries::find_user_by_email(pool, email)
        .await?
        .ok_or_else(|| AppError::Credentials("Invalid email".into()))?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::Credentials("Invalid password".into()));
    }

    let access_token = generate_access_token(email, jwt_secret)?;
    let refresh_token = generate_refresh_token(email, jwt_secret)?;

    Ok(LoginTokens {
        access_token,
        refresh_token,
    })
}

/// Exchange a valid refresh token for a new access token.
///
/// Validity is purely a function of signature and expiry; no server-side
/// token state is consulted or written.
pub fn refresh(refresh_token: Option<&str>, jwt_secret: &[u8]) -> AppResult<AccessTokenResponse> {
    let token =
        refresh_token.ok_or_else(|| AppError::Unauthorized("Missing refresh token".into()))?;

    let claims = verify_refresh_token(token, jwt_secret)
        .ok_or_else(|| AppError::Forbidden("Invalid or expired refresh token".into()))?;

    let access_token = generate_access_token(&claims.sub, jwt_secret)?;
    Ok(AccessTokenResponse { access_token })
}

/// Resolve the acting user for an authenticated request by identity claim.
pub async fn resolve_user(pool: &PgPool, email: &str) -> AppResult<UserRow> {
    queries::find_user_by_email(pool, email)
        .await?
        .ok_or_else(|| AppError::Forbidden("Unknown token subject".into()))
}

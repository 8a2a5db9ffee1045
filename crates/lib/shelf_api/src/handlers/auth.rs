//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{AccessTokenResponse, LoginRequest, LogoutResponse, SignupRequest, UserResponse};
use crate::services::{auth, cookies};

/// `POST /auth/signup` — create a new user account.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = auth::signup(&state.pool, &body.email, &body.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `POST /auth/login` — authenticate with email + password.
///
/// The access token goes in the body; the refresh token rides an httpOnly
/// cookie.
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<AccessTokenResponse>)> {
    let tokens = auth::login(
        &state.pool,
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;

    let jar = jar.add(cookies::refresh_cookie(&tokens.refresh_token));
    Ok((
        jar,
        Json(AccessTokenResponse {
            access_token: tokens.access_token,
        }),
    ))
}

/// `POST /auth/refresh-token` — mint a new access token from the refresh cookie.
pub async fn refresh_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Json<AccessTokenResponse>> {
    let token = jar.get(cookies::REFRESH_COOKIE).map(|c| c.value().to_string());
    let resp = auth::refresh(token.as_deref(), state.config.jwt_secret.as_bytes())?;
    Ok(Json(resp))
}

/// `POST /auth/logout` — clear the refresh cookie.
///
/// Tokens are stateless, so an already-issued refresh token stays valid
/// until it expires; logout only removes it from the client.
pub async fn logout_handler(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let jar = jar.add(cookies::clear_refresh_cookie());
    (jar, Json(LogoutResponse { success: true }))
}

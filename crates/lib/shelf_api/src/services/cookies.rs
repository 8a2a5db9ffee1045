//! Cookie service — set/clear the httpOnly refresh-token cookie.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use shelf_core::auth::jwt::REFRESH_TOKEN_EXPIRY_DAYS;

/// Cookie name for the refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Build the httpOnly cookie carrying the refresh token (7 days, SameSite=Strict).
pub fn refresh_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE.to_string(), token.to_string()))
        .http_only(true)
        .secure(false) // TODO: set true in production
        .same_site(SameSite::Strict)
        .path("/".to_string())
        .max_age(Duration::days(REFRESH_TOKEN_EXPIRY_DAYS))
        .build()
}

/// Build an expired cookie to clear the refresh token.
pub fn clear_refresh_cookie() -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE.to_string(), String::new()))
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Strict)
        .path("/".to_string())
        .max_age(Duration::ZERO)
        .build()
}

//! Integration tests — build the router and drive the auth gate and
//! request validation with oneshot requests.
//!
//! The pool is created with `connect_lazy`, so no PostgreSQL instance is
//! needed: every path exercised here short-circuits (auth gate, cookie
//! checks, input validation) before any query runs.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use shelf_api::{AppState, config::ApiConfig};
use shelf_core::auth::jwt::verify_access_token;
use shelf_core::models::auth::{TokenClaims, TokenKind};
use tower::ServiceExt;

const TEST_SECRET: &str = "test-secret";

fn app() -> axum::Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/shelf_test")
        .expect("lazy pool");

    shelf_api::router(AppState {
        pool,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: "postgres://localhost:5432/shelf_test".into(),
            jwt_secret: TEST_SECRET.into(),
        },
    })
}

/// Sign claims directly so tests can mint expired or cross-kind tokens.
fn encode_token(kind: TokenKind, ttl_secs: i64, secret: &str) -> String {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: "a@x.com".into(),
        kind,
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn healthz_is_public() {
    let resp = app()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn protected_route_without_header_is_401() {
    let resp = app()
        .oneshot(json_request(
            "/books",
            serde_json::json!({"title": "T", "author": "A"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_wrong_scheme_is_401() {
    let mut req = json_request("/books", serde_json::json!({"title": "T", "author": "A"}));
    req.headers_mut()
        .insert(header::AUTHORIZATION, "Basic dXNlcjpwdw==".parse().unwrap());

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_garbage_token_is_403() {
    let mut req = json_request("/books", serde_json::json!({"title": "T", "author": "A"}));
    req.headers_mut()
        .insert(header::AUTHORIZATION, "Bearer not-a-jwt".parse().unwrap());

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn protected_route_with_expired_token_is_403() {
    let token = encode_token(TokenKind::Access, -120, TEST_SECRET);
    let mut req = json_request("/books", serde_json::json!({"title": "T", "author": "A"}));
    req.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn protected_route_rejects_refresh_token_as_bearer() {
    let token = encode_token(TokenKind::Refresh, 3600, TEST_SECRET);
    let mut req = json_request("/books", serde_json::json!({"title": "T", "author": "A"}));
    req.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn refresh_without_cookie_is_401() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/refresh-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_with_tampered_cookie_is_403() {
    let token = encode_token(TokenKind::Refresh, 3600, "some-other-secret");
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/refresh-token")
                .header(header::COOKIE, format!("refreshToken={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn refresh_with_expired_cookie_is_403() {
    let token = encode_token(TokenKind::Refresh, -120, TEST_SECRET);
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/refresh-token")
                .header(header::COOKIE, format!("refreshToken={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn refresh_with_access_token_cookie_is_403() {
    let token = encode_token(TokenKind::Access, 3600, TEST_SECRET);
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/refresh-token")
                .header(header::COOKIE, format!("refreshToken={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn refresh_with_valid_cookie_mints_access_token() {
    let token = encode_token(TokenKind::Refresh, 3600, TEST_SECRET);
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/refresh-token")
                .header(header::COOKIE, format!("refreshToken={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let access = json["accessToken"].as_str().expect("accessToken is string");

    // The minted access token carries the original identity claim.
    let claims = verify_access_token(access, TEST_SECRET.as_bytes()).expect("valid access token");
    assert_eq!(claims.sub, "a@x.com");
}

#[tokio::test]
async fn signup_with_malformed_email_is_400() {
    let resp = app()
        .oneshot(json_request(
            "/auth/signup",
            serde_json::json!({"email": "not-an-email", "password": "p1"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert!(json["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn signup_with_empty_password_is_400() {
    let resp = app()
        .oneshot(json_request(
            "/auth/signup",
            serde_json::json!({"email": "a@x.com", "password": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_clears_refresh_cookie() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie present")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("refreshToken="));
    assert!(set_cookie.contains("Max-Age=0"));

    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn invalid_rating_is_rejected_before_storage() {
    let token = encode_token(TokenKind::Access, 3600, TEST_SECRET);
    let mut req = json_request(
        "/books/018f6f3f-0000-7000-8000-000000000000/reviews",
        serde_json::json!({"rating": 6, "comment": "too good"}),
    );
    req.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = body_json(resp).await;
    assert!(json["error"].as_str().unwrap().contains("Rating"));
}

#[tokio::test]
async fn empty_book_title_is_rejected_before_storage() {
    let token = encode_token(TokenKind::Access, 3600, TEST_SECRET);
    let mut req = json_request("/books", serde_json::json!({"title": "  ", "author": "A"}));
    req.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

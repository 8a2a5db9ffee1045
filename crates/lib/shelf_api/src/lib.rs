//! # shelf_api
//!
//! HTTP API library for Shelf.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post, put};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, books, health, reviews};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `shelf_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    shelf_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/healthz", get(health::health_handler))
        .route("/auth/signup", post(auth::signup_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/refresh-token", post(auth::refresh_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/books", get(books::list_books_handler))
        .route("/books/{id}", get(books::get_book_handler))
        .route("/books/{id}/reviews", get(reviews::list_reviews_handler));

    // Protected routes (require a bearer access token)
    let protected = Router::new()
        .route("/books", post(books::create_book_handler))
        .route("/books/{id}/reviews", post(reviews::create_review_handler))
        .route(
            "/reviews/{id}",
            put(reviews::update_review_handler).delete(reviews::delete_review_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

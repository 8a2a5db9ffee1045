//! Book request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{BookListResponse, BookResponse, CreateBookRequest, ListBooksParams};
use crate::services::books;

/// `GET /books` — list books with pagination and optional author filter.
pub async fn list_books_handler(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>,
) -> AppResult<Json<BookListResponse>> {
    let resp = books::list_books(&state.pool, &params).await?;
    Ok(Json(resp))
}

/// `GET /books/{id}` — fetch a single book.
pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(book_id): Path<Uuid>,
) -> AppResult<Json<BookResponse>> {
    let resp = books::get_book(&state.pool, &book_id).await?;
    Ok(Json(resp))
}

/// `POST /books` — create a book. Requires authentication.
pub async fn create_book_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let resp = books::create_book(&state.pool, &user.0.sub, &body).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

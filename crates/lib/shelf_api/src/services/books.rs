//! Book service — listing, lookup, and creation.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use shelf_core::books;

use crate::error::{AppError, AppResult};
use crate::models::{BookListResponse, BookResponse, CreateBookRequest, ListBooksParams};
use crate::services::auth::resolve_user;

/// Default page size for listings.
const DEFAULT_LIMIT: i64 = 20;

/// Maximum page size for listings.
const MAX_LIMIT: i64 = 100;

/// List books with pagination and an optional author filter.
pub async fn list_books(pool: &PgPool, params: &ListBooksParams) -> AppResult<BookListResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let (rows, total) = books::list_books(pool, limit, offset, params.author.as_deref()).await?;

    Ok(BookListResponse {
        items: rows.into_iter().map(BookResponse::from).collect(),
        total,
        limit,
        offset,
    })
}

/// Fetch a single book.
pub async fn get_book(pool: &PgPool, book_id: &Uuid) -> AppResult<BookResponse> {
    let book = books::get_book(pool, book_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".into()))?;
    Ok(book.into())
}

/// Create a book on behalf of the authenticated user.
pub async fn create_book(
    pool: &PgPool,
    email: &str,
    body: &CreateBookRequest,
) -> AppResult<BookResponse> {
    if body.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if body.author.trim().is_empty() {
        return Err(AppError::Validation("Author is required".into()));
    }

    let user = resolve_user(pool, email).await?;

    let book = books::create_book(
        pool,
        &body.title,
        &body.author,
        body.description.as_deref(),
        &user.id,
    )
    .await?;

    info!(book_id = %book.id, "book created");
    Ok(book.into())
}

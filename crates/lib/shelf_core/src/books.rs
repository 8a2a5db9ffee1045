//! Book persistence.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::uuid::uuidv7;

/// Row returned by book queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookRow {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// List books, newest first, optionally filtered by author.
///
/// Returns the page plus the total count matching the filter.
pub async fn list_books(
    pool: &PgPool,
    limit: i64,
    offset: i64,
    author: Option<&str>,
) -> Result<(Vec<BookRow>, i64), sqlx::Error> {
    let total =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books WHERE $1::text IS NULL OR author = $1")
            .bind(author)
            .fetch_one(pool)
            .await?;

    let rows = sqlx::query_as::<_, BookRow>(
        r#"
        SELECT id, title, author, description, created_by, created_at
        FROM books
        WHERE $1::text IS NULL OR author = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(author)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

/// Get a book by ID.
pub async fn get_book(pool: &PgPool, book_id: &Uuid) -> Result<Option<BookRow>, sqlx::Error> {
    sqlx::query_as::<_, BookRow>(
        r#"
        SELECT id, title, author, description, created_by, created_at
        FROM books
        WHERE id = $1
        "#,
    )
    .bind(book_id)
    .fetch_optional(pool)
    .await
}

/// Create a new book.
pub async fn create_book(
    pool: &PgPool,
    title: &str,
    author: &str,
    description: Option<&str>,
    created_by: &Uuid,
) -> Result<BookRow, sqlx::Error> {
    sqlx::query_as::<_, BookRow>(
        r#"
        INSERT INTO books (id, title, author, description, created_by)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, author, description, created_by, created_at
        "#,
    )
    .bind(uuidv7())
    .bind(title)
    .bind(author)
    .bind(description)
    .bind(created_by)
    .fetch_one(pool)
    .await
}

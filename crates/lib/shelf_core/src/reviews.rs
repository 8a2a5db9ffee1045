//! Review persistence.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::uuid::uuidv7;

/// Row returned by review queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRow {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List reviews for a book, newest first.
pub async fn list_reviews_for_book(
    pool: &PgPool,
    book_id: &Uuid,
) -> Result<Vec<ReviewRow>, sqlx::Error> {
    sqlx::query_as::<_, ReviewRow>(
        r#"
        SELECT id, book_id, user_id, rating, comment, created_at, updated_at
        FROM reviews
        WHERE book_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(book_id)
    .fetch_all(pool)
    .await
}

/// Get a review by ID.
pub async fn get_review(pool: &PgPool, review_id: &Uuid) -> Result<Option<ReviewRow>, sqlx::Error> {
    sqlx::query_as::<_, ReviewRow>(
        r#"
        SELECT id, book_id, user_id, rating, comment, created_at, updated_at
        FROM reviews
        WHERE id = $1
        "#,
    )
    .bind(review_id)
    .fetch_optional(pool)
    .await
}

/// Create a review.
///
/// The `(book_id, user_id)` unique constraint enforces one review per
/// user per book; callers map its violation to a conflict error.
pub async fn create_review(
    pool: &PgPool,
    book_id: &Uuid,
    user_id: &Uuid,
    rating: i16,
    comment: Option<&str>,
) -> Result<ReviewRow, sqlx::Error> {
    sqlx::query_as::<_, ReviewRow>(
        r#"
        INSERT INTO reviews (id, book_id, user_id, rating, comment)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, book_id, user_id, rating, comment, created_at, updated_at
        "#,
    )
    .bind(uuidv7())
    .bind(book_id)
    .bind(user_id)
    .bind(rating)
    .bind(comment)
    .fetch_one(pool)
    .await
}

/// Update a review's rating and comment. Ownership is checked by the caller.
pub async fn update_review(
    pool: &PgPool,
    review_id: &Uuid,
    rating: i16,
    comment: Option<&str>,
) -> Result<ReviewRow, sqlx::Error> {
    sqlx::query_as::<_, ReviewRow>(
        r#"
        UPDATE reviews
        SET rating = $1, comment = $2, updated_at = now()
        WHERE id = $3
        RETURNING id, book_id, user_id, rating, comment, created_at, updated_at
        "#,
    )
    .bind(rating)
    .bind(comment)
    .bind(review_id)
    .fetch_one(pool)
    .await
}

/// Delete a review. Ownership is checked by the caller.
pub async fn delete_review(pool: &PgPool, review_id: &Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(review_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

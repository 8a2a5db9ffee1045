//! Review service — rating validation, uniqueness, and ownership checks.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use shelf_core::{books, reviews};

use crate::error::{AppError, AppResult, is_unique_violation};
use crate::models::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};
use crate::services::auth::resolve_user;

fn validate_rating(rating: i16) -> AppResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation("Rating must be between 1 and 5".into()));
    }
    Ok(())
}

/// List reviews for a book.
pub async fn list_reviews(pool: &PgPool, book_id: &Uuid) -> AppResult<Vec<ReviewResponse>> {
    // A missing book is 404; a book with no reviews is an empty list.
    if books::get_book(pool, book_id).await?.is_none() {
        return Err(AppError::NotFound("Book not found".into()));
    }

    let rows = reviews::list_reviews_for_book(pool, book_id).await?;
    Ok(rows.into_iter().map(ReviewResponse::from).collect())
}

/// Submit a review for a book on behalf of the authenticated user.
pub async fn create_review(
    pool: &PgPool,
    book_id: &Uuid,
    email: &str,
    body: &CreateReviewRequest,
) -> AppResult<ReviewResponse> {
    validate_rating(body.rating)?;

    let user = resolve_user(pool, email).await?;

    if books::get_book(pool, book_id).await?.is_none() {
        return Err(AppError::NotFound("Book not found".into()));
    }

    // The (book_id, user_id) unique constraint closes the race between
    // concurrent identical submissions.
    let row = match reviews::create_review(pool, book_id, &user.id, body.rating, body.comment.as_deref())
        .await
    {
        Ok(row) => row,
        Err(ref e) if is_unique_violation(e) => {
            return Err(AppError::Conflict(
                "You have already reviewed this book".into(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    info!(review_id = %row.id, book_id = %book_id, "review created");
    Ok(row.into())
}

/// Update a review. Only the review's author may edit it.
pub async fn update_review(
    pool: &PgPool,
    review_id: &Uuid,
    email: &str,
    body: &UpdateReviewRequest,
) -> AppResult<ReviewResponse> {
    validate_rating(body.rating)?;

    let user = resolve_user(pool, email).await?;

    let existing = reviews::get_review(pool, review_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".into()))?;

    if existing.user_id != user.id {
        return Err(AppError::Forbidden("You do not own this review".into()));
    }

    let row = reviews::update_review(pool, review_id, body.rating, body.comment.as_deref()).await?;
    Ok(row.into())
}

/// Delete a review. Only the review's author may delete it.
pub async fn delete_review(pool: &PgPool, review_id: &Uuid, email: &str) -> AppResult<()> {
    let user = resolve_user(pool, email).await?;

    let existing = reviews::get_review(pool, review_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".into()))?;

    if existing.user_id != user.id {
        return Err(AppError::Forbidden("You do not own this review".into()));
    }

    reviews::delete_review(pool, review_id).await?;
    info!(review_id = %review_id, "review deleted");
    Ok(())
}

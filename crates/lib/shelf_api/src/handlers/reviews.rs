//! Review request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};
use crate::services::reviews;

/// `GET /books/{id}/reviews` — list reviews for a book.
pub async fn list_reviews_handler(
    State(state): State<AppState>,
    Path(book_id): Path<Uuid>,
) -> AppResult<Json<Vec<ReviewResponse>>> {
    let resp = reviews::list_reviews(&state.pool, &book_id).await?;
    Ok(Json(resp))
}

/// `POST /books/{id}/reviews` — submit a review. Requires authentication.
pub async fn create_review_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(book_id): Path<Uuid>,
    Json(body): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    let resp = reviews::create_review(&state.pool, &book_id, &user.0.sub, &body).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `PUT /reviews/{id}` — edit a review. Requires authentication and ownership.
pub async fn update_review_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(review_id): Path<Uuid>,
    Json(body): Json<UpdateReviewRequest>,
) -> AppResult<Json<ReviewResponse>> {
    let resp = reviews::update_review(&state.pool, &review_id, &user.0.sub, &body).await?;
    Ok(Json(resp))
}

/// `DELETE /reviews/{id}` — delete a review. Requires authentication and ownership.
pub async fn delete_review_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(review_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    reviews::delete_review(&state.pool, &review_id, &user.0.sub).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! API request/response models.
//!
//! Wire JSON uses camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shelf_core::auth::queries::UserRow;
use shelf_core::books::BookRow;
use shelf_core::reviews::ReviewRow;

/// Error payload returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /auth/signup` request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Access token payload returned by login and refresh.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// `POST /auth/logout` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Public user representation (never carries the password hash).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// `POST /books` request body.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

/// Query parameters for `GET /books`.
#[derive(Debug, Deserialize)]
pub struct ListBooksParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub author: Option<String>,
}

/// Book representation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<BookRow> for BookResponse {
    fn from(row: BookRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            description: row.description,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

/// Paginated book listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookListResponse {
    pub items: Vec<BookResponse>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// `POST /books/{id}/reviews` request body.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: i16,
    pub comment: Option<String>,
}

/// `PUT /reviews/{id}` request body.
#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    pub rating: i16,
    pub comment: Option<String>,
}

/// Review representation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewRow> for ReviewResponse {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            book_id: row.book_id,
            user_id: row.user_id,
            rating: row.rating,
            comment: row.comment,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `GET /healthz` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

//! Service layer — validation and orchestration between handlers and
//! `shelf_core` persistence.

pub mod auth;
pub mod books;
pub mod cookies;
pub mod reviews;

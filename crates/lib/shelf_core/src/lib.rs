//! # shelf_core
//!
//! Core domain logic for Shelf.

pub mod auth;
pub mod books;
pub mod migrate;
pub mod models;
pub mod reviews;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

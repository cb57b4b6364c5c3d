//! HTTP handlers: greeting page, bakery lookups and baked-good rankings.

pub mod baked_good;
pub mod bakery;
pub use baked_good::*;
pub use bakery::*;

use crate::error::{AppError, ROUTE_NOT_FOUND};
use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html("<h1>Bakery GET API</h1>")
}

/// Unmatched paths get the same JSON error shape as the lookups.
pub async fn not_found() -> AppError {
    AppError::NotFound(ROUTE_NOT_FOUND)
}

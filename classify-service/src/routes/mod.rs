pub mod books;
pub mod health;
pub mod index;
pub mod search;

use axum::http::StatusCode;
use std::fmt::Display;
use tracing::error;

/// Logs `err` and turns it into a 500 carrying the error text.
pub(crate) fn internal_error(context: &str, err: impl Display) -> (StatusCode, String) {
    error!("{}: {}", context, err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

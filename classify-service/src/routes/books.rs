use crate::models::storage::BookRecord;
use crate::routes::internal_error;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct AddBookParams {
    #[serde(default)]
    pub id: String,
}

/// Looks the work up by owi and stores it. Stops at the first failure.
pub async fn add_book(
    Query(params): Query<AddBookParams>,
    State(state): State<AppState>,
) -> Result<StatusCode, (StatusCode, String)> {
    let book = state
        .classify
        .find(&params.id)
        .await
        .map_err(|e| internal_error(&format!("Lookup of book {:?} failed", params.id), e))?;

    state
        .store
        .test_connection()
        .await
        .map_err(|e| internal_error("Database is not responding", e))?;

    let record = BookRecord::from(book);
    state
        .store
        .insert_book(&record)
        .await
        .map_err(|e| internal_error(&format!("Failed to store book {:?}", record.id), e))?;

    info!("Stored book {:?} ({})", record.title, record.classification);
    Ok(StatusCode::OK)
}

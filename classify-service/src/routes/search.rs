use crate::models::responses::SearchResult;
use crate::routes::internal_error;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

pub async fn search_books(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SearchResult>>, (StatusCode, String)> {
    info!("Search query: {:?}", params.search);

    let results = state
        .classify
        .search(&params.search)
        .await
        .map_err(|e| internal_error("Search failed", e))?;

    info!("Search for {:?} returned {} works", params.search, results.len());
    Ok(Json(results))
}

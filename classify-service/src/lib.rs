//! Classify service
//!
//! Searches the OCLC Classify API for books and stores chosen works in a local
//! SQLite database.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use models::storage::BookStore;
use routes::{
    books::add_book,
    health::health_check,
    index::index_page,
    search::search_books,
};
use services::classify::ClassifyClient;

pub type Store = Arc<dyn BookStore + Send + Sync>;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub classify: ClassifyClient,
    pub store: Store,
}

impl AppState {
    pub fn new(classify: ClassifyClient, store: Store) -> Self {
        Self { classify, store }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/status", get(health_check))
        .route("/search", get(search_books))
        .route("/books/add", get(add_book))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

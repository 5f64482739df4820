#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use classify_service::models::storage::{BookRecord, BookStore, StorageError};
use reqwest::Url;
use std::sync::{Arc, Mutex};

pub const SEARCH_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<classify xmlns="http://classify.oclc.org">
  <response code="4"/>
  <input type="title">Lord of the Rings: Book 1</input>
  <works>
    <work author="Tolkien, J. R. R." editions="452" hyr="2012" lyr="1954" owi="1151" title="The Lord of the Rings"/>
    <work author="Tolkien, J. R. R. | Lee, Alan" editions="38" hyr="2004" lyr="1954" owi="2879" title="The Fellowship of the Ring"/>
  </works>
</classify>"#;

pub const BOOK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<classify xmlns="http://classify.oclc.org">
  <response code="2"/>
  <work author="Herbert, Frank" editions="263" holdings="7310" hyr="2021" lyr="1965" owi="3046" title="Dune">3046</work>
  <recommendations>
    <ddc>
      <mostPopular holdings="3530" nsfa="813.54" sfa="813.54"/>
    </ddc>
  </recommendations>
</classify>"#;

pub type SeenQueries = Arc<Mutex<Vec<String>>>;

/// Serves canned Classify responses and records every raw query string.
///
/// `title=broken` gets truncated XML, `title=nothing` an empty `works`
/// list and `owi=gone` a 503.
pub async fn spawn_upstream() -> (Url, SeenQueries) {
    let seen: SeenQueries = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/classify2/Classify", get(classify))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let url = Url::parse(&format!("http://{}/classify2/Classify", addr)).unwrap();
    (url, seen)
}

async fn classify(State(seen): State<SeenQueries>, RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();
    seen.lock().unwrap().push(query.clone());

    if query.contains("owi=gone") {
        (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance").into_response()
    } else if query.contains("title=broken") {
        "<classify><works><work owi=\"1\"/>".into_response()
    } else if query.contains("title=nothing") {
        "<classify><works/></classify>".into_response()
    } else if query.contains("owi=") {
        BOOK_XML.into_response()
    } else {
        SEARCH_XML.into_response()
    }
}

/// An address nothing is listening on.
pub fn unreachable_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/classify2/Classify", addr)).unwrap()
}

/// In-memory store whose liveness can be switched off.
pub struct FakeStore {
    pub alive: bool,
    pub inserted: Mutex<Vec<BookRecord>>,
}

impl FakeStore {
    pub fn new(alive: bool) -> Arc<Self> {
        Arc::new(Self {
            alive,
            inserted: Mutex::new(Vec::new()),
        })
    }

    pub fn inserted(&self) -> Vec<BookRecord> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookStore for FakeStore {
    async fn test_connection(&self) -> Result<(), StorageError> {
        if self.alive {
            Ok(())
        } else {
            Err(StorageError::Sqlite(sqlx::Error::PoolClosed))
        }
    }

    async fn insert_book(&self, book: &BookRecord) -> Result<(), StorageError> {
        self.test_connection().await?;
        self.inserted.lock().unwrap().push(book.clone());
        Ok(())
    }
}

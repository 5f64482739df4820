use crate::models::responses::ClassifyBookResponse;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub id: String,
    pub classification: String,
}

impl From<ClassifyBookResponse> for BookRecord {
    fn from(book: ClassifyBookResponse) -> Self {
        Self {
            title: book.title,
            author: book.author,
            id: book.id,
            classification: book.classification,
        }
    }
}

#[async_trait]
pub trait BookStore {
    async fn test_connection(&self) -> Result<(), StorageError>;
    async fn insert_book(&self, book: &BookRecord) -> Result<(), StorageError>;
}

pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        if let Some(dir) = database_dir(database_url) {
            if !dir.exists() {
                info!("Creating database directory {}", dir.display());
                tokio::fs::create_dir_all(&dir).await?;
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, creating the `books` table if it is missing.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                pk INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                author TEXT,
                id TEXT,
                classification TEXT
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Directory holding the database file of a file-backed `sqlite:` URL.
///
/// `None` for in-memory databases and for files in the working directory.
fn database_dir(database_url: &str) -> Option<PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(':') {
        return None;
    }

    Path::new(path)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

#[async_trait]
impl BookStore for SqliteBackend {
    async fn test_connection(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn insert_book(&self, book: &BookRecord) -> Result<(), StorageError> {
        self.test_connection().await?;

        sqlx::query("INSERT INTO books (title, author, id, classification) VALUES (?, ?, ?, ?)")
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.id)
            .bind(&book.classification)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

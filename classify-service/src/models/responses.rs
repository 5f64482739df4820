use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// One `work` entry of a title search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "ID")]
    pub id: String,
}

/// A single work returned by an owi lookup, with its most popular DDC class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyBookResponse {
    pub title: String,
    pub author: String,
    pub id: String,
    pub classification: String,
}

/// View model for the index page.
#[derive(Debug)]
pub struct Page {
    pub name: String,
    pub db_status: bool,
}

impl Page {
    pub const DEFAULT_NAME: &'static str = "Gopher";

    pub fn new(name: Option<String>, db_status: bool) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_NAME.to_string());
        Self { name, db_status }
    }
}

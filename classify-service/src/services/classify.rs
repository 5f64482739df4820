use crate::models::responses::{ClassifyBookResponse, SearchResult};
use crate::services::decode::{decode_book, decode_search, DecodeError};
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CLASSIFY_API_URL: &str = "http://classify.oclc.org/classify2/Classify";

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Classify request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Client for the OCLC Classify API.
#[derive(Clone)]
pub struct ClassifyClient {
    client: Client,
    base_url: Url,
}

impl ClassifyClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn search_url(&self, query: &str) -> Url {
        self.lookup_url("title", query)
    }

    pub fn find_url(&self, id: &str) -> Url {
        self.lookup_url("owi", id)
    }

    fn lookup_url(&self, key: &str, value: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("summary", "true")
            .append_pair(key, value);
        url
    }

    /// GETs `url` and returns the body. Non-2xx statuses are errors.
    pub async fn fetch(&self, url: Url) -> Result<String, ClassifyError> {
        info!("Requesting {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClassifyError> {
        let body = self.fetch(self.search_url(query)).await?;
        Ok(decode_search(&body)?)
    }

    pub async fn find(&self, id: &str) -> Result<ClassifyBookResponse, ClassifyError> {
        let body = self.fetch(self.find_url(id)).await?;
        Ok(decode_book(&body)?)
    }
}

use crate::services::classify::DEFAULT_CLASSIFY_API_URL;
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://db/dev.db";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT '{0}'")]
    Port(String),
    #[error("Invalid CLASSIFY_API_URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub classify_api_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Port(value))?,
            None => DEFAULT_PORT,
        };

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let api_url =
            lookup("CLASSIFY_API_URL").unwrap_or_else(|| DEFAULT_CLASSIFY_API_URL.to_string());
        let classify_api_url = Url::parse(&api_url).map_err(|e| ConfigError::ApiUrl {
            value: api_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            port,
            database_url,
            classify_api_url,
        })
    }
}

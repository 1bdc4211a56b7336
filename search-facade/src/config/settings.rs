//! Settings read from the process environment.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::AppError;
use search_facade_repository::{BasicAuth, StoreConfig};

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Everything needed to build the engine connection and the facade client.
#[derive(Debug, Clone)]
pub struct Settings {
    pub opensearch_url: String,
    pub auth: Option<BasicAuth>,
    pub store: StoreConfig,
}

impl Settings {
    /// Read settings from environment variables. Load `.env` beforehand to
    /// include its values.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `OPENSEARCH_USERNAME` / `OPENSEARCH_PASSWORD`: basic-auth credentials, both or neither
    /// - `INDEX_NAME_PREFIX`: prefix applied to every index name (default: tdp_)
    /// - `MAX_INDEX_LIMIT`: maximum number of prefixed indices (default: 50)
    /// - `SEARCH_PAGE_SIZE`: hits requested per search (default: 1000)
    /// - `REQUEST_TIMEOUT_SECS`: per-request timeout in seconds (default: 30)
    /// - `BULK_CHUNK_SIZE`: documents per bulk request (default: 500)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opensearch_url =
            lookup("OPENSEARCH_URL").unwrap_or_else(|| DEFAULT_OPENSEARCH_URL.to_string());

        let auth = match (lookup("OPENSEARCH_USERNAME"), lookup("OPENSEARCH_PASSWORD")) {
            (Some(username), Some(password)) => Some(BasicAuth { username, password }),
            (None, None) => None,
            _ => {
                return Err(AppError::config(
                    "OPENSEARCH_USERNAME and OPENSEARCH_PASSWORD must be set together",
                ))
            }
        };

        let mut store = StoreConfig::default();
        if let Some(prefix) = lookup("INDEX_NAME_PREFIX") {
            if prefix.is_empty() {
                return Err(AppError::config("INDEX_NAME_PREFIX must not be empty"));
            }
            store = store.with_index_prefix(prefix);
        }
        if let Some(max) = parse_var::<usize, _>(&lookup, "MAX_INDEX_LIMIT")? {
            store = store.with_max_indices(max);
        }
        if let Some(size) = parse_var::<usize, _>(&lookup, "SEARCH_PAGE_SIZE")? {
            store = store.with_page_size(size);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "REQUEST_TIMEOUT_SECS")? {
            store = store.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(chunk) = parse_var::<usize, _>(&lookup, "BULK_CHUNK_SIZE")? {
            store = store.with_bulk_chunk_size(chunk);
        }

        Ok(Self {
            opensearch_url,
            auth,
            store,
        })
    }

    /// Replace the engine URL, e.g. from a command-line flag.
    pub fn with_opensearch_url(mut self, url: impl Into<String>) -> Self {
        self.opensearch_url = url.into();
        self
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AppError::config(format!("Invalid {} '{}': {}", key, raw, e)))
        })
        .transpose()
}

//! Configuration types for the DocumentStoreClient.

use std::time::Duration;

/// Prefix every managed index name carries.
pub const DEFAULT_INDEX_PREFIX: &str = "tdp_";

/// Maximum number of prefixed indices the facade will create.
pub const DEFAULT_MAX_INDICES: usize = 50;

/// Maximum number of hits returned by a single search.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Client-side timeout applied to every search request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Server-side timeout sent with single-document inserts.
pub const DEFAULT_INSERT_TIMEOUT: Duration = Duration::from_secs(30);

/// Documents sent per bulk request.
pub const DEFAULT_BULK_CHUNK_SIZE: usize = 500;

/// Configuration for the DocumentStoreClient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prefix prepended to index names that lack it.
    pub index_prefix: String,
    /// Index creation is refused once this many prefixed indices exist.
    pub max_indices: usize,
    /// Maximum number of hits per search.
    pub page_size: usize,
    /// Timeout for search requests.
    pub request_timeout: Duration,
    /// Timeout for single-document inserts.
    pub insert_timeout: Duration,
    /// Documents per bulk request; larger loads are split.
    pub bulk_chunk_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            index_prefix: DEFAULT_INDEX_PREFIX.to_string(),
            max_indices: DEFAULT_MAX_INDICES,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            insert_timeout: DEFAULT_INSERT_TIMEOUT,
            bulk_chunk_size: DEFAULT_BULK_CHUNK_SIZE,
        }
    }
}

impl StoreConfig {
    pub fn with_index_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.index_prefix = prefix.into();
        self
    }

    pub fn with_max_indices(mut self, max_indices: usize) -> Self {
        self.max_indices = max_indices;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_insert_timeout(mut self, timeout: Duration) -> Self {
        self.insert_timeout = timeout;
        self
    }

    /// Zero is treated as one.
    pub fn with_bulk_chunk_size(mut self, chunk_size: usize) -> Self {
        self.bulk_chunk_size = chunk_size.max(1);
        self
    }

    /// Pattern matching every index managed under this prefix.
    pub fn index_pattern(&self) -> String {
        format!("{}*", self.index_prefix)
    }
}

//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::SearchError;
use search_facade_shared::{DocumentBody, SearchHit, SearchRequest};

/// Abstract interface for search engine operations.
///
/// This trait covers exactly the engine calls the facade delegates to: index
/// management, document writes and query execution. Implementations can be
/// swapped for different backends (OpenSearch, mock, etc.).
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>`. A request that exceeds its
/// timeout must be reported as `SearchError::Timeout`.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Count the indices whose names match `pattern` (e.g. `tdp_*`).
    async fn count_indices(&self, pattern: &str) -> Result<usize, SearchError>;

    /// Check whether an index exists.
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError>;

    /// Create an index with one primary shard and no replicas.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was created
    /// * `Err(SearchError::IndexCreationError)` - If the engine refused the request
    async fn create_index(&self, index: &str) -> Result<(), SearchError>;

    /// Delete an index and all of its documents.
    async fn delete_index(&self, index: &str) -> Result<(), SearchError>;

    /// Index a single document under the given id.
    ///
    /// If a document with the same id already exists, it is replaced.
    ///
    /// # Arguments
    ///
    /// * `index` - Target index
    /// * `id` - Document id
    /// * `document` - Document body
    /// * `timeout` - Server-side timeout for the write
    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: &DocumentBody,
        timeout: Duration,
    ) -> Result<(), SearchError>;

    /// Index many documents in a single bulk request with engine-assigned ids.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If every document was indexed
    /// * `Err(SearchError::BulkIndexError)` - If any document failed to index
    async fn bulk_index(&self, index: &str, documents: &[DocumentBody]) -> Result<(), SearchError>;

    /// Execute a query against one index and return its hits in engine order.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let request = SearchRequest::new(json!({"match": {"city": "Oslo"}}), 100, timeout);
    /// let hits = client.search("tdp_orders", &request).await?;
    /// println!("Found {} hits", hits.len());
    /// ```
    async fn search(&self, index: &str, request: &SearchRequest)
        -> Result<Vec<SearchHit>, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the cluster status is green or yellow
    /// * `Ok(false)` - If the cluster is red
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}

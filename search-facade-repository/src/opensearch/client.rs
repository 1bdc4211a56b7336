//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cat::CatIndicesParts,
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    BulkParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::index_config::index_settings;
use search_facade_shared::{DocumentBody, SearchHit, SearchRequest};

/// Username/password pair for clusters with basic authentication enabled.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// let timeout = Duration::from_secs(30);
/// let client = OpenSearchClient::new("http://localhost:9200", None, timeout).await?;
/// if !client.index_exists("tdp_orders").await? {
///     client.create_index("tdp_orders").await?;
/// }
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `auth` - Optional basic-auth credentials
    /// * `timeout` - Upper bound for every request sent through this client
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If connection setup fails
    pub async fn new(
        url: &str,
        auth: Option<BasicAuth>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .timeout(timeout);
        let authenticated = auth.is_some();
        if let Some(auth) = auth {
            builder = builder.auth(Credentials::Basic(auth.username, auth.password));
        }
        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %url,
            authenticated,
            timeout_ms = timeout.as_millis() as u64,
            "Created OpenSearch client"
        );

        Ok(Self { client })
    }

    /// Turn a non-success response into an error built by `wrap`.
    async fn check_status(
        response: Response,
        wrap: fn(String) -> SearchError,
        action: &str,
    ) -> Result<Response, SearchError> {
        let status = response.status_code();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %error_body, action, "Request failed");
        if status.as_u16() == 408 {
            return Err(SearchError::timeout(format!(
                "{} timed out with status {}",
                action, status
            )));
        }
        Err(wrap(format!(
            "{} failed with status {}: {}",
            action, status, error_body
        )))
    }

    /// Extract the hits from a search response body.
    fn parse_hits(body: &Value) -> Result<Vec<SearchHit>, SearchError> {
        let hits = body
            .get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(|h| h.as_array())
            .ok_or_else(|| SearchError::parse("Search response has no hits array"))?;

        hits.iter()
            .map(|hit| {
                serde_json::from_value(hit.clone()).map_err(|e| SearchError::parse(e.to_string()))
            })
            .collect()
    }

    /// Count the failed items reported in a bulk response body.
    fn bulk_failures(body: &Value) -> usize {
        if !body.get("errors").and_then(|e| e.as_bool()).unwrap_or(false) {
            return 0;
        }

        let failed = body
            .get("items")
            .and_then(|i| i.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.get("index").and_then(|i| i.get("error")).is_some())
                    .count()
            })
            .unwrap_or(0);

        // errors=true without readable item errors still fails the batch
        failed.max(1)
    }
}

/// Map a transport error, keeping timeouts distinguishable.
fn transport_error(err: opensearch::Error, wrap: fn(String) -> SearchError) -> SearchError {
    if err.is_timeout() {
        SearchError::timeout(err.to_string())
    } else {
        wrap(err.to_string())
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    async fn count_indices(&self, pattern: &str) -> Result<usize, SearchError> {
        let response = self
            .client
            .cat()
            .indices(CatIndicesParts::Index(&[pattern]))
            .h(&["index"])
            .s(&["index:desc"])
            .format("json")
            .send()
            .await
            .map_err(|e| transport_error(e, SearchError::MetadataError))?;

        let response =
            Self::check_status(response, SearchError::MetadataError, "Cat indices").await?;
        let indices: Vec<Value> = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        debug!(pattern = %pattern, count = indices.len(), "Counted indices");
        Ok(indices.len())
    }

    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| transport_error(e, SearchError::MetadataError))?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            408 => Err(SearchError::timeout(format!(
                "Index exists check for '{}' timed out",
                index
            ))),
            status => Err(SearchError::metadata(format!(
                "Index exists check for '{}' returned status {}",
                index, status
            ))),
        }
    }

    async fn create_index(&self, index: &str) -> Result<(), SearchError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(index_settings())
            .send()
            .await
            .map_err(|e| transport_error(e, SearchError::IndexCreationError))?;

        Self::check_status(response, SearchError::IndexCreationError, "Create index").await?;

        debug!(index = %index, "Index created");
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> Result<(), SearchError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| transport_error(e, SearchError::DeleteError))?;

        Self::check_status(response, SearchError::DeleteError, "Delete index").await?;

        debug!(index = %index, "Index deleted");
        Ok(())
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: &DocumentBody,
        timeout: Duration,
    ) -> Result<(), SearchError> {
        let timeout = format!("{}s", timeout.as_secs());

        let response = self
            .client
            .index(IndexParts::IndexId(index, id))
            .body(document)
            .timeout(&timeout)
            .error_trace(true)
            .send()
            .await
            .map_err(|e| transport_error(e, SearchError::IndexError))?;

        Self::check_status(response, SearchError::IndexError, "Index document").await?;

        debug!(index = %index, doc_id = %id, "Document indexed");
        Ok(())
    }

    async fn bulk_index(&self, index: &str, documents: &[DocumentBody]) -> Result<(), SearchError> {
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(documents.len() * 2);
        for document in documents {
            body.push(json!({"index": {}}).into());
            body.push(Value::Object(document.clone()).into());
        }

        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(e, SearchError::BulkIndexError))?;

        let response =
            Self::check_status(response, SearchError::BulkIndexError, "Bulk index").await?;
        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let failed = Self::bulk_failures(&response_body);
        if failed > 0 {
            error!(index = %index, failed, total = documents.len(), "Bulk index had failures");
            return Err(SearchError::bulk_index(format!(
                "{} of {} documents failed to index",
                failed,
                documents.len()
            )));
        }

        debug!(index = %index, count = documents.len(), "Bulk indexed documents");
        Ok(())
    }

    async fn search(
        &self,
        index: &str,
        request: &SearchRequest,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(json!({ "query": request.query }))
            .size(request.size as i64)
            .request_timeout(request.timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, SearchError::QueryError))?;

        let response = Self::check_status(response, SearchError::QueryError, "Search").await?;
        let response_body: Value = response
            .json()
            .await
            .map_err(|e| transport_error(e, SearchError::ParseError))?;

        let hits = Self::parse_hits(&response_body)?;
        debug!(index = %index, hits = hits.len(), "Search completed");
        Ok(hits)
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| transport_error(e, SearchError::ConnectionError))?;

        let health: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;
        let status = health
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");

        info!(status = %status, "OpenSearch cluster health");
        Ok(status == "green" || status == "yellow")
    }
}

//! Engine-neutral search request and hit types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::document::DocumentBody;

/// A single query to run against one index.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// The query clause, e.g. `{"match": {"name": "widget"}}`.
    pub query: Value,
    /// Maximum number of hits to return.
    pub size: usize,
    /// Client-side timeout for the request.
    pub timeout: Duration,
}

impl SearchRequest {
    pub fn new(query: Value, size: usize, timeout: Duration) -> Self {
        Self {
            query,
            size,
            timeout,
        }
    }
}

/// One hit returned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Engine document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Stored document body.
    #[serde(rename = "_source", default)]
    pub source: DocumentBody,
}

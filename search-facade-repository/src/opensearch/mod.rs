//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend, plus the query DSL builders the facade
//! sends through it.

mod client;
mod index_config;
pub mod queries;

pub use client::{BasicAuth, OpenSearchClient};
pub use index_config::{index_settings, NUMBER_OF_REPLICAS, NUMBER_OF_SHARDS};

//! # Search Facade Repository
//!
//! This crate provides the CRUD/search facade over a document search engine
//! together with the engine interface it delegates to. It includes
//! definitions for errors, interfaces, index-name rules, and a concrete
//! implementation for OpenSearch.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod naming;
pub mod opensearch;
pub mod tabular;
pub mod types;

pub use client::DocumentStoreClient;
pub use config::StoreConfig;
pub use errors::{OperationError, SearchError};
pub use interfaces::SearchEngineClient;
pub use opensearch::{BasicAuth, OpenSearchClient};
pub use types::{Operation, WriteOutcome};

//! Facade operation errors.
//!
//! Every failed facade operation is reported as one of these kinds. Each kind
//! maps to a fixed [`Status`] and renders to an [`Envelope`].

use search_facade_shared::{Envelope, Status};
use thiserror::Error;

use crate::errors::SearchError;
use crate::types::Operation;

/// Errors returned by [`DocumentStoreClient`](crate::DocumentStoreClient) operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The index name contains a disallowed character.
    #[error(
        "IndexName must not contain any special chars other than '_' or '-', {}",
        invalid_name_suffix(.operation, .index)
    )]
    InvalidIndexName { index: String, operation: Operation },

    /// The engine already holds the maximum number of prefixed indices.
    #[error(
        "Maximum limit(={max}) of indices has already been reached, not allowed to create anymore indices unless you delete some"
    )]
    IndexLimitReached { max: usize },

    /// The (normalized) index does not exist.
    #[error("{}", missing_index_message(.operation, .index))]
    IndexNotFound { index: String, operation: Operation },

    /// The search ran but returned no hits.
    #[error("No record {criteria} exists in index '{index}'")]
    NoMatches { index: String, criteria: String },

    /// The engine did not answer a search within the request timeout.
    #[error("Request timed out")]
    Timeout { index: String },

    /// Any other engine failure.
    #[error("{}", failure_message(.operation, .index))]
    Upstream {
        index: String,
        operation: Operation,
        #[source]
        source: SearchError,
    },

    /// Local input could not be read or parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl OperationError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Status reported for this error.
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidIndexName { .. } => Status::MethodNotAllowed,
            Self::IndexLimitReached { .. } => Status::NotAcceptable,
            Self::IndexNotFound {
                operation: Operation::Search,
                ..
            } => Status::NotFound,
            Self::IndexNotFound { .. } => Status::BadRequest,
            Self::NoMatches { .. } => Status::NotFound,
            Self::Timeout { .. } => Status::RequestTimeout,
            Self::Upstream { .. } => Status::NotFound,
            Self::InvalidInput(_) => Status::BadRequest,
        }
    }

    /// Render this error as a `{message, status}` envelope.
    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.to_string(), self.status())
    }
}

fn invalid_name_suffix(operation: &Operation, index: &str) -> String {
    match operation {
        Operation::CreateIndex => format!("index '{}' couldn't be created", index),
        Operation::DeleteIndex => format!("index '{}' couldn't be deleted", index),
        Operation::InsertDocument | Operation::BulkInsert => {
            format!("index '{}' couldn't index any record", index)
        }
        Operation::Search => format!("couldn't find any record from index '{}'", index),
    }
}

fn missing_index_message(operation: &Operation, index: &str) -> String {
    match operation {
        Operation::DeleteIndex => format!("Index '{}' does not exist, nothing to delete", index),
        Operation::InsertDocument | Operation::BulkInsert => {
            format!("'{}' doesn't exist, create this index to insert records", index)
        }
        Operation::CreateIndex | Operation::Search => format!("Index '{}' doesn't exist", index),
    }
}

fn failure_message(operation: &Operation, index: &str) -> String {
    match operation {
        Operation::CreateIndex => format!("Failed to create index: {}", index),
        Operation::DeleteIndex => format!("Failed to delete index: {}", index),
        Operation::InsertDocument => format!("Failed to load record into index '{}'", index),
        Operation::BulkInsert => format!("Failed to load records into index '{}'", index),
        Operation::Search => format!("Failed to search index '{}'", index),
    }
}

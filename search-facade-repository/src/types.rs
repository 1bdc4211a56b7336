//! Request and outcome types for facade operations.

use search_facade_shared::{Envelope, Status};
use std::fmt;

/// The facade operation a request belongs to.
///
/// Used to pick outcome messages and statuses, and as a structured log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateIndex,
    DeleteIndex,
    InsertDocument,
    BulkInsert,
    Search,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateIndex => "create_index",
            Operation::DeleteIndex => "delete_index",
            Operation::InsertDocument => "insert_document",
            Operation::BulkInsert => "bulk_insert",
            Operation::Search => "search",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful outcome of a write operation.
///
/// `IndexAlreadyExists` is a success: nothing was created, but nothing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    IndexCreated { index: String },
    IndexAlreadyExists { index: String },
    IndexDeleted { index: String },
    DocumentInserted { index: String, id: String },
    DocumentsLoaded { index: String, count: usize },
}

impl WriteOutcome {
    /// The normalized index the write applied to.
    pub fn index(&self) -> &str {
        match self {
            WriteOutcome::IndexCreated { index }
            | WriteOutcome::IndexAlreadyExists { index }
            | WriteOutcome::IndexDeleted { index }
            | WriteOutcome::DocumentInserted { index, .. }
            | WriteOutcome::DocumentsLoaded { index, .. } => index,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            WriteOutcome::IndexAlreadyExists { .. } => Status::AlreadyReported,
            _ => Status::Ok,
        }
    }

    pub fn message(&self) -> String {
        match self {
            WriteOutcome::IndexCreated { index } => {
                format!("Successfully created index: {}", index)
            }
            WriteOutcome::IndexAlreadyExists { index } => {
                format!("Not created, index '{}' already exists", index)
            }
            WriteOutcome::IndexDeleted { index } => {
                format!("Successfully deleted index: {}", index)
            }
            WriteOutcome::DocumentInserted { index, .. } => {
                format!("Record successfully loaded into index '{}'", index)
            }
            WriteOutcome::DocumentsLoaded { index, .. } => {
                format!("Records successfully loaded into index '{}'", index)
            }
        }
    }

    /// Render this outcome as a `{message, status}` envelope.
    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.message(), self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_is_reported_not_failed() {
        let outcome = WriteOutcome::IndexAlreadyExists {
            index: "tdp_orders".to_string(),
        };

        assert_eq!(outcome.status(), Status::AlreadyReported);
        assert!(outcome.status().is_success());
        assert_eq!(
            outcome.envelope().message,
            "Not created, index 'tdp_orders' already exists"
        );
    }

    #[test]
    fn test_write_outcome_index() {
        let outcome = WriteOutcome::DocumentsLoaded {
            index: "tdp_orders".to_string(),
            count: 3,
        };

        assert_eq!(outcome.index(), "tdp_orders");
        assert_eq!(outcome.status(), Status::Ok);
    }
}

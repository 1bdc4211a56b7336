//! Error types for the search facade repository.

mod operation_error;
mod search_error;

pub use operation_error::OperationError;
pub use search_error::SearchError;

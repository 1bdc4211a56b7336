//! # Search Facade Shared
//!
//! Types shared between the repository crate and the binary: the status
//! enumeration, the `{message, status}` envelope, document bodies and the
//! engine-neutral search request/hit shapes.

mod document;
mod envelope;
mod search;
mod status;

pub use document::{field_or_null, DocumentBody};
pub use envelope::Envelope;
pub use search::{SearchHit, SearchRequest};
pub use status::{Status, UnknownStatus};

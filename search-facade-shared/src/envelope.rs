//! The `{message, status}` outcome envelope.

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Uniform report for operations that do not return data, and for every
/// failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Human-readable description of the outcome.
    pub message: String,
    /// Outcome status, serialized as an integer code.
    pub status: Status,
}

impl Envelope {
    /// Create an envelope with the given status.
    pub fn new(message: impl Into<String>, status: Status) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Create a success envelope.
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(message, Status::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_serializes_status_as_integer() {
        let envelope = Envelope::new("Request timed out", Status::RequestTimeout);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value, json!({"message": "Request timed out", "status": 408}));
    }

    #[test]
    fn test_envelope_deserializes() {
        let envelope: Envelope =
            serde_json::from_value(json!({"message": "done", "status": 200})).unwrap();

        assert_eq!(envelope, Envelope::ok("done"));
    }

    #[test]
    fn test_envelope_rejects_unknown_status() {
        let result: Result<Envelope, _> =
            serde_json::from_value(json!({"message": "boom", "status": 500}));
        assert!(result.is_err());
    }
}

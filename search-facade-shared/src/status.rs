//! Outcome status codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status codes reported in an [`Envelope`](crate::Envelope).
///
/// Values follow their HTTP namesakes and serialize as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    Ok,
    AlreadyReported,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    RequestTimeout,
}

impl Status {
    /// Numeric code of this status.
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::AlreadyReported => 208,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::NotAcceptable => 406,
            Status::RequestTimeout => 408,
        }
    }

    /// Whether the status reports a completed operation.
    pub fn is_success(self) -> bool {
        matches!(self, Status::Ok | Status::AlreadyReported)
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

/// A numeric code outside the [`Status`] enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus(pub u16);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status code {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl TryFrom<u16> for Status {
    type Error = UnknownStatus;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(Status::Ok),
            208 => Ok(Status::AlreadyReported),
            400 => Ok(Status::BadRequest),
            404 => Ok(Status::NotFound),
            405 => Ok(Status::MethodNotAllowed),
            406 => Ok(Status::NotAcceptable),
            408 => Ok(Status::RequestTimeout),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip_through_u16() {
        for status in [
            Status::Ok,
            Status::AlreadyReported,
            Status::BadRequest,
            Status::NotFound,
            Status::MethodNotAllowed,
            Status::NotAcceptable,
            Status::RequestTimeout,
        ] {
            assert_eq!(Status::try_from(status.code()), Ok(status));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(Status::try_from(500), Err(UnknownStatus(500)));
    }

    #[test]
    fn test_success_statuses() {
        assert!(Status::Ok.is_success());
        assert!(Status::AlreadyReported.is_success());
        assert!(!Status::RequestTimeout.is_success());
    }
}

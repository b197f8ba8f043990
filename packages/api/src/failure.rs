//! # Route failures: what a loader or action hands to the error boundary
//!
//! [`RouteFailure`] is the sum type the page renderer dispatches on:
//!
//! - [`RouteFailure::Status`] carries an HTTP-like status code and a message meant
//!   for the user (e.g. `404 Remark not found`).
//! - [`RouteFailure::Unexpected`] is anything else. Its text is for operator logs
//!   only and is never rendered.
//!
//! Store errors convert with `?`: a missing record becomes a 404, every other
//! [`StoreError`] is unexpected. The [`invariant`] / [`ensure_found`] helpers turn a
//! failed condition into a status failure in one line.

use serde::{Deserialize, Serialize};
use store::StoreError;
use thiserror::Error;

pub const BAD_REQUEST: u16 = 400;
pub const NOT_FOUND: u16 = 404;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// A failure with a status code and a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFailure {
    pub status: u16,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteFailure {
    #[error("{} {}", .0.status, .0.message)]
    Status(StatusFailure),
    #[error("{0}")]
    Unexpected(String),
}

impl RouteFailure {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status(StatusFailure {
            status,
            message: message.into(),
        })
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::status(NOT_FOUND, message)
    }

    pub fn unexpected(error: impl std::fmt::Display) -> Self {
        Self::Unexpected(error.to_string())
    }

    /// Status code of a classified failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(failure) => Some(failure.status),
            Self::Unexpected(_) => None,
        }
    }

    /// Status the HTTP response should carry.
    pub fn response_status(&self) -> u16 {
        self.status_code().unwrap_or(INTERNAL_SERVER_ERROR)
    }
}

impl From<StoreError> for RouteFailure {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { model, .. } => {
                let mut message = model.to_string();
                if let Some(first) = message.get_mut(..1) {
                    first.make_ascii_uppercase();
                }
                Self::not_found(format!("{message} not found"))
            }
            other => Self::unexpected(other),
        }
    }
}

/// Fail with a 400 and `message` unless `condition` holds.
pub fn invariant(condition: bool, message: impl Into<String>) -> Result<(), RouteFailure> {
    invariant_with_status(condition, message, BAD_REQUEST)
}

/// Fail with `status` and `message` unless `condition` holds.
pub fn invariant_with_status(
    condition: bool,
    message: impl Into<String>,
    status: u16,
) -> Result<(), RouteFailure> {
    if condition {
        Ok(())
    } else {
        Err(RouteFailure::status(status, message))
    }
}

/// Unwrap a lookup result or fail with a 404 and `message`.
pub fn ensure_found<T>(value: Option<T>, message: impl Into<String>) -> Result<T, RouteFailure> {
    value.ok_or_else(|| RouteFailure::not_found(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Model;

    #[test]
    fn test_store_not_found_is_a_404() {
        let failure = RouteFailure::from(StoreError::NotFound {
            model: Model::Remark,
            key: "00000000".to_string(),
        });
        assert_eq!(failure, RouteFailure::not_found("Remark not found"));
        assert_eq!(failure.status_code(), Some(404));
        assert_eq!(failure.to_string(), "404 Remark not found");
    }

    #[test]
    fn test_other_store_errors_are_unexpected() {
        let failure = RouteFailure::from(StoreError::DuplicateKey {
            model: Model::User,
            key: "cafebabe".to_string(),
        });
        assert!(matches!(failure, RouteFailure::Unexpected(_)));
        assert_eq!(failure.status_code(), None);
        assert_eq!(failure.response_status(), 500);
    }

    #[test]
    fn test_invariant_helpers() {
        assert!(invariant(true, "unused").is_ok());
        assert_eq!(
            invariant(false, "value must be a string"),
            Err(RouteFailure::status(400, "value must be a string"))
        );
        assert_eq!(
            invariant_with_status(false, "gone", 410).unwrap_err().status_code(),
            Some(410)
        );
        assert_eq!(ensure_found(Some(3), "missing"), Ok(3));
        assert_eq!(
            ensure_found::<u8>(None, "Remark not found"),
            Err(RouteFailure::not_found("Remark not found"))
        );
    }
}

//! Common error types used across the workspace.
//!
//! Each failure class maps to one type: storage access, contact-message
//! validation, and resume upload validation. Malformed optional data (a bad
//! href, a non-numeric percent) is never an error; it reads as absent.

use thiserror::Error;

/// Raised when the preference store cannot be read or written (quota
/// exceeded, privacy mode, storage disabled).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("preference store unavailable: {reason}")]
pub struct StoreError {
    /// Description of the underlying failure.
    pub reason: String,
}

impl StoreError {
    /// Build an error from any displayable failure cause.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Raised when a contact message fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    #[error("required field `{field}` is empty")]
    MissingField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The email field does not look like an address.
    #[error("`{value}` does not look like an email address")]
    InvalidEmail {
        /// The rejected input.
        value: String,
    },
}

/// Raised when an uploaded resume is not a PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("only PDF files are supported")]
pub struct NotPdfError;

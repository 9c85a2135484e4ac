//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Classified**: Each variant maps to exactly one status code
//!
//! [`ApiError`] is the response body a transport sends back for an error.

use serde::{Deserialize, Serialize};

use crate::types::format_timestamp;

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Status |
/// |----------|----------|--------|
/// | Not Found | `WidgetNotFound` | 404 |
/// | Validation | `InvalidInput`, `Serialization` | 400 |
/// | Constraint | `Overflow` | 409 |
/// | System | `Io`, `Internal` | 500 |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// No widget with this id
    #[error("Widget not found for id: {id}")]
    WidgetNotFound {
        /// The id as the caller supplied it
        id: String,
    },

    // ==================== Validation Errors ====================
    /// Input failed validation
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Every violation, joined by "; "
        reason: String,
    },

    /// Malformed request payload
    #[error("serialization error: {reason}")]
    Serialization {
        /// Parser message
        reason: String,
    },

    // ==================== Constraint Errors ====================
    /// z-index arithmetic would overflow
    #[error("overflow: {reason}")]
    Overflow {
        /// Description of the overflowing placement
        reason: String,
    },

    // ==================== System Errors ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying error message
        reason: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

impl Error {
    /// Status code a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::WidgetNotFound { .. } => 404,
            Error::InvalidInput { .. } | Error::Serialization { .. } => 400,
            Error::Overflow { .. } => 409,
            Error::Io { .. } | Error::Internal { .. } => 500,
        }
    }

    /// Standard reason phrase for [`status_code`](Self::status_code).
    pub fn status_text(&self) -> &'static str {
        match self.status_code() {
            404 => "Not Found",
            400 => "Bad Request",
            409 => "Conflict",
            _ => "Internal Server Error",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Numeric status code
    pub status: u16,
    /// Reason phrase for `status`
    pub error: String,
    /// When the error was produced, `dd-MM-yyyy HH:mm:ss` UTC
    pub timestamp: String,
    /// Human-readable message
    pub message: String,
    /// Structured form of the error, for debugging
    pub debug_message: String,
}

impl ApiError {
    /// Build the response body for `err`, stamped with the current time.
    pub fn from_error(err: &Error) -> Self {
        Self {
            status: err.status_code(),
            error: err.status_text().to_string(),
            timestamp: format_timestamp(chrono::Utc::now()),
            message: err.to_string(),
            debug_message: format!("{:?}", err),
        }
    }
}

impl From<&Error> for ApiError {
    fn from(err: &Error) -> Self {
        Self::from_error(err)
    }
}

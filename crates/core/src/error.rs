//! Error types for the widget store
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//! CAS contention inside the store is resolved by retrying and never shows up here.

use crate::types::WidgetId;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the widget store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No widget with this id exists in the snapshot the operation read
    #[error("Widget not found for id: {0}")]
    WidgetNotFound(WidgetId),

    /// Placing a widget would push a z-index past `i32::MAX`
    #[error("z-index overflow: cannot place a widget above z = {z}")]
    ZIndexOverflow {
        /// Highest z-index involved when the overflow was detected
        z: i32,
    },
}

impl Error {
    /// Returns true if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::WidgetNotFound(_))
    }
}

//! Error conversion from store error types.
//!
//! This module provides conversions from [`widgetboard_core::Error`] to the
//! executor's [`Error`] type.

use crate::Error;
use widgetboard_core::Error as CoreError;

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::WidgetNotFound(id) => Error::WidgetNotFound { id: id.to_string() },
            CoreError::ZIndexOverflow { .. } => Error::Overflow {
                reason: err.to_string(),
            },
        }
    }
}

/// Convert a store result into an executor result.
pub(crate) fn convert_result<T>(r: widgetboard_core::Result<T>) -> crate::Result<T> {
    r.map_err(Error::from)
}

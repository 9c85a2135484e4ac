//! Core types for Widgetboard
//!
//! This crate defines the foundational types used throughout the system:
//! - WidgetId: Unique identifier for a widget
//! - Widget: Immutable widget record (geometry, z-index, last-modified time)
//! - WidgetSpec: Argument set for creating or replacing a widget
//! - Error: Error type for store operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;
pub mod widget;

pub use error::{Error, Result};
pub use types::WidgetId;
pub use widget::{Widget, WidgetSpec};

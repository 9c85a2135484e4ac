//! # Widgetboard Executor
//!
//! The request layer in front of the widget store.
//!
//! It provides:
//! - [`Board`] - Typed interface: list, get, create, update, delete
//! - [`Command`]/[`Output`] - Serializable command interface (for transports)
//! - [`Error`]/[`ApiError`] - Structured errors with status codes
//! - [`BoardConfig`] - `widgetboard.toml` configuration
//!
//! ## Quick Start
//!
//! ```
//! use widgetboard_executor::{Board, WidgetInput};
//!
//! let board = Board::new();
//! let a = board.create(WidgetInput::new(0, 0, Some(3), 10, 10))?;
//! let b = board.create(WidgetInput::new(5, 5, Some(3), 10, 10))?;
//!
//! let zs: Vec<i32> = board.list()?.iter().map(|w| w.z).collect();
//! assert_eq!(zs, vec![3, 4]);
//! assert_eq!(board.get(&a.id)?.z, 4);
//! # let _ = b;
//! # Ok::<(), widgetboard_executor::Error>(())
//! ```
//!
//! ## Input validation
//!
//! The store trusts its inputs. Everything arriving through a [`Command`] is
//! checked here first: coordinates and size are mandatory, width and height
//! must be positive, and ids must be well-formed.

#![warn(missing_docs)]

mod api;
pub(crate) mod bridge;
mod command;
mod config;
mod convert;
mod error;
mod executor;
mod output;
mod types;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::Board;
pub use bridge::validate_input;
pub use command::Command;
pub use config::{BoardConfig, CONFIG_FILE_NAME};
pub use error::{ApiError, Error};
pub use executor::Executor;
pub use output::Output;
pub use types::*;

// Re-export store-level types so users don't need the lower crates directly
pub use widgetboard_core::{Widget, WidgetId, WidgetSpec};
pub use widgetboard_storage::{StoreConfig, StoreStats, WidgetStore};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;

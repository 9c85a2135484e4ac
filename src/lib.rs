//! Widgetboard - lock-free, z-ordered in-memory widget board
//!
//! A board holds rectangular widgets (position, size, z-index). Writers never
//! block each other or readers: every write publishes a new immutable
//! snapshot with a compare-and-swap, retrying on conflict.
//!
//! # Quick Start
//!
//! ```
//! use widgetboard::{Board, WidgetInput};
//!
//! let board = Board::new();
//! let w = board.create(WidgetInput::new(0, 0, None, 10, 10))?;
//! assert_eq!(w.z, 1);
//!
//! assert!(board.delete(&w.id)?);
//! assert!(board.list()?.is_empty());
//! # Ok::<(), widgetboard::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which provides a command-based
//! API. [`Board`] is the typed interface over it. The store itself is
//! [`WidgetStore`].

// Re-export the public API from widgetboard-executor
pub use widgetboard_executor::*;

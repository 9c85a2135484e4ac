//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from a test's main.rs.

#![allow(dead_code)]

use std::sync::Arc;

pub use widgetboard::{Board, WidgetInfo, WidgetInput, WidgetStore};

/// A board over its own private store.
pub fn board() -> Board {
    Board::from_store(Arc::new(WidgetStore::new()))
}

/// A 10x10 widget at the origin.
pub fn square(z: Option<i32>) -> WidgetInput {
    WidgetInput::new(0, 0, z, 10, 10)
}

/// Z-indices of the board's widgets, bottom to top.
pub fn zs(board: &Board) -> Vec<i32> {
    board.list().unwrap().iter().map(|w| w.z).collect()
}

/// Ids of the board's widgets, bottom to top.
pub fn ids(board: &Board) -> Vec<String> {
    board.list().unwrap().into_iter().map(|w| w.id).collect()
}

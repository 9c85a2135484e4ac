//! Storage layer for Widgetboard
//!
//! This crate implements the ordered widget store with:
//! - Snapshot: immutable, z-ordered view of every widget
//! - placement: default z-index policy and the cascading shift algorithm
//! - WidgetStore: lock-free store publishing snapshots through compare-and-swap
//! - StoreConfig / StoreStats: tuning knobs and contention counters
//!
//! # Concurrency
//!
//! Readers load the current `Arc<Snapshot>` and never block. Writers compute a
//! new snapshot from the one they read and publish it only if nobody else
//! published in between; otherwise they recompute against the fresh snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod placement;
pub mod snapshot;
pub mod store;

pub use config::StoreConfig;
pub use snapshot::Snapshot;
pub use store::{StoreStats, WidgetStore};

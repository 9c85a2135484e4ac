//! Board Integration Tests
//!
//! End-to-end behaviour of the public `widgetboard` API.

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod facade;
mod global;

//! Command handlers.
//!
//! Each handler validates its arguments, calls into the store and converts
//! the result to an [`Output`](crate::Output).

pub mod widget;

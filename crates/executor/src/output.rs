//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant; see the table on
//! [`Command`](crate::Command).

use serde::{Deserialize, Serialize};

use crate::types::WidgetInfo;

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Ping response
    Pong {
        /// Crate version
        version: String,
    },

    /// A single widget (get, create, update)
    Widget(WidgetInfo),

    /// Widgets in ascending z order (list)
    Widgets(Vec<WidgetInfo>),

    /// Boolean result (delete)
    Bool(bool),
}

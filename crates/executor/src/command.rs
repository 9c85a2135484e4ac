//! Command enum defining all Widgetboard operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for any transport
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};

use crate::types::WidgetInput;

/// A command is a self-contained, serializable operation.
///
/// | Command | Returns | Success status |
/// |---------|---------|----------------|
/// | `Ping` | `Output::Pong` | 200 |
/// | `WidgetList` | `Output::Widgets` | 200 |
/// | `WidgetGet` | `Output::Widget` | 200 |
/// | `WidgetCreate` | `Output::Widget` | 201 |
/// | `WidgetUpdate` | `Output::Widget` | 200 |
/// | `WidgetDelete` | `Output::Bool` | 200 |
///
/// # Example
///
/// ```
/// use widgetboard_executor::{Command, WidgetInput};
///
/// let cmd: Command = serde_json::from_str(
///     r#"{"WidgetCreate":{"widget":{"x":1,"y":2,"width":10,"height":5}}}"#,
/// ).unwrap();
/// assert_eq!(cmd, Command::WidgetCreate {
///     widget: WidgetInput::new(1, 2, None, 10, 5),
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Liveness check.
    Ping,

    /// All widgets in ascending z order.
    WidgetList,

    /// One widget by id.
    WidgetGet {
        /// Widget id
        id: String,
    },

    /// Create a widget; the id is generated.
    WidgetCreate {
        /// Widget fields
        widget: WidgetInput,
    },

    /// Replace an existing widget.
    WidgetUpdate {
        /// Widget id
        id: String,
        /// New widget fields
        widget: WidgetInput,
    },

    /// Delete a widget.
    WidgetDelete {
        /// Widget id
        id: String,
    },
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "ping",
            Command::WidgetList => "widget_list",
            Command::WidgetGet { .. } => "widget_get",
            Command::WidgetCreate { .. } => "widget_create",
            Command::WidgetUpdate { .. } => "widget_update",
            Command::WidgetDelete { .. } => "widget_delete",
        }
    }

    /// Status code a transport should answer with on success.
    pub fn success_status(&self) -> u16 {
        match self {
            Command::WidgetCreate { .. } => 201,
            _ => 200,
        }
    }
}

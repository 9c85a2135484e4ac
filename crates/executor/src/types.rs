//! Request and response payload types.
//!
//! These are the wire shapes of the request layer. They are deliberately
//! looser than the store types: [`WidgetInput`] accepts missing fields so that
//! validation can report every problem at once, and [`WidgetInfo`] carries the
//! id and timestamp as strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use widgetboard_core::Widget;

/// Format used for every timestamp in responses (`dd-MM-yyyy HH:mm:ss`, UTC).
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Render a timestamp the way responses carry it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Widget fields as supplied by a caller for create and update.
///
/// Every field is optional on the wire; [`validate_input`](crate::validate_input)
/// decides which ones are actually required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WidgetInput {
    /// X coordinate (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    /// Y coordinate (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    /// Stacking order; omitted means "on top"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    /// Width (required, positive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    /// Height (required, positive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl WidgetInput {
    /// Input with every mandatory field present.
    pub fn new(x: i32, y: i32, z: Option<i32>, width: i32, height: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z,
            width: Some(width),
            height: Some(height),
        }
    }
}

/// A stored widget as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInfo {
    /// Widget id (UUID string)
    pub id: String,
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Stacking order
    pub z: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
    /// Time of the last change, `dd-MM-yyyy HH:mm:ss` UTC
    pub last_modified: String,
}

impl From<&Widget> for WidgetInfo {
    fn from(w: &Widget) -> Self {
        Self {
            id: w.id().to_string(),
            x: w.x(),
            y: w.y(),
            z: w.z(),
            width: w.width(),
            height: w.height(),
            last_modified: format_timestamp(w.last_modified()),
        }
    }
}

impl From<Widget> for WidgetInfo {
    fn from(w: Widget) -> Self {
        Self::from(&w)
    }
}

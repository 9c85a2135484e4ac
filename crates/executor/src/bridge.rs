//! Bridge module: conversions between wire types and store types.
//!
//! - [`parse_widget_id`]: string id → `WidgetId`
//! - [`validate_input`]: `WidgetInput` → `WidgetSpec`, collecting every violation
//! - [`to_widget_info`]: `Widget` → `WidgetInfo`

use widgetboard_core::{Widget, WidgetId, WidgetSpec};

use crate::types::{WidgetInfo, WidgetInput};
use crate::{Error, Result};

/// Parse a caller-supplied id.
///
/// A string that is not a UUID cannot name any stored widget, so it is
/// reported as not found rather than as invalid input.
pub(crate) fn parse_widget_id(id: &str) -> Result<WidgetId> {
    WidgetId::from_string(id).ok_or_else(|| Error::WidgetNotFound { id: id.to_string() })
}

fn require(value: Option<i32>, name: &str, violations: &mut Vec<String>) -> i32 {
    value.unwrap_or_else(|| {
        violations.push(format!("{} is a mandatory param", name));
        0
    })
}

fn require_positive(value: Option<i32>, name: &str, violations: &mut Vec<String>) -> i32 {
    match value {
        Some(v) if v > 0 => v,
        Some(v) => {
            violations.push(format!("{} should be a positive integer", name));
            v
        }
        None => require(None, name, violations),
    }
}

/// Validate caller input and build the store's argument set.
///
/// # Errors
///
/// `InvalidInput` listing every violation in field order, joined by `"; "`.
pub fn validate_input(input: &WidgetInput) -> Result<WidgetSpec> {
    let mut violations = Vec::new();
    let x = require(input.x, "X", &mut violations);
    let y = require(input.y, "Y", &mut violations);
    let width = require_positive(input.width, "Width", &mut violations);
    let height = require_positive(input.height, "Height", &mut violations);

    if !violations.is_empty() {
        return Err(Error::InvalidInput {
            reason: violations.join("; "),
        });
    }

    Ok(WidgetSpec {
        x,
        y,
        z: input.z,
        width,
        height,
    })
}

/// Convert a stored widget into its response shape.
pub(crate) fn to_widget_info(w: &Widget) -> WidgetInfo {
    WidgetInfo::from(w)
}

//! Widget record and upsert argument types
//!
//! A [`Widget`] is an immutable value: once constructed, none of its fields
//! change. Every create, update or z-shift produces a new record that replaces
//! the previous one under the same [`WidgetId`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::WidgetId;

/// A rectangular widget positioned on the canvas
///
/// ## Invariants
///
/// - `id` is fixed for the widget's lifetime
/// - `last_modified` is the moment this record (not the widget) was built
/// - Fields are private; there is no way to mutate a record in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    id: WidgetId,
    x: i32,
    y: i32,
    z: i32,
    width: i32,
    height: i32,
    last_modified: DateTime<Utc>,
}

impl Widget {
    /// Build a widget record stamped with the current time
    ///
    /// A fresh id is generated when `id` is `None`.
    pub fn new(id: Option<WidgetId>, x: i32, y: i32, z: i32, width: i32, height: i32) -> Self {
        Self::at(id.unwrap_or_default(), x, y, z, width, height, Utc::now())
    }

    /// Build a widget record with an explicit timestamp
    pub fn at(
        id: WidgetId,
        x: i32,
        y: i32,
        z: i32,
        width: i32,
        height: i32,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            x,
            y,
            z,
            width,
            height,
            last_modified,
        }
    }

    /// Build the record described by `spec`, resolved to stacking order `z`
    pub fn from_spec(id: Option<WidgetId>, spec: &WidgetSpec, z: i32) -> Self {
        Self::new(id, spec.x, spec.y, z, spec.width, spec.height)
    }

    /// A copy of this widget moved to stacking order `z`, stamped `at`
    pub fn with_z(&self, z: i32, at: DateTime<Utc>) -> Self {
        Self {
            z,
            last_modified: at,
            ..*self
        }
    }

    /// Widget identifier
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// X coordinate of the top-left corner
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate of the top-left corner
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Stacking order; higher values are drawn on top
    #[inline]
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Width in canvas units
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in canvas units
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// When this record was built
    #[inline]
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }
}

/// Arguments for creating or replacing a widget
///
/// `z` is optional: when absent the store places the widget on top of every
/// other widget. Width and height are trusted to be positive; the request
/// layer checks them before a spec is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// X coordinate of the top-left corner
    pub x: i32,
    /// Y coordinate of the top-left corner
    pub y: i32,
    /// Requested stacking order, or `None` for "on top"
    pub z: Option<i32>,
    /// Width in canvas units
    pub width: i32,
    /// Height in canvas units
    pub height: i32,
}

impl WidgetSpec {
    /// Create a spec with an explicit z-index
    pub fn new(x: i32, y: i32, z: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            width,
            height,
        }
    }

    /// Create a spec that lets the store choose the z-index
    pub fn on_top(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            z: None,
            width,
            height,
        }
    }
}

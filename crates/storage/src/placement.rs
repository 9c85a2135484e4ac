//! Z-index placement
//!
//! Pure functions that turn one snapshot plus a widget into the next snapshot.
//! The store runs them inside its retry loop, so they must not depend on
//! anything but their arguments.
//!
//! # Default z-index
//!
//! A widget without a requested z goes on top: one above the highest z among
//! all *other* widgets, or 1 on an otherwise empty board. Excluding the widget
//! being replaced means an update without z always promotes it to the top.
//!
//! # Cascading shift
//!
//! Inserting at an occupied z pushes the occupant up by one, which may collide
//! with the next widget, and so on. Only the unbroken run of consecutive z
//! values starting at the collision point moves:
//!
//! ```text
//! before:  A(3) B(4) C(6)      insert N at 3
//! after:   N(3) A(4) B(5) C(6)
//! ```
//!
//! C keeps z = 6 because the run stopped at the gap between 4 and 6.

use widgetboard_core::{Error, Result, Widget, WidgetId, WidgetSpec};

use crate::snapshot::Snapshot;

/// z-index assigned to the first widget on an empty board
pub const BASE_Z: i32 = 1;

/// The z-index a widget without an explicit z should receive
///
/// `exclude` is the id being replaced, if any; its current z is ignored.
pub fn default_z(snapshot: &Snapshot, exclude: Option<&WidgetId>) -> Result<i32> {
    let topmost = snapshot
        .iter()
        .rev()
        .find(|w| Some(&w.id()) != exclude);

    match topmost {
        None => Ok(BASE_Z),
        Some(top) => top
            .z()
            .checked_add(1)
            .ok_or(Error::ZIndexOverflow { z: top.z() }),
    }
}

/// Build the candidate record for an upsert against `snapshot`
pub fn resolve(snapshot: &Snapshot, id: Option<WidgetId>, spec: &WidgetSpec) -> Result<Widget> {
    let z = match spec.z {
        Some(z) => z,
        None => default_z(snapshot, id.as_ref())?,
    };
    Ok(Widget::from_spec(id, spec, z))
}

/// The snapshot that results from storing `candidate` into `snapshot`
///
/// Any previous version of the candidate's id is dropped first. Widgets
/// pushed up by the cascade are rebuilt with the candidate's timestamp.
pub fn place(snapshot: &Snapshot, candidate: Widget) -> Result<Snapshot> {
    let target = candidate.z();
    let stamp = candidate.last_modified();

    let mut placed = Vec::with_capacity(snapshot.len() + 1);
    let mut inserted = false;
    // Some(z) while shifting: the z most recently assigned by the cascade.
    let mut shifting: Option<i32> = None;

    // With the old version filtered out, the record that triggers insertion
    // can never share the candidate's id.
    for widget in snapshot.iter().filter(|w| w.id() != candidate.id()) {
        if !inserted && widget.z() >= target {
            placed.push(candidate);
            inserted = true;
            if widget.z() == target {
                shifting = Some(target);
            }
        }

        match shifting {
            Some(occupied) if widget.z() == occupied => {
                let next = occupied
                    .checked_add(1)
                    .ok_or(Error::ZIndexOverflow { z: occupied })?;
                placed.push(widget.with_z(next, stamp));
                shifting = Some(next);
            }
            Some(_) => {
                shifting = None;
                placed.push(*widget);
            }
            None => placed.push(*widget),
        }
    }

    if !inserted {
        placed.push(candidate);
    }

    Ok(Snapshot::from_ordered(placed))
}

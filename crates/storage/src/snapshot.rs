//! Snapshot: immutable, z-ordered view of the board
//!
//! A snapshot holds every widget sorted ascending by z together with an
//! id → position index. Snapshots are never modified after construction;
//! writers build a new one and publish it through the store.
//!
//! # Invariants
//!
//! - z values are pairwise distinct
//! - `iter()` yields widgets in strictly ascending z order
//! - `positions[id]` is the index of that widget in `widgets`

use rustc_hash::FxHashMap;

use widgetboard_core::{Widget, WidgetId};

/// Point-in-time, read-only view of all widgets
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Widgets sorted ascending by z
    widgets: Vec<Widget>,
    /// WidgetId → index into `widgets`
    positions: FxHashMap<WidgetId, usize>,
}

impl Snapshot {
    /// The snapshot of an empty board
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from widgets already sorted ascending by distinct z
    ///
    /// Callers in this crate guarantee the ordering; it is re-checked in debug
    /// builds.
    pub(crate) fn from_ordered(widgets: Vec<Widget>) -> Self {
        let positions = widgets
            .iter()
            .enumerate()
            .map(|(idx, w)| (w.id(), idx))
            .collect();
        let snapshot = Self { widgets, positions };
        debug_assert!(
            snapshot.is_strictly_ordered(),
            "snapshot built with duplicate or unordered z values"
        );
        snapshot
    }

    /// Number of widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// True if the board holds no widgets
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Iterate widgets in ascending z order
    pub fn iter(&self) -> std::slice::Iter<'_, Widget> {
        self.widgets.iter()
    }

    /// Widgets in ascending z order
    pub fn as_slice(&self) -> &[Widget] {
        &self.widgets
    }

    /// Owned copy of the widgets in ascending z order
    pub fn to_vec(&self) -> Vec<Widget> {
        self.widgets.clone()
    }

    /// Look up a widget by id
    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.positions.get(id).map(|&idx| &self.widgets[idx])
    }

    /// True if a widget with this id exists
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.positions.contains_key(id)
    }

    /// The topmost widget, if any
    pub fn top(&self) -> Option<&Widget> {
        self.widgets.last()
    }

    /// Copy of this snapshot without the widget `id`
    ///
    /// Returns `None` if `id` is not present. Remaining widgets keep their z
    /// values; the gap left behind is not compacted.
    pub fn without(&self, id: &WidgetId) -> Option<Self> {
        let &idx = self.positions.get(id)?;
        let mut widgets = Vec::with_capacity(self.widgets.len() - 1);
        widgets.extend_from_slice(&self.widgets[..idx]);
        widgets.extend_from_slice(&self.widgets[idx + 1..]);
        Some(Self::from_ordered(widgets))
    }

    /// Check every snapshot invariant
    ///
    /// True when z values strictly ascend and the id index matches the
    /// sequence exactly.
    pub fn is_strictly_ordered(&self) -> bool {
        let ascending = self.widgets.windows(2).all(|pair| pair[0].z() < pair[1].z());
        let indexed = self.positions.len() == self.widgets.len()
            && self
                .widgets
                .iter()
                .enumerate()
                .all(|(idx, w)| self.positions.get(&w.id()) == Some(&idx));
        ascending && indexed
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Widget;
    type IntoIter = std::slice::Iter<'a, Widget>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! WidgetStore: lock-free ordered widget store
//!
//! The store holds a single `ArcSwap<Snapshot>`. Every write follows the same
//! optimistic protocol:
//!
//! 1. Load the current snapshot
//! 2. Compute the next snapshot from it (pure; may fail with `WidgetNotFound`)
//! 3. Compare-and-swap the shared pointer
//! 4. If another writer published first, go back to 1
//!
//! Reads load the pointer once and never retry. A reader holding an old
//! `Arc<Snapshot>` keeps seeing that consistent prior state.
//!
//! # Invariants
//!
//! - Concurrent writes are linearizable: no successful write is lost
//! - Existence checks run against the snapshot of the attempt that commits,
//!   so a widget deleted concurrently makes an update fail with
//!   `WidgetNotFound` instead of resurrecting it

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use tracing::{debug, trace, warn};

use widgetboard_core::{Error, Result, Widget, WidgetId, WidgetSpec};

use crate::config::StoreConfig;
use crate::placement;
use crate::snapshot::Snapshot;

static GLOBAL: Lazy<Arc<WidgetStore>> = Lazy::new(|| Arc::new(WidgetStore::new()));

/// Point-in-time copy of the store's write counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    /// Snapshots successfully published
    pub commits: u64,
    /// CAS attempts that lost a race and were retried
    pub conflicts: u64,
}

#[derive(Debug, Default)]
struct Counters {
    commits: AtomicU64,
    conflicts: AtomicU64,
}

/// Concurrent, z-ordered widget store
///
/// `WidgetStore` is `Send + Sync`; share it behind an `Arc` or use
/// [`WidgetStore::global`] for the process-wide instance.
///
/// # Example
///
/// ```
/// use widgetboard_core::WidgetSpec;
/// use widgetboard_storage::WidgetStore;
///
/// let store = WidgetStore::new();
/// let a = store.create(WidgetSpec::new(0, 0, 3, 10, 10))?;
/// let b = store.create(WidgetSpec::new(5, 5, 3, 10, 10))?;
///
/// // b took z = 3 and pushed a up
/// assert_eq!(store.get(&b.id())?.z(), 3);
/// assert_eq!(store.get(&a.id())?.z(), 4);
/// # Ok::<(), widgetboard_core::Error>(())
/// ```
pub struct WidgetStore {
    current: ArcSwap<Snapshot>,
    config: StoreConfig,
    counters: Counters,
}

impl WidgetStore {
    /// Create an empty store with default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot::empty()),
            config,
            counters: Counters::default(),
        }
    }

    /// The process-wide shared store
    pub fn global() -> Arc<WidgetStore> {
        Arc::clone(&GLOBAL)
    }

    /// Configuration this store was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The current snapshot
    ///
    /// Cheap: clones an `Arc`. The returned snapshot never changes.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// All widgets in ascending z order
    pub fn list(&self) -> Vec<Widget> {
        self.current.load().to_vec()
    }

    /// The current record for `id`
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` if no such widget exists.
    pub fn get(&self, id: &WidgetId) -> Result<Widget> {
        self.current
            .load()
            .get(id)
            .copied()
            .ok_or(Error::WidgetNotFound(*id))
    }

    /// Number of widgets currently stored
    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    /// True if the store holds no widgets
    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Write counters accumulated since the store was created
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            commits: self.counters.commits.load(Ordering::Relaxed),
            conflicts: self.counters.conflicts.load(Ordering::Relaxed),
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Create (`id == None`) or replace (`id == Some`) a widget
    ///
    /// Without an explicit z the widget is placed above every other widget.
    /// An occupied z pushes the contiguous run of widgets at and above it up
    /// by one.
    ///
    /// # Errors
    ///
    /// - `WidgetNotFound` if `id` is given but absent
    /// - `ZIndexOverflow` if placement would exceed `i32::MAX`
    pub fn upsert(&self, id: Option<WidgetId>, spec: WidgetSpec) -> Result<Widget> {
        self.commit("upsert", |current| {
            if let Some(id) = id {
                if !current.contains(&id) {
                    return Err(Error::WidgetNotFound(id));
                }
            }
            let candidate = placement::resolve(current, id, &spec)?;
            let next = placement::place(current, candidate)?;
            Ok((next, candidate))
        })
    }

    /// Create a new widget with a generated id
    pub fn create(&self, spec: WidgetSpec) -> Result<Widget> {
        self.upsert(None, spec)
    }

    /// Replace the widget `id`
    pub fn update(&self, id: WidgetId, spec: WidgetSpec) -> Result<Widget> {
        self.upsert(Some(id), spec)
    }

    /// Remove the widget `id`
    ///
    /// Returns `true` once the widget is removed. Other widgets keep their z.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` if no such widget exists.
    pub fn delete(&self, id: &WidgetId) -> Result<bool> {
        self.commit("delete", |current| {
            current
                .without(id)
                .map(|next| (next, true))
                .ok_or(Error::WidgetNotFound(*id))
        })
    }

    /// Drop every widget
    ///
    /// Unconditional swap to an empty snapshot; intended for resetting the
    /// global store between test cases.
    pub fn clear(&self) {
        self.current.store(Arc::new(Snapshot::empty()));
        debug!("widget store cleared");
    }

    /// Run the optimistic read-compute-CAS loop until a snapshot is published
    ///
    /// `compute` must be a pure function of the snapshot it is given; it is
    /// called again after every lost race. Its errors abort the loop.
    fn commit<T, F>(&self, op: &'static str, mut compute: F) -> Result<T>
    where
        F: FnMut(&Snapshot) -> Result<(Snapshot, T)>,
    {
        let mut conflicts: u32 = 0;
        loop {
            let current = self.current.load_full();
            let (next, value) = compute(current.as_ref())?;
            let widgets = next.len();

            let prev = self.current.compare_and_swap(&current, Arc::new(next));
            if Arc::ptr_eq(&prev, &current) {
                self.counters.commits.fetch_add(1, Ordering::Relaxed);
                debug!(op, conflicts, widgets, "snapshot published");
                return Ok(value);
            }

            conflicts = conflicts.saturating_add(1);
            self.counters.conflicts.fetch_add(1, Ordering::Relaxed);
            trace!(op, conflicts, "snapshot changed during write, retrying");
            if conflicts == self.config.contention_warn_threshold {
                warn!(
                    op,
                    conflicts, "widget store write is retrying under heavy contention"
                );
            }
        }
    }
}

impl Default for WidgetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetStore")
            .field("widgets", &self.len())
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(z: i32) -> WidgetSpec {
        WidgetSpec::new(1, 2, z, 5, 10)
    }

    fn zs(store: &WidgetStore) -> Vec<i32> {
        store.list().iter().map(|w| w.z()).collect()
    }

    // ========================================
    // Reads
    // ========================================

    #[test]
    fn test_list_ascending_z() {
        let store = WidgetStore::new();
        let w1 = store.create(spec(4)).unwrap();
        let w2 = store.create(spec(3)).unwrap();

        let list = store.list();
        assert_eq!(list, vec![w2, w1]);
    }

    #[test]
    fn test_get_existing() {
        let store = WidgetStore::new();
        let w = store.create(spec(3)).unwrap();
        assert_eq!(store.get(&w.id()).unwrap(), w);
    }

    #[test]
    fn test_get_missing() {
        let store = WidgetStore::new();
        let id = WidgetId::new();
        assert_eq!(store.get(&id), Err(Error::WidgetNotFound(id)));
    }

    // ========================================
    // Create
    // ========================================

    #[test]
    fn test_create_without_z_on_empty_board() {
        let store = WidgetStore::new();
        let w = store.create(WidgetSpec::on_top(1, 2, 5, 10)).unwrap();
        assert_eq!(w.z(), 1);
        assert_eq!((w.x(), w.y(), w.width(), w.height()), (1, 2, 5, 10));
    }

    #[test]
    fn test_create_with_z_on_empty_board() {
        let store = WidgetStore::new();
        let w = store.create(spec(3)).unwrap();
        assert_eq!(w.z(), 3);
    }

    #[test]
    fn test_create_without_z_goes_on_top() {
        let store = WidgetStore::new();
        store.create(spec(3)).unwrap();
        let w = store.create(WidgetSpec::on_top(1, 2, 5, 10)).unwrap();
        assert_eq!(w.z(), 4);
    }

    #[test]
    fn test_create_with_overlap_shifts() {
        let store = WidgetStore::new();
        let before = store.create(spec(3)).unwrap();
        let w = store.create(spec(3)).unwrap();

        assert_eq!(w.z(), 3);
        let shifted = store.get(&before.id()).unwrap();
        assert_eq!(shifted.z(), 4);
        assert_eq!(shifted.x(), before.x());
    }

    #[test]
    fn test_create_with_chained_overlap() {
        let store = WidgetStore::new();
        let a = store.create(spec(3)).unwrap();
        let b = store.create(spec(4)).unwrap();
        let c = store.create(spec(3)).unwrap();

        assert_eq!(store.get(&c.id()).unwrap().z(), 3);
        assert_eq!(store.get(&a.id()).unwrap().z(), 4);
        assert_eq!(store.get(&b.id()).unwrap().z(), 5);
    }

    // ========================================
    // Update
    // ========================================

    #[test]
    fn test_update_missing_widget() {
        let store = WidgetStore::new();
        let id = WidgetId::new();
        assert_eq!(
            store.update(id, WidgetSpec::on_top(1, 2, 5, 10)),
            Err(Error::WidgetNotFound(id))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_sole_widget_without_z() {
        let store = WidgetStore::new();
        let w1 = store.create(spec(3)).unwrap();
        let w2 = store.update(w1.id(), WidgetSpec::on_top(1, 2, 5, 10)).unwrap();
        assert_eq!(w2.id(), w1.id());
        assert_eq!(w2.z(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_without_z_promotes_to_top() {
        let store = WidgetStore::new();
        let w1 = store.create(spec(3)).unwrap();
        let w2 = store.create(spec(4)).unwrap();
        let w3 = store.update(w1.id(), WidgetSpec::on_top(1, 2, 5, 10)).unwrap();

        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id(), w2.id());
        assert_eq!(list[0].z(), 4);
        assert_eq!(list[1], w3);
        assert_eq!(w3.z(), 5);
    }

    #[test]
    fn test_update_with_z_below_others() {
        let store = WidgetStore::new();
        let w1 = store.create(spec(3)).unwrap();
        let w2 = store.create(spec(4)).unwrap();
        let w3 = store.update(w1.id(), spec(1)).unwrap();

        let list = store.list();
        assert_eq!(list, vec![w3, w2]);
        assert_eq!(zs(&store), vec![1, 4]);
    }

    #[test]
    fn test_update_with_overlap_shifts_run() {
        let store = WidgetStore::new();
        let w1 = store.create(spec(3)).unwrap();
        let w2 = store.create(spec(4)).unwrap();
        let w4 = store.create(spec(5)).unwrap();
        let w3 = store.update(w1.id(), spec(4)).unwrap();

        let ids: Vec<WidgetId> = store.list().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec![w3.id(), w2.id(), w4.id()]);
        assert_eq!(zs(&store), vec![4, 5, 6]);
    }

    #[test]
    fn test_update_replaces_geometry() {
        let store = WidgetStore::new();
        let w = store.create(spec(2)).unwrap();
        let moved = store.update(w.id(), WidgetSpec::new(-7, 9, 2, 30, 40)).unwrap();
        let stored = store.get(&w.id()).unwrap();
        assert_eq!(stored, moved);
        assert_eq!((stored.x(), stored.y()), (-7, 9));
        assert_eq!((stored.width(), stored.height()), (30, 40));
        assert!(stored.last_modified() >= w.last_modified());
    }

    // ========================================
    // Delete
    // ========================================

    #[test]
    fn test_delete_existing() {
        let store = WidgetStore::new();
        let w = store.create(spec(3)).unwrap();
        assert!(store.delete(&w.id()).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_keeps_others_untouched() {
        let store = WidgetStore::new();
        let w1 = store.create(spec(3)).unwrap();
        let w2 = store.create(spec(5)).unwrap();
        let w = store.create(spec(4)).unwrap();

        store.delete(&w.id()).unwrap();
        assert_eq!(store.list(), vec![w1, w2]);
    }

    #[test]
    fn test_delete_missing() {
        let store = WidgetStore::new();
        let id = WidgetId::new();
        assert_eq!(store.delete(&id), Err(Error::WidgetNotFound(id)));
    }

    #[test]
    fn test_delete_twice() {
        let store = WidgetStore::new();
        let w = store.create(spec(1)).unwrap();
        store.delete(&w.id()).unwrap();
        assert!(store.delete(&w.id()).unwrap_err().is_not_found());
    }

    // ========================================
    // Snapshots and bookkeeping
    // ========================================

    #[test]
    fn test_old_snapshot_unaffected_by_writes() {
        let store = WidgetStore::new();
        let a = store.create(spec(3)).unwrap();
        let before = store.snapshot();

        store.create(spec(3)).unwrap();
        store.delete(&a.id()).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(before.get(&a.id()), Some(&a));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_write_does_not_publish() {
        let store = WidgetStore::new();
        store.create(spec(1)).unwrap();
        let before = store.snapshot();

        let _ = store.delete(&WidgetId::new());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(store.stats().commits, 1);
    }

    #[test]
    fn test_stats_count_commits() {
        let store = WidgetStore::new();
        let w = store.create(spec(1)).unwrap();
        store.update(w.id(), spec(2)).unwrap();
        store.delete(&w.id()).unwrap();
        let stats = store.stats();
        assert_eq!(stats.commits, 3);
        assert_eq!(stats.conflicts, 0);
    }

    #[test]
    fn test_clear() {
        let store = WidgetStore::new();
        store.create(spec(1)).unwrap();
        store.create(spec(2)).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.create(WidgetSpec::on_top(0, 0, 1, 1)).unwrap().z(), 1);
    }

    #[test]
    fn test_with_config() {
        let store = WidgetStore::with_config(StoreConfig {
            contention_warn_threshold: 0,
        });
        assert_eq!(store.config().contention_warn_threshold, 0);
    }

    #[test]
    fn test_global_is_shared() {
        let a = WidgetStore::global();
        let b = WidgetStore::global();
        assert!(Arc::ptr_eq(&a, &b));
    }

    // ========================================
    // Contention
    // ========================================

    mod contention {
        use super::*;
        use std::sync::atomic::AtomicUsize;
        use tracing_subscriber::layer::SubscriberExt;

        /// Counts WARN events seen by the subscriber.
        struct WarnCounter(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
            fn on_event(
                &self,
                event: &tracing::Event<'_>,
                _ctx: tracing_subscriber::layer::Context<'_, S>,
            ) {
                if *event.metadata().level() == tracing::Level::WARN {
                    self.0.fetch_add(1, Ordering::Relaxed);
                }
            }
        }

        /// Run one commit that loses `lost` races, returning the warnings
        /// emitted and the store's stats afterwards.
        fn commit_losing(threshold: u32, lost: u32) -> (usize, StoreStats) {
            let store = WidgetStore::with_config(StoreConfig {
                contention_warn_threshold: threshold,
            });
            let warnings = Arc::new(AtomicUsize::new(0));
            let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&warnings)));

            tracing::subscriber::with_default(subscriber, || {
                let mut attempts = 0;
                store
                    .commit("contended", |_| {
                        attempts += 1;
                        if attempts <= lost {
                            // Another writer publishes before our CAS
                            store.current.store(Arc::new(Snapshot::empty()));
                        }
                        Ok((Snapshot::empty(), ()))
                    })
                    .unwrap();
            });

            (warnings.load(Ordering::Relaxed), store.stats())
        }

        #[test]
        fn test_lost_races_are_retried_and_counted() {
            let (_, stats) = commit_losing(16, 5);
            assert_eq!(stats.conflicts, 5);
            assert_eq!(stats.commits, 1);
        }

        #[test]
        fn test_warns_once_at_threshold() {
            let (warnings, stats) = commit_losing(3, 7);
            assert_eq!(warnings, 1);
            assert_eq!(stats.conflicts, 7);
        }

        #[test]
        fn test_no_warning_below_threshold() {
            let (warnings, _) = commit_losing(3, 2);
            assert_eq!(warnings, 0);
        }

        #[test]
        fn test_zero_threshold_disables_warning() {
            let (warnings, stats) = commit_losing(0, 7);
            assert_eq!(warnings, 0);
            assert_eq!(stats.conflicts, 7);
        }
    }

    #[test]
    fn test_update_after_delete_is_not_found() {
        let store = WidgetStore::new();
        let w = store.create(spec(1)).unwrap();
        store.delete(&w.id()).unwrap();

        assert_eq!(store.update(w.id(), spec(1)), Err(Error::WidgetNotFound(w.id())));
        assert!(store.is_empty());
    }
}

//! Store configuration

use serde::{Deserialize, Serialize};

/// Default number of CAS conflicts a single write may hit before it is logged
pub const DEFAULT_CONTENTION_WARN_THRESHOLD: u32 = 16;

/// Tuning knobs for [`WidgetStore`](crate::WidgetStore)
///
/// None of these affect correctness; they only control diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// A write that loses this many CAS races in a row emits one warning.
    /// 0 disables the warning.
    pub contention_warn_threshold: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            contention_warn_threshold: DEFAULT_CONTENTION_WARN_THRESHOLD,
        }
    }
}

//! Board configuration via `widgetboard.toml`
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration. Unknown keys are rejected to catch typos.

use std::path::Path;

use serde::{Deserialize, Serialize};
use widgetboard_storage::StoreConfig;

use crate::{Error, Result};

/// Config file name looked up by front ends.
pub const CONFIG_FILE_NAME: &str = "widgetboard.toml";

/// Board configuration loaded from `widgetboard.toml`.
///
/// # Example
///
/// ```toml
/// # Log filter used when RUST_LOG is not set
/// log_filter = "warn"
///
/// [store]
/// # Warn after this many CAS conflicts on a single write (0 = never)
/// contention_warn_threshold = 16
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// `tracing-subscriber` filter directive, e.g. `"info"` or `"widgetboard_storage=trace"`.
    pub log_filter: String,
    /// Store tuning.
    pub store: StoreConfig,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            store: StoreConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Widgetboard configuration
#
# Log filter used when RUST_LOG is not set.
# Examples: "warn", "info", "widgetboard_storage=trace"
log_filter = "warn"

[store]
# Emit one warning when a single write loses this many
# compare-and-swap races in a row (0 disables the warning).
contention_warn_threshold = 16
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidInput {
            reason: format!("invalid configuration: {}", e),
        })
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `InvalidInput` if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `widgetboard.toml` from `dir` if present, otherwise defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }
}

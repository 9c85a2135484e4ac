//! Typed board interface.

use std::sync::Arc;

use widgetboard_storage::WidgetStore;

use crate::types::{WidgetInfo, WidgetInput};
use crate::{BoardConfig, Command, Error, Executor, Output, Result};

/// Typed interface to a widget board.
///
/// Every method builds a [`Command`] and runs it through the [`Executor`], so
/// a `Board` behaves exactly like a transport sending the same commands.
#[derive(Debug, Clone)]
pub struct Board {
    executor: Executor,
}

impl Board {
    /// A board over a fresh, private store.
    pub fn new() -> Self {
        Self::with_config(&BoardConfig::default())
    }

    /// A board over a fresh store configured by `config`.
    pub fn with_config(config: &BoardConfig) -> Self {
        Self::from_store(Arc::new(WidgetStore::with_config(config.store)))
    }

    /// A board over an existing store.
    pub fn from_store(store: Arc<WidgetStore>) -> Self {
        Self {
            executor: Executor::new(store),
        }
    }

    /// The board backed by the process-wide store.
    pub fn global() -> Self {
        Self {
            executor: Executor::global(),
        }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    // =========================================================================
    // Widget Operations
    // =========================================================================

    /// All widgets in ascending z order.
    pub fn list(&self) -> Result<Vec<WidgetInfo>> {
        match self.executor.execute(Command::WidgetList)? {
            Output::Widgets(widgets) => Ok(widgets),
            _ => Err(Error::Internal {
                reason: "Unexpected output for WidgetList".into(),
            }),
        }
    }

    /// One widget by id.
    pub fn get(&self, id: &str) -> Result<WidgetInfo> {
        self.expect_widget(
            Command::WidgetGet { id: id.to_string() },
            "WidgetGet",
        )
    }

    /// Create a widget.
    ///
    /// Omitting `z` places the widget above all others; an occupied `z`
    /// pushes the widgets stacked contiguously above it up by one.
    pub fn create(&self, widget: WidgetInput) -> Result<WidgetInfo> {
        self.expect_widget(Command::WidgetCreate { widget }, "WidgetCreate")
    }

    /// Replace the widget `id`.
    pub fn update(&self, id: &str, widget: WidgetInput) -> Result<WidgetInfo> {
        self.expect_widget(
            Command::WidgetUpdate {
                id: id.to_string(),
                widget,
            },
            "WidgetUpdate",
        )
    }

    /// Delete the widget `id`.
    pub fn delete(&self, id: &str) -> Result<bool> {
        match self.executor.execute(Command::WidgetDelete { id: id.to_string() })? {
            Output::Bool(deleted) => Ok(deleted),
            _ => Err(Error::Internal {
                reason: "Unexpected output for WidgetDelete".into(),
            }),
        }
    }

    fn expect_widget(&self, cmd: Command, name: &str) -> Result<WidgetInfo> {
        match self.executor.execute(cmd)? {
            Output::Widget(widget) => Ok(widget),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

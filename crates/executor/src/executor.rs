//! The Executor - single entry point to the widget store.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! handlers and returns their outputs.

use std::sync::Arc;

use tracing::debug;
use widgetboard_storage::WidgetStore;

use crate::{Command, Output, Result};

/// The command executor.
///
/// The Executor is **stateless**: it holds a reference to the store but keeps
/// no state of its own. Executors sharing one `Arc<WidgetStore>` see the same
/// board.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use widgetboard_executor::{Command, Executor, Output, WidgetStore};
///
/// let executor = Executor::new(Arc::new(WidgetStore::new()));
/// let out = executor.execute(Command::WidgetList)?;
/// assert_eq!(out, Output::Widgets(vec![]));
/// # Ok::<(), widgetboard_executor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    store: Arc<WidgetStore>,
}

impl Executor {
    /// Create a new executor over a store.
    pub fn new(store: Arc<WidgetStore>) -> Self {
        Self { store }
    }

    /// Executor over the process-wide store.
    pub fn global() -> Self {
        Self::new(WidgetStore::global())
    }

    /// The store this executor dispatches to.
    pub fn store(&self) -> &Arc<WidgetStore> {
        &self.store
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        debug!(command = name, "executing command");

        let result = match cmd {
            Command::Ping => Ok(Output::Pong {
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
            Command::WidgetList => crate::handlers::widget::widget_list(&self.store),
            Command::WidgetGet { id } => crate::handlers::widget::widget_get(&self.store, id),
            Command::WidgetCreate { widget } => {
                crate::handlers::widget::widget_create(&self.store, widget)
            }
            Command::WidgetUpdate { id, widget } => {
                crate::handlers::widget::widget_update(&self.store, id, widget)
            }
            Command::WidgetDelete { id } => {
                crate::handlers::widget::widget_delete(&self.store, id)
            }
        };

        if let Err(e) = &result {
            debug!(command = name, status = e.status_code(), error = %e, "command failed");
        }
        result
    }

    /// Execute several commands in order.
    ///
    /// Commands are independent: a failure is recorded in its slot and the
    /// remaining commands still run.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}

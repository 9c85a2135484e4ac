//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one line per widget, e.g. `1) <id> z=3 ...`
//! - **JSON** (`--json`): `serde_json::to_string_pretty` of the `Output`, or of
//!   the `ApiError` body on failure

use widgetboard_executor::{ApiError, Error, Output, WidgetInfo};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&ApiError::from_error(err))
            .unwrap_or_else(|_| format!("{{\"message\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {} {}: {}", err.status_code(), err.status_text(), err),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// =========================================================================
// Human mode
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Pong { version } => format!("PONG {}", version),
        Output::Widget(w) => format_widget(w),
        Output::Widgets(ws) => {
            if ws.is_empty() {
                "(empty list)".to_string()
            } else {
                ws.iter()
                    .enumerate()
                    .map(|(i, w)| format!("{}) {}", i + 1, format_widget(w)))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Output::Bool(b) => format!("(boolean) {}", b),
    }
}

fn format_widget(w: &WidgetInfo) -> String {
    format!(
        "{} z={} at ({}, {}) size {}x{} modified {}",
        w.id, w.z, w.x, w.y, w.width, w.height, w.last_modified
    )
}

//! Widget command handlers.
//!
//! Request-level validation happens here, before the store is touched: a
//! malformed body is rejected even if the id would also be unknown.

use widgetboard_storage::WidgetStore;

use crate::bridge::{parse_widget_id, to_widget_info, validate_input};
use crate::convert::convert_result;
use crate::types::WidgetInput;
use crate::{Output, Result};

/// Handle WidgetList command.
pub fn widget_list(store: &WidgetStore) -> Result<Output> {
    let snapshot = store.snapshot();
    Ok(Output::Widgets(snapshot.iter().map(to_widget_info).collect()))
}

/// Handle WidgetGet command.
pub fn widget_get(store: &WidgetStore, id: String) -> Result<Output> {
    let id = parse_widget_id(&id)?;
    let widget = convert_result(store.get(&id))?;
    Ok(Output::Widget(to_widget_info(&widget)))
}

/// Handle WidgetCreate command.
pub fn widget_create(store: &WidgetStore, widget: WidgetInput) -> Result<Output> {
    let spec = validate_input(&widget)?;
    let created = convert_result(store.create(spec))?;
    Ok(Output::Widget(to_widget_info(&created)))
}

/// Handle WidgetUpdate command.
pub fn widget_update(store: &WidgetStore, id: String, widget: WidgetInput) -> Result<Output> {
    let spec = validate_input(&widget)?;
    let id = parse_widget_id(&id)?;
    let updated = convert_result(store.update(id, spec))?;
    Ok(Output::Widget(to_widget_info(&updated)))
}

/// Handle WidgetDelete command.
pub fn widget_delete(store: &WidgetStore, id: String) -> Result<Output> {
    let id = parse_widget_id(&id)?;
    let deleted = convert_result(store.delete(&id))?;
    Ok(Output::Bool(deleted))
}

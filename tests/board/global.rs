//! Process-wide store
//!
//! Other tests in this binary may use the global store too, so these only
//! look at widgets they created themselves.

use std::sync::Arc;

use widgetboard::{Command, Executor, Output, WidgetStore};

use crate::common::*;

#[test]
fn global_handles_share_one_store() {
    assert!(Arc::ptr_eq(&WidgetStore::global(), &WidgetStore::global()));
    assert!(Arc::ptr_eq(Executor::global().store(), &WidgetStore::global()));

    let created = Board::global().create(square(Some(-1000))).unwrap();
    let fetched = Executor::global()
        .execute(Command::WidgetGet {
            id: created.id.clone(),
        })
        .unwrap();
    assert_eq!(fetched, Output::Widget(created.clone()));

    assert!(Board::global().delete(&created.id).unwrap());
}

#[test]
fn private_boards_are_isolated_from_global() {
    let private = board();
    let created = private.create(square(None)).unwrap();
    assert!(Board::global().get(&created.id).is_err());
}

//! Typed facade tests
//!
//! The scenarios a board client walks through: stacking, restacking and
//! removing widgets.

use crate::common::*;
use widgetboard::Error;

// ============================================================================
// Stacking
// ============================================================================

#[test]
fn widgets_without_z_stack_upwards() {
    let board = board();
    for _ in 0..3 {
        board.create(square(None)).unwrap();
    }
    assert_eq!(zs(&board), vec![1, 2, 3]);
}

#[test]
fn insertion_pushes_only_the_contiguous_run() {
    let board = board();
    for z in [1, 2, 3, 5, 6] {
        board.create(square(Some(z))).unwrap();
    }
    let before = board.list().unwrap();

    let inserted = board.create(square(Some(2))).unwrap();
    let after = board.list().unwrap();

    assert_eq!(zs(&board), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(after[1].id, inserted.id);
    // z=1 is below the target and z=5,6 are past the gap at 4
    assert_eq!(after[0], before[0]);
    assert_eq!(after[4], before[3]);
    assert_eq!(after[5], before[4]);
    // the displaced run keeps its order
    assert_eq!(after[2].id, before[1].id);
    assert_eq!(after[3].id, before[2].id);
}

#[test]
fn same_z_twice_puts_newest_below() {
    let board = board();
    let first = board.create(square(Some(1))).unwrap();
    let second = board.create(square(Some(1))).unwrap();

    assert_eq!(ids(&board), vec![second.id, first.id.clone()]);
    assert_eq!(board.get(&first.id).unwrap().z, 2);
}

// ============================================================================
// Restacking
// ============================================================================

#[test]
fn update_moves_widget_and_keeps_id() {
    let board = board();
    let a = board.create(square(Some(1))).unwrap();
    let b = board.create(square(Some(2))).unwrap();

    let moved = board
        .update(&a.id, WidgetInput::new(7, 8, Some(2), 3, 4))
        .unwrap();
    assert_eq!(moved.id, a.id);
    assert_eq!((moved.x, moved.y, moved.width, moved.height), (7, 8, 3, 4));

    // a took z=2, so b was pushed to 3
    assert_eq!(ids(&board), vec![a.id, b.id]);
    assert_eq!(zs(&board), vec![2, 3]);
}

#[test]
fn update_without_z_brings_to_front() {
    let board = board();
    let a = board.create(square(Some(1))).unwrap();
    board.create(square(Some(4))).unwrap();

    let moved = board.update(&a.id, square(None)).unwrap();
    assert_eq!(moved.z, 5);
    assert_eq!(ids(&board).last(), Some(&a.id));
}

#[test]
fn update_unknown_widget_fails() {
    let board = board();
    let err = board
        .update("00000000-0000-0000-0000-000000000000", square(None))
        .unwrap_err();
    assert!(matches!(err, Error::WidgetNotFound { .. }));
    assert!(board.list().unwrap().is_empty());
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn delete_then_get_is_not_found() {
    let board = board();
    let a = board.create(square(None)).unwrap();
    assert!(board.delete(&a.id).unwrap());

    let err = board.get(&a.id).unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), format!("Widget not found for id: {}", a.id));
}

#[test]
fn delete_does_not_compact() {
    let board = board();
    let ws: Vec<WidgetInfo> = (0..3).map(|_| board.create(square(None)).unwrap()).collect();
    board.delete(&ws[0].id).unwrap();
    assert_eq!(zs(&board), vec![2, 3]);

    // The next default z still comes from the topmost widget
    assert_eq!(board.create(square(None)).unwrap().z, 4);
}

#[test]
fn invalid_input_never_reaches_the_store() {
    let board = board();
    let err = board.create(WidgetInput::new(0, 0, None, -1, 10)).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(board.executor().store().is_empty());
}

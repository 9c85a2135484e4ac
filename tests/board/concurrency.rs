//! Concurrent board access
//!
//! Many boards over one store, driven from many threads at once.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use crate::common::*;

const THREADS: usize = 8;
const PER_THREAD: usize = 50;

// ============================================================================
// Lost updates
// ============================================================================

#[test]
fn concurrent_creates_on_top_get_distinct_z() {
    let store = Arc::new(WidgetStore::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let board = Board::from_store(Arc::clone(&store));
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..PER_THREAD)
                    .map(|_| board.create(square(None)).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let created: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    let board = Board::from_store(store);
    let expected: Vec<i32> = (1..=(THREADS * PER_THREAD) as i32).collect();
    assert_eq!(zs(&board), expected);

    let listed: HashSet<String> = ids(&board).into_iter().collect();
    let created: HashSet<String> = created.into_iter().collect();
    assert_eq!(listed, created);
}

#[test]
fn concurrent_updates_keep_one_record_per_id() {
    let board = board();
    let targets: Vec<WidgetInfo> = (0..4).map(|_| board.create(square(None)).unwrap()).collect();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let board = board.clone();
            let targets = targets.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..PER_THREAD {
                    let target = &targets[(t + i) % targets.len()];
                    let z = ((t * PER_THREAD + i) % 5) as i32 + 1;
                    board.update(&target.id, square(Some(z))).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let listed = board.list().unwrap();
    assert_eq!(listed.len(), targets.len());

    let zs: Vec<i32> = listed.iter().map(|w| w.z).collect();
    assert!(zs.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", zs);

    let listed: HashSet<String> = listed.into_iter().map(|w| w.id).collect();
    let expected: HashSet<String> = targets.into_iter().map(|w| w.id).collect();
    assert_eq!(listed, expected);
}

// ============================================================================
// Readers
// ============================================================================

#[test]
fn readers_always_see_ordered_boards() {
    let board = board();
    let barrier = Arc::new(Barrier::new(THREADS + 1));

    let writer = {
        let board = board.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..(PER_THREAD * 4) {
                let w = board.create(square(Some((i % 7) as i32))).unwrap();
                if i % 3 == 0 {
                    board.delete(&w.id).unwrap();
                }
            }
        })
    };

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let board = board.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..PER_THREAD {
                    let zs = zs(&board);
                    assert!(zs.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", zs);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
}

//! Concurrency Tests
//!
//! Tests for encoding a set that is shared with writers:
//! - concurrent encoders see identical bytes
//! - a writer gets in under a continuous stream of encoders
//! - every snapshot an encoder takes is internally consistent

use crate::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Barrier};
use std::thread;
use std::time::Duration;

fn populated_set(n: usize) -> AssetSet {
    let set = AssetSet::new(day());
    for i in 0..n {
        let mut base = sample_base();
        base.labels.insert("index".into(), i.to_string());
        set.insert(format!("asset-{i:04}"), Asset::network(base));
    }
    set
}

#[test]
fn test_concurrent_encoders_agree() {
    let set = Arc::new(populated_set(50));
    let expected = encode_asset_set(&set).unwrap();

    const NUM_READERS: usize = 8;
    const ENCODES_PER_THREAD: usize = 20;

    let barrier = Arc::new(Barrier::new(NUM_READERS));
    let handles: Vec<_> = (0..NUM_READERS)
        .map(|_| {
            let set = Arc::clone(&set);
            let barrier = Arc::clone(&barrier);
            let expected = expected.clone();

            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ENCODES_PER_THREAD {
                    assert_eq!(encode_asset_set(&set).unwrap(), expected);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn test_writer_not_starved_by_encoders() {
    let set = Arc::new(populated_set(200));
    let stop = Arc::new(AtomicBool::new(false));

    const NUM_READERS: usize = 6;

    // Readers plus the writer
    let barrier = Arc::new(Barrier::new(NUM_READERS + 1));
    let readers: Vec<_> = (0..NUM_READERS)
        .map(|_| {
            let set = Arc::clone(&set);
            let stop = Arc::clone(&stop);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();
                while !stop.load(Ordering::Relaxed) {
                    encode_asset_set(&set).unwrap();
                }
            })
        })
        .collect();

    let (tx, rx) = mpsc::channel();
    let writer = {
        let set = Arc::clone(&set);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            // Let the readers saturate the lock first
            thread::sleep(Duration::from_millis(20));
            set.insert("late", Asset::shared(sample_base()));
            tx.send(()).unwrap();
        })
    };

    let result = rx.recv_timeout(Duration::from_secs(10));
    stop.store(true, Ordering::Relaxed);
    writer.join().unwrap();
    for h in readers {
        h.join().unwrap();
    }

    assert!(result.is_ok(), "writer starved by encoders");
    assert!(set.get("late").is_some());
}

#[test]
fn test_snapshots_are_consistent_during_writes() {
    let set = Arc::new(AssetSet::new(day()));
    let stop = Arc::new(AtomicBool::new(false));

    const NUM_READERS: usize = 4;
    const WRITES: usize = 200;

    let readers: Vec<_> = (0..NUM_READERS)
        .map(|_| {
            let set = Arc::clone(&set);
            let stop = Arc::clone(&stop);

            thread::spawn(move || {
                let mut last_len = 0;
                while !stop.load(Ordering::Relaxed) {
                    let bytes = encode_asset_set(&set).unwrap();
                    let snapshot = decode_asset_set(&bytes).unwrap();
                    // Writes only add, so snapshots never shrink
                    assert!(snapshot.len() >= last_len);
                    last_len = snapshot.len();
                    for i in 0..last_len {
                        assert!(snapshot.get(&format!("w-{i:04}")).is_some());
                    }
                }
            })
        })
        .collect();

    for i in 0..WRITES {
        set.insert(format!("w-{i:04}"), Asset::network(sample_base()));
    }
    stop.store(true, Ordering::Relaxed);

    for h in readers {
        h.join().unwrap();
    }
    assert_eq!(set.len(), WRITES);
}

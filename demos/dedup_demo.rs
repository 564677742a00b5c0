//! Multi-thread random-id driver for the tracker.
//!
//! Spawns worker threads that each feed a stream of random ids from
//! the positive i32 range and aggregates first-time/seen-before counts.
//! All aggregation happens here — the tracker itself exposes none.
//!
//! Run with `cargo run --release --example dedup_demo`. The full-range
//! store is 256 MiB.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

use dupcheck::MembershipTracker;
use rand::prelude::*;

const WORKERS: usize = 2;
const IDS_PER_WORKER: usize = 1_000_000;

fn main() {
    tracing_subscriber::fmt::init();

    let domain_size = 1usize << 31;
    let tracker = MembershipTracker::new(domain_size).expect("non-zero domain");

    let first_time = AtomicUsize::new(0);
    let seen_before = AtomicUsize::new(0);

    let start = Instant::now();
    thread::scope(|scope| {
        for worker in 0..WORKERS as u64 {
            let tracker = &tracker;
            let first_time = &first_time;
            let seen_before = &seen_before;
            scope.spawn(move || {
                let mut rng = StdRng::seed_from_u64(worker);
                for _ in 0..IDS_PER_WORKER {
                    let id = rng.random_range(1..i32::MAX as i64);
                    if tracker.observe(id).expect("id in domain") {
                        first_time.fetch_add(1, Ordering::Relaxed);
                    } else {
                        seen_before.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    println!(
        "run complete: {} ids in {:.2?}, {} first time, {} seen before",
        WORKERS * IDS_PER_WORKER,
        start.elapsed(),
        first_time.load(Ordering::Relaxed),
        seen_before.load(Ordering::Relaxed),
    );
}

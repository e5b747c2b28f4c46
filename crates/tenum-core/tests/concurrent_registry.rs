//! # Concurrent First Access
//!
//! Many threads touching an enumeration for the first time at once must see
//! exactly one `declare()` call and the same fully built slice.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use tenum_core::{Enumeration, Id, IdEntity, Registry};

static DECLARE_CALLS: AtomicUsize = AtomicUsize::new(0);

const INSTANCES: i64 = 64;

#[derive(Debug)]
struct Slow(IdEntity);

impl Enumeration for Slow {
    fn declare() -> Vec<Self> {
        DECLARE_CALLS.fetch_add(1, Ordering::SeqCst);
        // Widen the race window.
        thread::sleep(Duration::from_millis(20));
        (0..INSTANCES).map(|id| Slow(IdEntity::new(id))).collect()
    }

    fn id(&self) -> Id {
        self.0.id()
    }
}

#[test]
fn concurrent_first_access_builds_once() {
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let all = Slow::all();
                (all.as_ptr() as usize, all.len())
            })
        })
        .collect();

    let results: Vec<(usize, usize)> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    assert_eq!(DECLARE_CALLS.load(Ordering::SeqCst), 1);
    let (ptr, len) = results[0];
    assert_eq!(len, INSTANCES as usize);
    assert!(results.iter().all(|&(p, l)| p == ptr && l == len));
    assert!(Registry::global().is_built::<Slow>());
}

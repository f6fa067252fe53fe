//! Structural invariant checks shared by the integration and property tests.

use bounded_priority_queue::{BoundedPriorityQueue, Entry};

/// Check every invariant the queue promises to maintain, returning false (and
/// printing what went wrong) instead of panicking, so this can back a
/// quickcheck property.
pub fn invariants_hold<T>(queue: &BoundedPriorityQueue<T>) -> bool {
    let mut ok = true;

    if queue.len() > queue.capacity() {
        println!(
            "Error: len {} exceeds capacity {}",
            queue.len(),
            queue.capacity()
        );
        ok = false;
    }

    let keys: Vec<(i64, u64)> = queue.iter().map(|e| (e.priority(), e.id())).collect();
    for (i, pair) in keys.windows(2).enumerate() {
        let ((p_a, id_a), (p_b, id_b)) = (pair[0], pair[1]);
        let sorted = p_a > p_b || (p_a == p_b && id_a < id_b);
        if !sorted {
            println!(
                "Error: entries {i} and {} out of order: ({p_a}, {id_a}) then ({p_b}, {id_b})",
                i + 1
            );
            ok = false;
        }
    }

    let mut ids: Vec<u64> = queue.iter().map(Entry::id).collect();
    ids.sort_unstable();
    let unique = ids.len();
    ids.dedup();
    if ids.len() != unique {
        println!("Error: duplicate insertion-sequence ids");
        ok = false;
    }

    ok
}

/// Panicking variant for use in plain `#[test]` functions.
pub fn assert_invariants<T>(queue: &BoundedPriorityQueue<T>) {
    assert!(invariants_hold(queue), "queue invariants violated");
}

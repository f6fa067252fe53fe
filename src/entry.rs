//! The record type stored by a [`BoundedPriorityQueue`](crate::BoundedPriorityQueue).

use std::cmp::Reverse;
use std::fmt;

/// One queued item: a priority, a payload, and an insertion-sequence id.
///
/// Entries are immutable after construction; the queue replaces them wholesale
/// rather than mutating them in place. The id is allocated by the owning queue
/// when the entry is accepted and is strictly increasing per queue instance,
/// which makes it usable as an insertion-order tiebreaker.
///
/// `Entry` deliberately does not implement `Ord` or `PartialOrd`: the ranking
/// of entries is a property of the queue, not of the entries themselves, and
/// exposing a second comparison operator here would invite inconsistent
/// tie-breaking. See [`BoundedPriorityQueue`](crate::BoundedPriorityQueue) for
/// the one ordering rule that governs the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    priority: i64,
    value: T,
    id: u64,
}

impl<T> Entry<T> {
    pub(crate) fn new(priority: i64, value: T, id: u64) -> Self {
        Self { priority, value, id }
    }

    /// The priority this entry was inserted with. Higher means served sooner.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// The payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The insertion-sequence id assigned when this entry was accepted.
    ///
    /// Ids start at 1, never repeat, and never decrease within one queue, so
    /// comparing the ids of two entries from the same queue tells you which
    /// was inserted first.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// Sort key for the canonical queue order: descending priority, then
    /// ascending id among equal priorities (earlier insertion ranks first).
    pub(crate) fn rank(&self) -> (Reverse<i64>, u64) {
        (Reverse(self.priority), self.id)
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Priority: {}, Value: {}, ID: {}",
            self.priority, self.value, self.id
        )
    }
}

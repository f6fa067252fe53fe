//! A size-bounded priority queue.
//!
//! See documentation for [`BoundedPriorityQueue`].

mod entry;

pub use entry::Entry;

/// A priority queue that retains at most a configurable number of entries.
///
/// Entries are ranked by an `i64` priority, higher priorities served first.
/// Ties are broken by insertion order: of two entries with equal priority, the
/// one inserted earlier is popped earlier. Once the queue is full, inserting a
/// value whose priority strictly outranks the current minimum evicts the
/// lowest-ranked entry; anything else is silently dropped.
///
/// ## Usage
///
/// ```rust
/// # use bounded_priority_queue::BoundedPriorityQueue;
/// let mut queue = BoundedPriorityQueue::with_capacity(2);
///
/// assert!(queue.insert(10, "low"));
/// assert!(queue.insert(20, "high"));
/// assert!(!queue.insert(1, "dropped")); // full, outranks nothing
/// assert!(queue.insert(30, "urgent")); // evicts "low"
///
/// assert_eq!(queue.pop(), Some("urgent"));
/// assert_eq!(queue.pop(), Some("high"));
/// assert_eq!(queue.pop(), None);
/// ```
///
/// ## Ordering
///
/// The queue keeps its sequence fully sorted at all times: descending by
/// priority, ascending by insertion-sequence id among equal priorities. This
/// is the only ordering rule in the crate; [`Entry`] intentionally has no
/// `Ord` implementation of its own. Eviction (on insert and on
/// [`set_capacity`](Self::set_capacity)) always removes from the tail of that
/// sequence, i.e. strictly the lowest-ranked survivors first.
///
/// Sortedness is restored with a full re-sort after every accepting insert.
/// The capacity bound keeps sequences short, so this container trades
/// asymptotic cleverness for simplicity.
///
/// ## Ids
///
/// Each queue owns an insertion-sequence counter starting at 1. An id is
/// allocated only when an insert is accepted, so a rejected insert leaves no
/// trace, and ids within one queue are unique and increasing in acceptance
/// order. Ids are never reused, not even after a pop or an eviction.
#[derive(Debug, Clone)]
pub struct BoundedPriorityQueue<T> {
    /// Sorted sequence of entries; the head is the next entry to pop.
    entries: Vec<Entry<T>>,

    /// Maximum number of retained entries.
    capacity: usize,

    /// Id to assign to the next accepted entry.
    next_id: u64,
}

impl<T> BoundedPriorityQueue<T> {
    /// Capacity used by [`new`](Self::new) and [`Default`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Construct a queue with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Construct a queue with the given capacity.
    ///
    /// A capacity of 0 is legal: such a queue stays empty and rejects every
    /// insert.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            next_id: 1,
        }
    }

    /// Insert a value with the given priority.
    ///
    /// Below capacity, the value is always accepted. At capacity, the value is
    /// accepted only if its priority strictly outranks the current minimum, in
    /// which case the lowest-ranked entry is evicted to make room. Returns
    /// whether the value was accepted; a rejected insert has no observable
    /// effect, not even on the id counter.
    pub fn insert(&mut self, priority: i64, value: T) -> bool {
        if self.entries.len() < self.capacity {
            let entry = Entry::new(priority, value, self.fresh_id());
            self.entries.push(entry);
            self.restore_order();
            true
        } else {
            // Full. The tail holds the lowest-ranked entry; displace it only
            // if strictly outranked. With capacity 0 there is no tail and the
            // insert is rejected outright.
            match self.entries.last() {
                Some(tail) if priority > tail.priority() => {
                    let entry = Entry::new(priority, value, self.fresh_id());
                    self.entries.pop();
                    self.entries.push(entry);
                    self.restore_order();
                    true
                }
                _ => false,
            }
        }
    }

    /// Remove and return the highest-ranked value, or `None` if the queue is
    /// empty.
    ///
    /// Popping on empty is a recoverable condition, not an error; the queue
    /// remains usable either way.
    pub fn pop(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        // Removing the head leaves the rest sorted; no re-sort needed.
        Some(self.entries.remove(0).into_value())
    }

    /// The highest-ranked entry, without removing it.
    pub fn peek(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    /// Change the capacity, effective immediately.
    ///
    /// Shrinking below the current size evicts the lowest-ranked entries until
    /// the size fits. Growing only raises the ceiling.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.truncate(capacity);
    }

    /// The current capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the queue holds an entry with exactly this priority and value.
    pub fn contains(&self, priority: i64, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.entries
            .iter()
            .any(|e| e.priority() == priority && e.value() == value)
    }

    /// Iterate over the entries in current queue order, highest-ranked first.
    ///
    /// Read-only; useful for dumping the queue's contents:
    ///
    /// ```rust
    /// # use bounded_priority_queue::BoundedPriorityQueue;
    /// let mut queue = BoundedPriorityQueue::with_capacity(5);
    /// queue.insert(10, "chlebak10");
    /// queue.insert(20, "chlebak20");
    /// for entry in queue.iter() {
    ///     println!("{entry}");
    /// }
    /// ```
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Allocate the next insertion-sequence id.
    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Re-establish the canonical order after a structural change.
    fn restore_order(&mut self) {
        self.entries.sort_by_key(Entry::rank);
    }
}

impl<T> Default for BoundedPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a BoundedPriorityQueue<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

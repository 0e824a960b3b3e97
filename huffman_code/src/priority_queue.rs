// huffman_code/src/priority_queue.rs

//! Binary min-heap keyed by priority, with stable tie-breaking.
//!
//! Entries with equal keys come out in the order they were inserted. The
//! tree builder relies on this so that two builds over the same frequency
//! table always merge the same nodes.

use contracts::*;

/// A heap slot: the key, the insertion sequence number and the payload.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    seq: u64,
    value: V,
}

impl<K: Ord, V> Entry<K, V> {
    /// Strict heap order: smaller key first, earlier insertion on ties.
    fn precedes(&self, other: &Self) -> bool {
        (&self.key, self.seq) < (&other.key, other.seq)
    }
}

/// Min-priority queue exposing `insert`, `extract_min` and `size`.
#[derive(Debug)]
pub struct MinPriorityQueue<K, V> {
    entries: Vec<Entry<K, V>>,
    next_seq: u64,
}

impl<K: Ord, V> MinPriorityQueue<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Number of elements currently queued.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest key in the queue, if any.
    pub fn peek_key(&self) -> Option<&K> {
        self.entries.first().map(|entry| &entry.key)
    }

    /// Inserts `value` with priority `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - Priority of the value; smaller keys are extracted first.
    /// * `value` - Payload stored alongside the key.
    #[debug_ensures(self.size() == old(self.size()) + 1)]
    #[debug_ensures(self.is_heap())]
    pub fn insert(&mut self, key: K, value: V) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { key, seq, value });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the value with the smallest key.
    ///
    /// Among equal keys, the earliest inserted value is returned first.
    ///
    /// # Returns
    ///
    /// * `Option<V>` - The minimum value, or `None` when the queue is empty.
    #[debug_ensures(ret.is_none() || self.size() + 1 == old(self.size()))]
    #[debug_ensures(self.is_heap())]
    pub fn extract_min(&mut self) -> Option<V> {
        self.extract_min_entry().map(|(_, value)| value)
    }

    /// Removes and returns the minimum value together with its key.
    ///
    /// # Returns
    ///
    /// * `Option<(K, V)>` - The minimum key and its value, or `None` when
    ///   the queue is empty.
    pub fn extract_min_entry(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((min.key, min.value))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].precedes(&self.entries[parent]) {
                self.entries.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.entries[left].precedes(&self.entries[smallest]) {
                smallest = left;
            }
            if right < n && self.entries[right].precedes(&self.entries[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }

    /// Checks the heap property over every parent/child pair.
    fn is_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| !self.entries[i].precedes(&self.entries[(i - 1) / 2]))
    }
}

impl<K: Ord, V> Default for MinPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_from_empty_queue() {
        let mut queue: MinPriorityQueue<u64, char> = MinPriorityQueue::new();
        assert_eq!(queue.size(), 0);
        assert!(queue.extract_min().is_none());
        assert!(queue.peek_key().is_none());
    }

    #[test]
    fn test_extracts_in_key_order() {
        let mut queue = MinPriorityQueue::new();
        for (key, value) in [(5, 'e'), (1, 'a'), (4, 'd'), (2, 'b'), (3, 'c')] {
            queue.insert(key, value);
        }
        assert_eq!(queue.size(), 5);
        assert_eq!(queue.peek_key(), Some(&1));

        let drained: Vec<char> = std::iter::from_fn(|| queue.extract_min()).collect();
        assert_eq!(drained, vec!['a', 'b', 'c', 'd', 'e']);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_keys_come_out_in_insertion_order() {
        let mut queue = MinPriorityQueue::new();
        queue.insert(1, "first");
        queue.insert(0, "zero");
        queue.insert(1, "second");
        queue.insert(1, "third");

        assert_eq!(queue.extract_min(), Some("zero"));
        assert_eq!(queue.extract_min(), Some("first"));
        assert_eq!(queue.extract_min(), Some("second"));
        assert_eq!(queue.extract_min(), Some("third"));
    }

    #[test]
    fn test_interleaved_insert_and_extract() {
        let mut queue = MinPriorityQueue::new();
        queue.insert(3, 'c');
        queue.insert(1, 'a');
        assert_eq!(queue.extract_min_entry(), Some((1, 'a')));
        queue.insert(2, 'b');
        queue.insert(0, 'z');
        assert_eq!(queue.extract_min(), Some('z'));
        assert_eq!(queue.extract_min(), Some('b'));
        assert_eq!(queue.extract_min(), Some('c'));
        assert_eq!(queue.extract_min(), None);
    }

    #[test]
    fn test_extract_min_matches_extract_min_entry() {
        let mut by_value = MinPriorityQueue::new();
        let mut by_entry = MinPriorityQueue::new();
        for (key, value) in [(2, 'x'), (1, 'y'), (2, 'z'), (0, 'w'), (1, 'v')] {
            by_value.insert(key, value);
            by_entry.insert(key, value);
        }
        while let Some((_, expected)) = by_entry.extract_min_entry() {
            assert_eq!(by_value.extract_min(), Some(expected));
            assert_eq!(by_value.size(), by_entry.size());
        }
        assert_eq!(by_value.extract_min(), None);
    }

    proptest! {
        #[test]
        fn test_drains_sorted_and_stable(keys in proptest::collection::vec(0u8..16, 0usize..=256)) {
            let mut queue = MinPriorityQueue::with_capacity(keys.len());
            for (index, &key) in keys.iter().enumerate() {
                queue.insert(key, index);
            }
            prop_assert_eq!(queue.size(), keys.len());

            let mut expected: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
            expected.sort();

            let drained: Vec<(u8, usize)> =
                std::iter::from_fn(|| queue.extract_min_entry()).collect();
            prop_assert_eq!(drained, expected);
        }
    }
}

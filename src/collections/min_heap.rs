//! `MinHeap`: a binary min-heap keyed by a partially ordered priority.
//!
//! Floating-point weights are only `PartialOrd`, so `std::collections::BinaryHeap`
//! cannot order them directly. This heap compares keys with `partial_cmp`
//! (incomparable keys count as equal) and breaks ties with a monotonically
//! increasing push sequence, so equal keys pop in FIFO order. That makes every
//! algorithm built on it deterministic for a given graph.
//!
//! There is no decrease-key. Callers push a fresh entry when a priority
//! improves and discard stale entries on pop (lazy deletion).

use core::cmp::Ordering;
use core::fmt;

struct HeapEntry<K, T> {
    key: K,
    seq: u64,
    item: T,
}

/// A priority queue that always pops the entry with the smallest key.
pub struct MinHeap<K, T> {
    data: Vec<HeapEntry<K, T>>,
    next_seq: u64,
}

impl<K: PartialOrd, T> MinHeap<K, T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty heap with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns the number of entries in the heap, stale ones included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes `item` with priority `key`.
    pub fn push(&mut self, key: K, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.data.push(HeapEntry { key, seq, item });
        self.sift_up(self.data.len() - 1);
    }

    /// Pops the entry with the smallest key.
    pub fn pop(&mut self) -> Option<(K, T)> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((entry.key, entry.item))
    }

    /// Returns the smallest entry without removing it.
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.data.first().map(|e| (&e.key, &e.item))
    }

    /// Removes every entry. The tie-break sequence keeps counting.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Key first, push order second.
    fn less(&self, a: usize, b: usize) -> bool {
        let ea = &self.data[a];
        let eb = &self.data[b];
        match ea.key.partial_cmp(&eb.key) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => ea.seq < eb.seq,
        }
    }
}

impl<K: PartialOrd, T> Default for MinHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> fmt::Debug for MinHeap<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_heap_basic() {
        let mut heap = MinHeap::new();
        heap.push(1.0, 'a');
        heap.push(5.0, 'b');
        heap.push(0.5, 'c');
        heap.push(10.0, 'd');

        assert_eq!(heap.peek(), Some((&0.5, &'c')));
        assert_eq!(heap.pop(), Some((0.5, 'c')));
        assert_eq!(heap.pop(), Some((1.0, 'a')));
        assert_eq!(heap.pop(), Some((5.0, 'b')));
        assert_eq!(heap.pop(), Some((10.0, 'd')));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_min_heap_order() {
        let mut heap = MinHeap::new();
        let data = vec![1.0, 10.0, 5.0, 2.0, 8.0, 3.0, 7.0, f64::INFINITY, -4.0];
        for &x in &data {
            heap.push(x, ());
        }

        let mut result = Vec::new();
        while let Some((x, ())) = heap.pop() {
            result.push(x);
        }

        let mut expected = data;
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(result, expected);
    }

    #[test]
    fn test_equal_keys_pop_fifo() {
        let mut heap = MinHeap::new();
        for (i, key) in [3.0, 1.0, 3.0, 1.0, 2.0, 1.0, 3.0].into_iter().enumerate() {
            heap.push(key, i);
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|(_, i)| i)).collect();
        assert_eq!(order, vec![1, 3, 5, 4, 0, 2, 6]);
    }
}

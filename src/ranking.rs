//! RankingHeap - max-heap over record slots keyed by grade.
//!
//! The heap does not own records. Each entry names a slot (index) in the
//! repository's primary collection, so the heap has to be rebuilt whenever
//! that collection is mutated or reordered.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    key: i64,
    // Among equal keys the lowest slot ranks highest.
    slot: Reverse<usize>,
}

/// Binary max-heap answering "which slot holds the largest key".
///
/// O(log n) push and pop, O(1) peek.
#[derive(Debug, Clone, Default)]
pub struct RankingHeap {
    heap: BinaryHeap<Entry>,
}

impl RankingHeap {
    pub fn new() -> Self {
        RankingHeap {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, key: i64, slot: usize) {
        self.heap.push(Entry {
            key,
            slot: Reverse(slot),
        });
    }

    /// Slot of the entry with the largest key, without removing it.
    pub fn peek(&self) -> Option<usize> {
        self.heap.peek().map(|entry| entry.slot.0)
    }

    /// Remove and return the slot with the largest key.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.slot.0)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Discard every entry and rebuild from `(key, slot)` pairs.
    pub fn rebuild<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (i64, usize)>,
    {
        self.heap = entries
            .into_iter()
            .map(|(key, slot)| Entry {
                key,
                slot: Reverse(slot),
            })
            .collect();
    }
}

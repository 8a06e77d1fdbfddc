//! Sequential container variants under benchmark.
//!
//! Both variants store an ordered sequence of integers and expose the
//! three operations the harness times: tail append, positional read,
//! and positional removal. [`VecContainer`] has contiguous-storage
//! semantics (amortized O(1) append, O(1) read, O(n) removal);
//! [`LinkedContainer`] has doubly-linked-node semantics (O(1) append,
//! O(n) read, O(n) removal at an arbitrary index since the node must
//! be found first).

use std::collections::LinkedList;

/// Ordered mutable sequence of integers supporting append, positional
/// read, and positional removal.
///
/// Out-of-range indices return `None`; the benchmark loops only touch
/// indices they constructed, so a `None` there is a logic defect.
pub trait SequentialContainer {
    /// Append a value at the tail.
    fn push_back(&mut self, value: i64);

    /// Read the value at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<i64>;

    /// Remove and return the value at `index`, or `None` if out of range.
    fn remove_at(&mut self, index: usize) -> Option<i64>;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Whether the container is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display name used in benchmark output.
    fn label(&self) -> &'static str;
}

/// Contiguous-storage variant backed by `Vec`.
#[derive(Debug, Default)]
pub struct VecContainer {
    items: Vec<i64>,
}

impl VecContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequentialContainer for VecContainer {
    fn push_back(&mut self, value: i64) {
        self.items.push(value);
    }

    fn get(&self, index: usize) -> Option<i64> {
        self.items.get(index).copied()
    }

    fn remove_at(&mut self, index: usize) -> Option<i64> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn label(&self) -> &'static str {
        "Vec"
    }
}

/// Linked-node variant backed by `std::collections::LinkedList`.
#[derive(Debug, Default)]
pub struct LinkedContainer {
    items: LinkedList<i64>,
}

impl LinkedContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequentialContainer for LinkedContainer {
    fn push_back(&mut self, value: i64) {
        self.items.push_back(value);
    }

    fn get(&self, index: usize) -> Option<i64> {
        self.items.iter().nth(index).copied()
    }

    fn remove_at(&mut self, index: usize) -> Option<i64> {
        if index >= self.items.len() {
            return None;
        }
        // LinkedList has no stable remove-by-index; splice around the node.
        let mut tail = self.items.split_off(index);
        let removed = tail.pop_front();
        self.items.append(&mut tail);
        removed
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn label(&self) -> &'static str {
        "LinkedList"
    }
}

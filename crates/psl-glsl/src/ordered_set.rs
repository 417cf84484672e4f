//! Insertion-ordered, deduplicated collections.
//!
//! Generated text depends on declaration order, so every collection that
//! feeds output must preserve first-insertion order. A plain `Vec` backed
//! by a membership set gives that without hash-iteration nondeterminism.

use std::collections::BTreeSet;

/// A set that remembers insertion order, keyed by a string per item.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    seen: BTreeSet<String>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        OrderedSet::new()
    }
}

impl<T> OrderedSet<T> {
    pub fn new() -> Self {
        OrderedSet { items: Vec::new(), seen: BTreeSet::new() }
    }

    /// Insert an item under the given key. Returns `false` (and drops the
    /// item) when the key is already present.
    pub fn insert(&mut self, key: &str, item: T) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string());
        self.items.push(item);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> OrderedSet<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

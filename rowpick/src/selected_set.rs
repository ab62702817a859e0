//! Insertion-ordered set of selected row indices.

use std::collections::HashSet;

/// Selected row indices in the order they were selected.
///
/// Membership checks go through a hash set; the vector keeps insertion order
/// so that shrinking the cap can evict the most recent selections first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSet {
    order: Vec<usize>,
    members: HashSet<usize>,
}

impl SelectedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check if an index is selected.
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Add an index at the end of the order.
    /// Returns false if it was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        if !self.members.insert(index) {
            return false;
        }
        self.order.push(index);
        true
    }

    /// Remove an index. Returns false if it was not present.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.members.remove(&index) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|&i| i == index) {
            self.order.remove(pos);
        }
        true
    }

    /// Flip membership of an index. Returns the new membership.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.remove(index) {
            false
        } else {
            self.insert(index);
            true
        }
    }

    /// Remove and return the most recently inserted index.
    pub fn pop_last(&mut self) -> Option<usize> {
        let last = self.order.pop()?;
        self.members.remove(&last);
        Some(last)
    }

    /// Evict the most recent entries until at most `len` remain.
    /// Returns the evicted indices, most recent first.
    pub fn truncate(&mut self, len: usize) -> Vec<usize> {
        let mut evicted = Vec::new();
        while self.order.len() > len {
            match self.pop_last() {
                Some(index) => evicted.push(index),
                None => break,
            }
        }
        evicted
    }

    /// Clear all entries. Returns the indices that were removed.
    pub fn clear(&mut self) -> Vec<usize> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }

    /// Keep only indices matching the predicate, preserving order.
    /// Returns the removed indices.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<usize>
    where
        F: FnMut(usize) -> bool,
    {
        let mut removed = Vec::new();
        self.order.retain(|&index| {
            if keep(index) {
                true
            } else {
                removed.push(index);
                false
            }
        });
        for index in &removed {
            self.members.remove(index);
        }
        removed
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Snapshot of the indices in insertion order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.order.clone()
    }
}

impl Extend<usize> for SelectedSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl FromIterator<usize> for SelectedSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = SelectedSet::new();
        set.extend(iter);
        set
    }
}

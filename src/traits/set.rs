use std::hash::{BuildHasher, Hash};

use crate::hash::HashSet;

/// A collection of unique items, supporting the four canonical set operations.
///
/// Implementors decide how items are located, but must agree with [`Eq`]: inserting an item equal
/// to one already present leaves the set unchanged.
pub trait Set<T> {
    /// Adds `item` to the set, returning true if it wasn't already present.
    fn insert(&mut self, item: T) -> bool;

    /// Removes the item equal to `item`, returning true if it was present.
    fn remove(&mut self, item: &T) -> bool;

    /// Returns true if the set contains an item equal to `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of items in the set.
    fn len(&self) -> usize;

    /// Returns true if the set contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        HashSet::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

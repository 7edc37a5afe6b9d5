use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{CapacityOutOfRange, CapacityOverflow, InvalidCapacity, ZeroCapacity};
use crate::util::fmt::DebugBuckets;

/// A set of unique items which relies on the items implementing [`Hash`], stored in a fixed number
/// of buckets.
///
/// The number of buckets (the capacity) is chosen when the set is created and never changes. Items
/// that hash to the same bucket are chained together in that bucket, in insertion order. Buckets
/// are only allocated once something is inserted into them.
///
/// Equal items must produce equal hashes, and an item's hash must not change while it is in the
/// set. Neither requirement is checked: breaking them is a logic error which can cause items to be
/// "lost" from the set, but never undefined behaviour. Because of this, HashSet's API doesn't
/// provide mutable access to its items.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `k`: The number of items in the bucket being accessed.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(k)` |
/// | `remove` | `O(1)`*, `O(k)` |
/// | `contains` | `O(1)`*, `O(k)` |
/// | `get` | `O(1)`*, `O(k)` |
///
/// \* Expected time, assuming a good hash distribution and a capacity in proportion to the number
/// of items. The set never grows, so `k` is roughly `len / cap` once it fills up.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) buckets: Box<[Bucket<T>]>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

/// A bucket is None until the first item that hashes to it is inserted.
pub(crate) type Bucket<T> = Option<Vec<T>>;

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with `cap` buckets and the default value for `B`.
    ///
    /// `cap` can be any integer type, but it must be positive and fit in a `usize`.
    pub fn with_cap<C>(cap: C) -> Result<HashSet<T, B>, InvalidCapacity>
    where
        C: TryInto<usize> + Copy + Display,
    {
        HashSet::with_cap_and_hasher(cap, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with `cap` buckets and the provided `hasher`.
    ///
    /// `cap` can be any integer type, but it must be positive and fit in a `usize`. The buckets
    /// themselves are allocated up front, so a capacity too large to allocate is also an error.
    pub fn with_cap_and_hasher<C>(cap: C, hasher: B) -> Result<HashSet<T, B>, InvalidCapacity>
    where
        C: TryInto<usize> + Copy + Display,
    {
        let cap: usize = cap.try_into().map_err(|_| CapacityOutOfRange {
            requested: cap.to_string(),
        })?;
        if cap == 0 {
            return Err(ZeroCapacity.into());
        }

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(cap).map_err(|_| CapacityOverflow { cap })?;
        buckets.resize_with(cap, || None);

        Ok(HashSet {
            buckets: buckets.into_boxed_slice(),
            cap,
            len: 0,
            hasher,
        })
    }

    /// Returns the number of items in the HashSet.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashSet contains no items.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets in the HashSet, which is fixed when it is created.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a reference to the HashSet's [`BuildHasher`].
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Adds the provided `item` to the HashSet, returning true if it wasn't already present.
    ///
    /// If an equal item is already in the set, the set is left unchanged and `item` is dropped.
    pub fn insert(&mut self, item: T) -> bool {
        let index = self.index_from_item(&item);
        let chain = self.buckets[index].get_or_insert_with(Vec::new);

        if chain.contains(&item) {
            return false;
        }

        chain.push(item);
        self.len += 1;
        true
    }

    /// Removes the item equal to `item` from the HashSet, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(item).is_some()
    }

    /// Removes and returns the item equal to `item`, or None if the HashSet doesn't contain it.
    ///
    /// The remaining items in the same bucket keep their relative order.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_from_item(item);
        let chain = self.buckets[index].as_mut()?;
        let position = chain.iter().position(|existing| existing.borrow() == item)?;

        self.len -= 1;
        Some(chain.remove(position))
    }

    /// Returns a reference to the item in the HashSet that is equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        // Q is a borrowed version of T, where equality and hashing carry over the borrow.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_from_item(item);

        // An unallocated bucket can't contain anything.
        self.buckets[index]
            .as_ref()?
            .iter()
            .find(|existing| (*existing).borrow() == item)
    }

    /// Returns true if the HashSet contains an item equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Calculates the index of the bucket for the provided `hashable`. The hash is a u64, so the
    /// remainder is always a valid, non-negative index.
    pub(crate) fn index_from_item<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        let item_hash = self.hasher.hash_one(hashable);
        // UNCHECKED: The capacity is never 0.
        (item_hash % self.cap() as u64) as usize
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            buckets: self.buckets.clone(),
            cap: self.cap,
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("buckets", &DebugBuckets(&self.buckets))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

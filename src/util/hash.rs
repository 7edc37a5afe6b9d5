use std::hash::{BuildHasher, Hash, Hasher};

/// An item with a hash chosen by the caller, independent of its value. Two ManualHashes are equal
/// if their values are equal, so unequal items can be forced into the same bucket.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A Hasher which reassembles the little-endian bytes it is fed, so unsigned integers up to 64
/// bits hash to their own value. Longer inputs are folded in with xor.
#[derive(Debug)]
pub struct IdentityHasher {
    state: u64,
    offset: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state ^= (*byte as u64) << (self.offset * 8);
            self.offset = (self.offset + 1) % 8;
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher {
            state: 0,
            offset: 0,
        }
    }
}

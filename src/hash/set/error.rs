use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroCapacity;

impl Display for ZeroCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to create a HashSet with capacity 0!")
    }
}

impl Error for ZeroCapacity {}

/// The requested capacity was negative or too large to be represented as a `usize`. The rejected
/// value is kept as it was written, since it may not fit in any single integer type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityOutOfRange {
    pub requested: String,
}

impl Display for CapacityOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "HashSet capacity must be a positive value that fits in a usize! Provided: {}",
            self.requested
        )
    }
}

impl Error for CapacityOutOfRange {}

/// The requested number of buckets fits in a `usize`, but can't be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow {
    pub cap: usize,
}

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to allocate {} buckets for HashSet!", self.cap)
    }
}

impl Error for CapacityOverflow {}

/// The error returned when a [`HashSet`](super::HashSet) is created with a capacity that can't
/// hold any buckets, or can't be allocated.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InvalidCapacity {
    Zero(ZeroCapacity),
    OutOfRange(CapacityOutOfRange),
    CapacityOverflow(CapacityOverflow),
}

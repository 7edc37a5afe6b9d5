//! A module containing [`HashSet`] and associated types.
//!
//! As a note, there is no iterator over the elements of a set. The only way to observe a set's
//! contents is through [`contains`](HashSet::contains) and [`get`](HashSet::get).
//!
//! [`HashSet`] is also re-exported under the parent module.

mod error;
mod hash_set;

pub use error::*;
pub use hash_set::*;

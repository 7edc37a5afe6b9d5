//! A hash set with a fixed number of buckets, resolving collisions by chaining.
//!
//! # Purpose
//! This crate holds a single collection, [`HashSet`](hash::HashSet), kept deliberately small: the
//! number of buckets is chosen once, when the set is created, and never changes. Each bucket owns a
//! list of the elements that hash to it, so colliding elements sit side by side rather than being
//! moved around the table.
//!
//! # Method
//! The set is written against the same API shape as the Rust collections (`insert`, `remove`,
//! `contains`, `len`) and uses a [`BuildHasher`](std::hash::BuildHasher) to hash its elements, so
//! any type implementing [`Hash`] and [`Eq`] can be stored.
//!
//! There is no growth, so a set's load factor is entirely up to its owner. A set with too few
//! buckets for its contents still works correctly, it just degrades into linear scans of long
//! chains.
//!
//! # Error Handling
//! Creating a set is the only operation that can fail: a capacity of zero (or a negative one)
//! leaves no bucket to put anything in. The error is returned as a strongly typed enum,
//! [`InvalidCapacity`](hash::set::InvalidCapacity), whose variants wrap unit structs implementing
//! [`Error`](std::error::Error). Every other operation is total.
//!
//! # Dependencies
//! This crate depends on `derive_more` for the derives on its error enum, which saves some very
//! repetitive programming.
//!
//! # Features
//! - `traits` (default): the [`Set`](traits::Set) trait, implemented by [`HashSet`](hash::HashSet).

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;

pub(crate) mod util;

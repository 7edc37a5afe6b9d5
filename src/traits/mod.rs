//! Traits shared by collection types.

pub mod set;

#[doc(inline)]
pub use set::Set;

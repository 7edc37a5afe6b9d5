pub mod fmt;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod panic;
#[cfg(test)]
pub mod result;

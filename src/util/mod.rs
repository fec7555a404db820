#[cfg(test)]
pub mod alloc;
#[cfg(feature = "linked")]
pub mod error;
#[cfg(feature = "linked")]
pub mod fmt;
pub mod panic;
#[cfg(feature = "linked")]
pub mod result;

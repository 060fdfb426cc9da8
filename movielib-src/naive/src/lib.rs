//! Straightforward implementations, used as test oracles.

#[doc(inline)]
pub use sorted_set::{self, *};

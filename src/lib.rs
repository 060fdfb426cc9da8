//! Ranked movie collections backed by a red-black tree.
//!
//! - [`ds`]: the tree ([`ds::RbTree`]).
//! - [`record`]: the [`record::Movie`] record and its ranking order.
//! - [`io`]: loading movies from delimited files.
//! - [`naive`]: reference implementations used by the tests.

pub use ds;
pub use io;
pub use naive;
pub use record;

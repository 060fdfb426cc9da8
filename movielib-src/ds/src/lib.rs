#[doc(inline)]
pub use rb_tree::{self, *};

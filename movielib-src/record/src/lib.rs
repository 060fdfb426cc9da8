#[doc(inline)]
pub use movie::{self, *};

#[doc(inline)]
pub use movie_loader::{self, *};

#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod implementation;

#[doc(inline)]
pub use definition::{Nearest, NearestMatch};

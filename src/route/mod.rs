//! The static route collection and nearest-segment resolution.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod nearest;
#[doc(hidden)]
pub mod segment;
#[doc(hidden)]
pub mod set;

#[doc(inline)]
pub use nearest::{Nearest, NearestMatch};
#[doc(inline)]
pub use segment::Segment;
#[doc(inline)]
pub use set::RouteSet;
pub use error::RouteError;

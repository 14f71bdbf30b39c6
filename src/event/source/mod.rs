//! Providers supplying event batches. The trait seam keeps the transport
//! injectable so tests and the fallback chain can swap implementations.

#[doc(hidden)]
pub mod fallback;
#[doc(hidden)]
pub mod fixed;
#[doc(hidden)]
pub mod http;

#[doc(inline)]
pub use fallback::FallbackEventSource;
#[doc(inline)]
pub use fixed::StaticEventSource;
#[doc(inline)]
pub use http::HttpEventSource;

use crate::event::{EventError, EventRecord};

/// A provider of event record batches.
///
/// A fetch is all-or-nothing: implementations return a complete batch or an
/// error, never a partial set, so callers can replace their previous batch
/// wholesale.
pub trait EventSource {
    fn fetch(&self) -> Result<Vec<EventRecord>, EventError>;
}

//! Fetched event records and the providers that supply them.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod location;
#[doc(hidden)]
pub mod record;
#[doc(hidden)]
pub mod source;

#[doc(inline)]
pub use location::EventLocation;
#[doc(inline)]
pub use record::EventRecord;
#[doc(inline)]
pub use source::{EventSource, FallbackEventSource, HttpEventSource, StaticEventSource};
pub use error::EventError;

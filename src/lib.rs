#![doc = include_str!("../README.md")]

pub mod config;
pub mod event;
pub mod geo;
pub mod route;

#[doc(inline)]
pub use crate::geo::{DistanceStrategy, LatLng};
#[doc(inline)]
pub use crate::route::{Nearest, NearestMatch, RouteSet, Segment};

/// Converts errors from their error type (of the submodule) to a
/// variant of a wrapping error enum.
///
/// ```rust,ignore
/// use nearline::geo::error::GeoError;
/// nearline::impl_err!(GeoError, Error, Geo);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $target:ty, $variant:ident) => {
            impl From<$from> for $target {
                fn from(value: $from) -> Self {
                    <$target>::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}

/// Crate-wide error, aggregating each submodule's error type.
#[derive(Debug)]
pub enum Error {
    Geo(crate::geo::GeoError),
    Route(crate::route::RouteError),
    Event(crate::event::EventError),
    Config(crate::config::ConfigError),
}

impl_err!(crate::geo::GeoError, Error, Geo);
impl_err!(crate::route::RouteError, Error, Route);
impl_err!(crate::event::EventError, Error, Event);
impl_err!(crate::config::ConfigError, Error, Config);

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq)]
pub enum RouteError {
    /// The resolver was invoked over a route set with no segments.
    EmptyRouteSet,
}

pub mod route_matcher;

pub use route_matcher::{RouteMatcher, RouteResolution};

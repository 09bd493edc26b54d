//! All data types for the route-graph library.

pub mod city;
pub mod error;
pub mod itinerary;

pub use city::City;
pub use error::{RouteError, RouteResult};
pub use itinerary::Itinerary;

/// Identifier of a city. Assigned by the caller, unique within a graph.
pub type CityId = i64;

//! RouteGraph: a directed network of named cities connected by one-way routes.
//!
//! Answers two questions about the network: can one city be reached from
//! another, and what is the fewest-hop route between them.

pub mod cli;
pub mod graph;
pub mod network;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{GraphBuilder, RouteGraph, RouteMap, RouteMapEntry, RouteTarget};
pub use network::default_network;
pub use types::{City, CityId, Itinerary, RouteError, RouteResult};

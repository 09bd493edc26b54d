//! In-memory graph operations and the core data structure.

pub mod builder;
pub mod describe;
pub mod route_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use describe::{RouteMap, RouteMapEntry, RouteTarget};
pub use route_graph::RouteGraph;
pub use traversal::{can_reach, shortest_route};

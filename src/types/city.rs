//! The city node type.

use serde::Serialize;

use super::CityId;

/// A named vertex in the route network together with its outgoing routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    /// Caller-assigned identifier, unique within a graph.
    pub id: CityId,
    /// Display name.
    pub name: String,
    /// Route targets in insertion order. Each target appears at most once.
    pub routes: Vec<CityId>,
}

impl City {
    /// Create a city with no outgoing routes.
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            routes: Vec::new(),
        }
    }

    /// Whether a route to `target` is present.
    pub fn has_route_to(&self, target: CityId) -> bool {
        self.routes.contains(&target)
    }

    /// Number of outgoing routes.
    pub fn out_degree(&self) -> usize {
        self.routes.len()
    }
}

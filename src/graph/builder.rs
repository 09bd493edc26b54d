//! Fluent API for building RouteGraph instances.

use crate::types::{City, CityId, RouteResult};

use super::RouteGraph;

/// Fluent builder for constructing a RouteGraph.
///
/// Cities and routes are collected without validation; `build` checks them
/// all at once.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    cities: Vec<City>,
    pending_routes: Vec<(CityId, CityId)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city.
    pub fn city(&mut self, id: CityId, name: &str) -> &mut Self {
        self.cities.push(City::new(id, name));
        self
    }

    /// Add a one-way route between two cities.
    pub fn route(&mut self, from: CityId, to: CityId) -> &mut Self {
        self.pending_routes.push((from, to));
        self
    }

    /// Build the final RouteGraph.
    ///
    /// Cities are inserted first, then routes in the order they were given,
    /// so the usual validation applies to every route.
    pub fn build(&self) -> RouteResult<RouteGraph> {
        let mut graph = RouteGraph::from_parts(self.cities.clone())?;
        for &(from, to) in &self.pending_routes {
            graph.add_route(from, to)?;
        }
        Ok(graph)
    }
}

//! Core graph structure: cities with their outgoing routes plus an ID index.

use std::collections::HashMap;

use log::{debug, warn};

use crate::types::{City, CityId, Itinerary, RouteError, RouteResult};

use super::describe::{self, RouteMap};
use super::traversal;

/// A directed, unweighted route network.
///
/// Cities are kept in insertion order, which is also the order used for
/// display. Each city owns its outgoing routes, stored as target IDs in
/// insertion order; BFS expands neighbours in that order, so ties between
/// equally short routes go to the route added first.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// All cities, in insertion order.
    cities: Vec<City>,
    /// City ID -> position in `cities`. Positions are stable because cities
    /// are never removed.
    index: HashMap<CityId, usize>,
}

impl RouteGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from pre-assembled cities (used by the builder).
    ///
    /// Duplicate city IDs, self-loops and repeated routes are rejected.
    /// Route targets that name no city are kept; traversal skips them and
    /// `describe` renders them as unresolved.
    pub fn from_parts(cities: Vec<City>) -> RouteResult<Self> {
        let mut index = HashMap::with_capacity(cities.len());
        for (pos, city) in cities.iter().enumerate() {
            if index.insert(city.id, pos).is_some() {
                return Err(RouteError::DuplicateCity(city.id));
            }
            for (i, &target) in city.routes.iter().enumerate() {
                if target == city.id {
                    return Err(RouteError::SelfLoop(city.id));
                }
                if city.routes[..i].contains(&target) {
                    return Err(RouteError::DuplicateRoute {
                        from: city.id,
                        to: target,
                    });
                }
            }
        }
        Ok(Self { cities, index })
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of routes across all cities.
    pub fn route_count(&self) -> usize {
        self.cities.iter().map(City::out_degree).sum()
    }

    /// True when the graph holds no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Whether a city with this ID exists.
    pub fn contains(&self, id: CityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get a city by ID.
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.position(id).map(|pos| &self.cities[pos])
    }

    /// All cities (immutable slice, insertion order).
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Outgoing route targets of a city, empty if the city does not exist.
    pub fn routes_from(&self, id: CityId) -> &[CityId] {
        self.city(id).map(|c| c.routes.as_slice()).unwrap_or(&[])
    }

    pub(crate) fn position(&self, id: CityId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Add a city. A duplicate ID leaves the existing city untouched.
    pub fn add_city(&mut self, id: CityId, name: &str) -> RouteResult<()> {
        if self.contains(id) {
            warn!("City with ID {} already exists", id);
            return Err(RouteError::DuplicateCity(id));
        }
        self.index.insert(id, self.cities.len());
        self.cities.push(City::new(id, name));
        debug!("Added city {} ({})", id, name);
        Ok(())
    }

    /// Add a one-way route between two existing cities.
    ///
    /// Checks run in order and the first failure is reported: source
    /// exists, destination exists, no self-loop, route not already present.
    pub fn add_route(&mut self, from: CityId, to: CityId) -> RouteResult<()> {
        let pos = self
            .check_new_route(from, to)
            .inspect_err(|e| warn!("Rejected route {} -> {}: {}", from, to, e))?;
        self.cities[pos].routes.push(to);
        debug!("Added route {} -> {}", from, to);
        Ok(())
    }

    fn check_new_route(&self, from: CityId, to: CityId) -> RouteResult<usize> {
        let pos = self.position(from).ok_or(RouteError::MissingSource(from))?;
        if !self.contains(to) {
            return Err(RouteError::MissingDestination(to));
        }
        if from == to {
            return Err(RouteError::SelfLoop(from));
        }
        if self.cities[pos].has_route_to(to) {
            return Err(RouteError::DuplicateRoute { from, to });
        }
        Ok(pos)
    }

    /// Remove a route, keeping the remaining routes in their original order.
    pub fn remove_route(&mut self, from: CityId, to: CityId) -> RouteResult<()> {
        let pos = match self.position(from) {
            Some(pos) => pos,
            None => {
                warn!("Source city {} not found", from);
                return Err(RouteError::MissingSource(from));
            }
        };
        let routes = &mut self.cities[pos].routes;
        match routes.iter().position(|&t| t == to) {
            Some(i) => {
                routes.remove(i);
                debug!("Removed route {} -> {}", from, to);
                Ok(())
            }
            None => {
                warn!("Route {} -> {} does not exist", from, to);
                Err(RouteError::RouteNotFound { from, to })
            }
        }
    }

    /// Whether `to` can be reached from `from` by following routes.
    pub fn can_reach(&self, from: CityId, to: CityId) -> bool {
        traversal::can_reach(self, from, to)
    }

    /// Fewest-hop route from `from` to `to`; `Ok(None)` if unreachable.
    pub fn shortest_route(&self, from: CityId, to: CityId) -> RouteResult<Option<Itinerary>> {
        traversal::shortest_route(self, from, to)
    }

    /// `(id, name)` for every city, in insertion order.
    pub fn list_cities(&self) -> Vec<(CityId, &str)> {
        describe::list_cities(self)
    }

    /// Adjacency view of the whole network with target names resolved.
    pub fn describe(&self) -> RouteMap {
        describe::describe(self)
    }
}

//! Read-only views of the network and their text rendering.

use std::fmt;

use serde::Serialize;

use crate::types::{CityId, Itinerary};

use super::RouteGraph;

/// A route target as seen from its source city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteTarget {
    /// Target resolves to a city in the graph.
    Resolved { id: CityId, name: String },
    /// Target ID names no city.
    Unresolved { id: CityId },
}

impl RouteTarget {
    /// The target city ID.
    pub fn id(&self) -> CityId {
        match self {
            Self::Resolved { id, .. } | Self::Unresolved { id } => *id,
        }
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved { id, name } => write!(f, "{}({})", id, name),
            Self::Unresolved { id } => write!(f, "{}(?)", id),
        }
    }
}

/// One city and its outgoing routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMapEntry {
    pub id: CityId,
    pub name: String,
    pub routes: Vec<RouteTarget>,
}

/// Adjacency-list view of the whole network, cities in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMap {
    pub entries: Vec<RouteMapEntry>,
}

impl fmt::Display for RouteMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Route Map ===")?;
        if self.entries.is_empty() {
            return writeln!(f, "No cities in the network");
        }
        for entry in &self.entries {
            write!(f, "{} ({}) ->", entry.id, entry.name)?;
            if entry.routes.is_empty() {
                write!(f, " [no outgoing routes]")?;
            }
            for target in &entry.routes {
                write!(f, " {}", target)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// `(id, name)` for every city, in insertion order.
pub fn list_cities(graph: &RouteGraph) -> Vec<(CityId, &str)> {
    graph
        .cities()
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect()
}

/// Build the adjacency view, resolving each route target to its name.
pub fn describe(graph: &RouteGraph) -> RouteMap {
    let entries = graph
        .cities()
        .iter()
        .map(|city| RouteMapEntry {
            id: city.id,
            name: city.name.clone(),
            routes: city
                .routes
                .iter()
                .map(|&id| match graph.city(id) {
                    Some(target) => RouteTarget::Resolved {
                        id,
                        name: target.name.clone(),
                    },
                    None => RouteTarget::Unresolved { id },
                })
                .collect(),
        })
        .collect();
    RouteMap { entries }
}

/// Render a city listing.
pub fn format_city_list(cities: &[(CityId, &str)]) -> String {
    let mut out = String::from("=== Cities ===\n");
    if cities.is_empty() {
        out.push_str("No cities in the network\n");
    }
    for (id, name) in cities {
        out.push_str(&format!("ID {}: {}\n", id, name));
    }
    out
}

/// Render an itinerary as city names joined by arrows.
///
/// Stops that no longer resolve are shown by ID.
pub fn format_itinerary(graph: &RouteGraph, itinerary: &Itinerary) -> String {
    itinerary
        .stops
        .iter()
        .map(|&id| match graph.city(id) {
            Some(city) => city.name.clone(),
            None => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

//! Result type for shortest-route queries.

use serde::Serialize;

use super::CityId;

/// An ordered list of cities from an origin to a destination, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    /// City IDs in travel order.
    pub stops: Vec<CityId>,
}

impl Itinerary {
    /// Number of routes travelled (one less than the number of stops).
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// First city of the itinerary.
    pub fn origin(&self) -> Option<CityId> {
        self.stops.first().copied()
    }

    /// Last city of the itinerary.
    pub fn destination(&self) -> Option<CityId> {
        self.stops.last().copied()
    }
}

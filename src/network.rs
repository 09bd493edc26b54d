//! The default airline network loaded at start-up.

use crate::graph::{GraphBuilder, RouteGraph};
use crate::types::{CityId, RouteResult};

/// Seed cities as `(id, name)`.
pub const DEFAULT_CITIES: [(CityId, &str); 15] = [
    (1, "New Delhi"),
    (2, "Mumbai"),
    (3, "Bengaluru"),
    (4, "Chennai"),
    (5, "Kolkata"),
    (6, "Hyderabad"),
    (7, "Ahmedabad"),
    (8, "Pune"),
    (9, "Jaipur"),
    (10, "Goa"),
    (11, "Lucknow"),
    (12, "Patna"),
    (13, "Bhopal"),
    (14, "Surat"),
    (15, "Indore"),
];

/// Seed routes as `(from, to)`. Two rings plus chords.
pub const DEFAULT_ROUTES: [(CityId, CityId); 30] = [
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 1),
    (1, 6),
    (6, 7),
    (7, 8),
    (8, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (12, 13),
    (13, 14),
    (14, 15),
    (15, 1),
    (2, 8),
    (3, 9),
    (4, 10),
    (5, 11),
    (6, 12),
    (7, 13),
    (8, 14),
    (9, 15),
    (10, 1),
    (11, 2),
    (12, 3),
    (13, 4),
    (14, 5),
    (15, 6),
];

/// Build the default network.
pub fn default_network() -> RouteResult<RouteGraph> {
    let mut builder = GraphBuilder::new();
    for (id, name) in DEFAULT_CITIES {
        builder.city(id, name);
    }
    for (from, to) in DEFAULT_ROUTES {
        builder.route(from, to);
    }
    let graph = builder.build()?;
    log::info!(
        "Loaded default network: {} cities, {} routes",
        graph.city_count(),
        graph.route_count()
    );
    Ok(graph)
}

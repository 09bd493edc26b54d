//! Error types for the route graph.

use thiserror::Error;

use super::CityId;

/// All errors that can occur in the route-graph library.
///
/// Every variant except `Io`, `Json` and `Readline` is recoverable: the
/// operation that returned it left the graph exactly as it found it.
#[derive(Error, Debug)]
pub enum RouteError {
    /// A city with this ID is already in the graph.
    #[error("City with ID {0} already exists")]
    DuplicateCity(CityId),

    /// The source city of a route does not exist.
    #[error("Source city {0} not found")]
    MissingSource(CityId),

    /// The destination city of a route does not exist.
    #[error("Destination city {0} not found")]
    MissingDestination(CityId),

    /// A route from a city to itself.
    #[error("Cannot create route from city {0} to itself")]
    SelfLoop(CityId),

    /// The route is already present.
    #[error("Route {from} -> {to} already exists")]
    DuplicateRoute { from: CityId, to: CityId },

    /// The route to remove is not present.
    #[error("Route {from} -> {to} does not exist")]
    RouteNotFound { from: CityId, to: CityId },

    /// A query named a city that is not in the graph.
    #[error("Invalid endpoints: city {from} or city {to} not found")]
    InvalidEndpoints { from: CityId, to: CityId },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Line editor failure in the interactive menu.
    #[error("Readline error: {0}")]
    Readline(String),
}

/// Convenience result type for route-graph operations.
pub type RouteResult<T> = Result<T, RouteError>;

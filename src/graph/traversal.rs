//! Graph traversal algorithms (BFS).
//!
//! Both searches work on city positions rather than IDs so the visited set
//! and predecessor table are plain vectors. Route targets that do not
//! resolve to a city are skipped.

use std::collections::VecDeque;

use log::debug;

use crate::types::{CityId, Itinerary, RouteError, RouteResult};

use super::RouteGraph;

/// Neighbour positions of the city at `pos`, in route insertion order.
fn neighbors(graph: &RouteGraph, pos: usize) -> impl Iterator<Item = usize> + '_ {
    graph.cities()[pos]
        .routes
        .iter()
        .filter_map(move |&target| graph.position(target))
}

/// Whether any sequence of routes leads from `from` to `to`.
///
/// Unknown cities are never reachable. A city always reaches itself.
pub fn can_reach(graph: &RouteGraph, from: CityId, to: CityId) -> bool {
    let (Some(start), Some(goal)) = (graph.position(from), graph.position(to)) else {
        return false;
    };
    if from == to {
        return true;
    }

    let mut visited = vec![false; graph.city_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    // Mark on enqueue so no city enters the queue twice.
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            debug!("City {} reachable from {}", to, from);
            return true;
        }
        for next in neighbors(graph, current) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    debug!("City {} not reachable from {}", to, from);
    false
}

/// BFS shortest route by hop count.
///
/// Returns `InvalidEndpoints` if either city is unknown and `Ok(None)` if
/// `to` cannot be reached. Among equally short routes the one whose edges
/// were inserted first wins, since the first discoverer of a city becomes
/// its predecessor.
pub fn shortest_route(
    graph: &RouteGraph,
    from: CityId,
    to: CityId,
) -> RouteResult<Option<Itinerary>> {
    let (Some(start), Some(goal)) = (graph.position(from), graph.position(to)) else {
        return Err(RouteError::InvalidEndpoints { from, to });
    };

    let n = graph.city_count();
    let mut visited = vec![false; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for next in neighbors(graph, current) {
            if !visited[next] {
                visited[next] = true;
                predecessor[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    if !visited[goal] {
        debug!("No route from {} to {}", from, to);
        return Ok(None);
    }

    let cities = graph.cities();
    let mut stops = vec![cities[goal].id];
    let mut trace = goal;
    while let Some(prev) = predecessor[trace] {
        stops.push(cities[prev].id);
        trace = prev;
    }
    stops.reverse();

    let itinerary = Itinerary { stops };
    debug!(
        "Shortest route {} -> {}: {} hops",
        from,
        to,
        itinerary.hops()
    );
    Ok(Some(itinerary))
}

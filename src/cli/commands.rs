//! CLI command implementations.
//!
//! Each command writes its result to `out` as plain text or, when `json`
//! is set, as a JSON document. Rejected operations are returned as errors
//! for the caller to report.

use std::io::Write;

use serde_json::json;

use crate::graph::describe::{format_city_list, format_itinerary};
use crate::graph::RouteGraph;
use crate::types::{CityId, RouteResult};

fn write_json(out: &mut impl Write, value: &serde_json::Value) -> RouteResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// List all cities.
pub fn cmd_cities(graph: &RouteGraph, json: bool, out: &mut impl Write) -> RouteResult<()> {
    let cities = graph.list_cities();
    if json {
        let list: Vec<serde_json::Value> = cities
            .iter()
            .map(|(id, name)| json!({"id": id, "name": name}))
            .collect();
        write_json(out, &json!(list))
    } else {
        write!(out, "{}", format_city_list(&cities))?;
        Ok(())
    }
}

/// Display the full route map.
pub fn cmd_map(graph: &RouteGraph, json: bool, out: &mut impl Write) -> RouteResult<()> {
    let map = graph.describe();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
    } else {
        write!(out, "{}", map)?;
    }
    Ok(())
}

/// Check whether `to` is reachable from `from`.
pub fn cmd_reach(
    graph: &RouteGraph,
    from: CityId,
    to: CityId,
    json: bool,
    out: &mut impl Write,
) -> RouteResult<()> {
    let reachable = graph.can_reach(from, to);
    if json {
        return write_json(out, &json!({"from": from, "to": to, "reachable": reachable}));
    }
    if reachable {
        writeln!(out, "\u{2713} Route exists from city {} to city {}", from, to)?;
    } else {
        writeln!(
            out,
            "\u{2717} No route available from city {} to city {}",
            from, to
        )?;
    }
    Ok(())
}

/// Find the shortest route between two cities.
pub fn cmd_path(
    graph: &RouteGraph,
    from: CityId,
    to: CityId,
    json: bool,
    out: &mut impl Write,
) -> RouteResult<()> {
    let itinerary = graph.shortest_route(from, to)?;
    if json {
        let value = match &itinerary {
            Some(it) => json!({
                "from": from,
                "to": to,
                "found": true,
                "hops": it.hops(),
                "stops": it.stops,
            }),
            None => json!({"from": from, "to": to, "found": false}),
        };
        return write_json(out, &value);
    }
    match itinerary {
        Some(it) => {
            writeln!(
                out,
                "Shortest route from city {} to city {} ({} stops):",
                from,
                to,
                it.hops()
            )?;
            writeln!(out, "{}", format_itinerary(graph, &it))?;
        }
        None => writeln!(out, "No route found from city {} to city {}", from, to)?,
    }
    Ok(())
}

/// Add a one-way route. The JSON form also carries the resulting map.
pub fn cmd_add_route(
    graph: &mut RouteGraph,
    from: CityId,
    to: CityId,
    json: bool,
    out: &mut impl Write,
) -> RouteResult<()> {
    graph.add_route(from, to)?;
    if json {
        write_json(
            out,
            &json!({"added": {"from": from, "to": to}, "map": graph.describe()}),
        )
    } else {
        writeln!(out, "Added route {} -> {}", from, to)?;
        Ok(())
    }
}

/// Remove a one-way route. The JSON form also carries the resulting map.
pub fn cmd_remove_route(
    graph: &mut RouteGraph,
    from: CityId,
    to: CityId,
    json: bool,
    out: &mut impl Write,
) -> RouteResult<()> {
    graph.remove_route(from, to)?;
    if json {
        write_json(
            out,
            &json!({"removed": {"from": from, "to": to}, "map": graph.describe()}),
        )
    } else {
        writeln!(out, "Removed route {} -> {}", from, to)?;
        Ok(())
    }
}

/// Summary counts.
pub fn cmd_stats(graph: &RouteGraph, json: bool, out: &mut impl Write) -> RouteResult<()> {
    if json {
        return write_json(
            out,
            &json!({"cities": graph.city_count(), "routes": graph.route_count()}),
        );
    }
    writeln!(out, "Cities: {}", graph.city_count())?;
    writeln!(out, "Routes: {}", graph.route_count())?;
    Ok(())
}

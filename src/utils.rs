//! Plan export and reporting helpers.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::problem::{Depot, Node};
use crate::solution::{Route, RoutingSolution};

/// Total travel distance of a route in kilometers: depot to first node,
/// node to node, last node back to the depot.
///
/// Node ids missing from the node list are skipped, matching the
/// algorithm's tolerance for unknown references.
pub fn route_distance(route: &Route, depot: &Depot, nodes: &[Node]) -> f64 {
    let by_id: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut total = 0.0;
    let mut previous = depot.coordinate;

    for id in &route.nodes {
        if let Some(node) = by_id.get(id.as_str()) {
            total += previous.distance_to(&node.coordinate);
            previous = node.coordinate;
        }
    }

    total + previous.distance_to(&depot.coordinate)
}

/// Save a routing plan as readable text.
pub fn save_plan<P: AsRef<Path>>(
    solution: &RoutingSolution,
    depots: &[Depot],
    nodes: &[Node],
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Routing plan: {} routes across {} depots",
        solution.route_count(),
        solution.routes_by_depot.len()
    )?;
    writeln!(file)?;

    for depot in depots {
        let Some(routes) = solution.routes_for(&depot.id) else {
            continue;
        };

        writeln!(file, "Depot {}:", depot.id)?;
        for (i, route) in routes.iter().enumerate() {
            write!(file, "  Route #{}: {}", i + 1, depot.id)?;
            for id in &route.nodes {
                write!(file, " -> {}", id)?;
            }
            writeln!(file, " -> {}", depot.id)?;
            writeln!(
                file,
                "    Load: {:.2} / {:.2}",
                route.used_capacity(),
                route.vehicle_capacity
            )?;
            writeln!(
                file,
                "    Distance: {:.2} km",
                route_distance(route, depot, nodes)
            )?;
        }
        writeln!(file)?;
    }

    if !solution.diagnostics.is_empty() {
        writeln!(file, "Unrouted:")?;
        for diagnostic in &solution.diagnostics {
            writeln!(file, "  {}", diagnostic)?;
        }
    }

    Ok(())
}

/// Serialize a routing plan to pretty-printed JSON.
pub fn plan_to_json(solution: &RoutingSolution) -> serde_json::Result<String> {
    serde_json::to_string_pretty(solution)
}

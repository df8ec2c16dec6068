//! Route and solution types produced by the merge phase.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::report::Diagnostic;

/// An ordered visit sequence for one vehicle.
///
/// Only the two endpoints are open for further growth: nodes attach at
/// the front or back, and whole routes concatenate tail-to-head. The
/// remaining free capacity is tracked alongside and never drops below
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Node ids in visit order.
    pub nodes: Vec<String>,
    /// Free capacity left on the vehicle.
    pub remaining_capacity: f64,
    /// Capacity of the vehicle this route originated from.
    pub vehicle_capacity: f64,
}

impl Route {
    /// First node of the route, one of its two open endpoints.
    pub fn first(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    /// Last node of the route, the other open endpoint.
    pub fn last(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Number of nodes on the route.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the route has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the route visits the given node.
    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.iter().any(|id| id == node_id)
    }

    /// Capacity consumed so far. Negative when pickups outweigh
    /// drop-offs.
    pub fn used_capacity(&self) -> f64 {
        self.vehicle_capacity - self.remaining_capacity
    }
}

/// Result of a single savings merge over one depot's node list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub routes: Vec<Route>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-depot route collections for a whole multi-depot problem.
#[derive(Clone, Serialize, Deserialize)]
pub struct RoutingSolution {
    /// Routes keyed by depot id. Depots that attracted no vendor cluster
    /// are absent.
    pub routes_by_depot: HashMap<String, Vec<Route>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RoutingSolution {
    /// Create an empty solution.
    pub fn new() -> Self {
        RoutingSolution {
            routes_by_depot: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Total number of routes across all depots.
    pub fn route_count(&self) -> usize {
        self.routes_by_depot.values().map(Vec::len).sum()
    }

    /// Routes originating at the given depot, if it received any cluster.
    pub fn routes_for(&self, depot_id: &str) -> Option<&[Route]> {
        self.routes_by_depot.get(depot_id).map(Vec::as_slice)
    }

    /// Whether every node was routed and every vendor found a depot.
    pub fn is_fully_routed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Debug for RoutingSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Routing solution:")?;
        writeln!(f, "  Depots: {}", self.routes_by_depot.len())?;
        writeln!(f, "  Routes: {}", self.route_count())?;
        writeln!(f, "  Diagnostics: {}", self.diagnostics.len())?;

        let mut depot_ids: Vec<&String> = self.routes_by_depot.keys().collect();
        depot_ids.sort();

        for depot_id in depot_ids {
            writeln!(f, "  Depot {}:", depot_id)?;
            for (i, route) in self.routes_by_depot[depot_id].iter().enumerate() {
                writeln!(
                    f,
                    "    Route {}: {:?} (load: {:.2} / {:.2})",
                    i,
                    route.nodes,
                    route.used_capacity(),
                    route.vehicle_capacity
                )?;
            }
        }

        for diagnostic in &self.diagnostics {
            writeln!(f, "  ! {}", diagnostic)?;
        }

        Ok(())
    }
}

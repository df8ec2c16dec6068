//! Clarke-Wright greedy route merging.
//!
//! Savings are processed in descending order; each one either opens a new
//! two-node route, extends an existing route at one of its endpoints, or
//! concatenates two routes tail-to-head, always subject to the capacity
//! invariant. Nodes never reached by a profitable merge get singleton
//! fallback routes when they fit the vehicle.

use log::{debug, warn};
use std::collections::HashMap;
use std::time::Instant;

use crate::config::Config;
use crate::problem::{Depot, Node};
use crate::report::Diagnostic;
use crate::savings::{compute_savings, Saving};
use crate::solution::{MergeOutcome, Route};

/// Owning store for in-progress routes plus a node-to-route index.
///
/// Routes keep their creation slot for their whole life. A concatenation
/// re-registers the absorbed route's nodes under the surviving slot and
/// drains the absorbed one; drained slots are dropped when the pool is
/// consumed.
struct RoutePool {
    routes: Vec<Route>,
    assignment: HashMap<String, usize>,
}

impl RoutePool {
    fn new() -> Self {
        RoutePool {
            routes: Vec::new(),
            assignment: HashMap::new(),
        }
    }

    /// Slot of the route currently owning the node, if any.
    fn route_of(&self, node_id: &str) -> Option<usize> {
        self.assignment.get(node_id).copied()
    }

    /// Open a two-node route for a pair of unassigned nodes.
    fn try_pair(&mut self, depot: &Depot, i: &Node, j: &Node) {
        let remaining = depot.capacity - i.demand - j.demand;
        if remaining < 0.0 {
            return;
        }

        let slot = self.routes.len();
        self.routes.push(Route {
            nodes: vec![i.id.clone(), j.id.clone()],
            remaining_capacity: remaining,
            vehicle_capacity: depot.capacity,
        });
        self.assignment.insert(i.id.clone(), slot);
        self.assignment.insert(j.id.clone(), slot);
        debug!(
            "paired {} and {} (remaining capacity {:.2})",
            i.id, j.id, remaining
        );
    }

    /// Open a singleton route for a node left over after merging.
    fn spawn_single(&mut self, node: &Node, capacity: f64) {
        let slot = self.routes.len();
        self.routes.push(Route {
            nodes: vec![node.id.clone()],
            remaining_capacity: capacity - node.demand,
            vehicle_capacity: capacity,
        });
        self.assignment.insert(node.id.clone(), slot);
    }

    /// Attach an unassigned node next to `anchor` on the route in `slot`.
    ///
    /// The anchor must currently sit at an endpoint; the node goes on the
    /// matching end. An interior anchor or a capacity violation leaves
    /// the route unchanged.
    fn try_attach(&mut self, slot: usize, anchor: &Node, node: &Node) {
        let route = &self.routes[slot];

        let at_front = route.first() == Some(anchor.id.as_str());
        let at_back = route.last() == Some(anchor.id.as_str());
        if !at_front && !at_back {
            return;
        }

        let remaining = route.remaining_capacity - node.demand;
        if remaining < 0.0 {
            return;
        }

        let route = &mut self.routes[slot];
        if at_front {
            route.nodes.insert(0, node.id.clone());
        } else {
            route.nodes.push(node.id.clone());
        }
        route.remaining_capacity = remaining;
        self.assignment.insert(node.id.clone(), slot);
        debug!("attached {} next to {}", node.id, anchor.id);
    }

    /// Concatenate two routes if the saving's endpoints sit at the
    /// joining ends.
    ///
    /// A route is a path; it only joins another tail-to-head. Either
    /// `node_i` ends its route and `node_j` starts the other, or the
    /// mirror.
    fn try_concat(&mut self, slot_i: usize, node_i: &Node, slot_j: usize, node_j: &Node) {
        let route_i = &self.routes[slot_i];
        let route_j = &self.routes[slot_j];

        // Both routes draw on the same vehicle, so the combined free
        // capacity counts the whole capacity once.
        let remaining =
            route_i.remaining_capacity + route_j.remaining_capacity - route_i.vehicle_capacity;
        if remaining < 0.0 {
            return;
        }

        let i_id = node_i.id.as_str();
        let j_id = node_j.id.as_str();

        let (survivor, absorbed) =
            if route_i.last() == Some(i_id) && route_j.first() == Some(j_id) {
                (slot_i, slot_j)
            } else if route_i.first() == Some(i_id) && route_j.last() == Some(j_id) {
                (slot_j, slot_i)
            } else {
                return;
            };

        let mut absorbed_nodes = std::mem::take(&mut self.routes[absorbed].nodes);
        for id in &absorbed_nodes {
            self.assignment.insert(id.clone(), survivor);
        }

        let route = &mut self.routes[survivor];
        route.nodes.append(&mut absorbed_nodes);
        route.remaining_capacity = remaining;
        debug!(
            "concatenated routes at {} -> {} (remaining capacity {:.2})",
            node_i.id, node_j.id, remaining
        );
    }

    /// Surviving routes in creation order.
    fn into_routes(self) -> Vec<Route> {
        self.routes
            .into_iter()
            .filter(|route| !route.is_empty())
            .collect()
    }
}

/// Build routes for one depot with the Clarke-Wright savings heuristic.
///
/// Savings are ranked descending by value with a stable sort, so equal
/// values keep their production order; that ordering decides which merges
/// happen first and is part of the observable contract.
pub fn clarke_wright_merge(depot: &Depot, nodes: &[Node], config: &Config) -> MergeOutcome {
    let mut savings = compute_savings(depot, nodes);
    savings.sort_by(|a, b| b.value.total_cmp(&a.value));
    merge_ranked_savings(depot, nodes, &savings, config)
}

/// Process an already-ranked savings list into routes.
///
/// Separated from [`clarke_wright_merge`] so a caller can inspect or
/// re-rank the savings list; the list is consumed in the given order.
pub fn merge_ranked_savings(
    depot: &Depot,
    nodes: &[Node],
    savings: &[Saving],
    config: &Config,
) -> MergeOutcome {
    let by_id: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let deadline = config.time_limit.map(|limit| Instant::now() + limit);

    let mut pool = RoutePool::new();
    let mut diagnostics = Vec::new();

    for (index, saving) in savings.iter().enumerate() {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                let skipped = savings.len() - index;
                warn!(
                    "merge deadline expired at depot {}; skipping {} savings",
                    depot.id, skipped
                );
                diagnostics.push(Diagnostic::DeadlineExpired {
                    savings_skipped: skipped,
                });
                break;
            }
        }

        let Some(node_i) = by_id.get(saving.first.as_str()).copied() else {
            diagnostics.push(Diagnostic::UnknownNodeReference {
                node_id: saving.first.clone(),
                paired_with: saving.second.clone(),
            });
            continue;
        };
        let Some(node_j) = by_id.get(saving.second.as_str()).copied() else {
            diagnostics.push(Diagnostic::UnknownNodeReference {
                node_id: saving.second.clone(),
                paired_with: saving.first.clone(),
            });
            continue;
        };

        match (pool.route_of(&node_i.id), pool.route_of(&node_j.id)) {
            (None, None) => pool.try_pair(depot, node_i, node_j),
            (Some(slot), None) => pool.try_attach(slot, node_i, node_j),
            (None, Some(slot)) => pool.try_attach(slot, node_j, node_i),
            (Some(a), Some(b)) if a == b => {}
            (Some(a), Some(b)) => pool.try_concat(a, node_i, b, node_j),
        }
    }

    // Singleton fallback, in input-list order.
    for node in nodes {
        if pool.route_of(&node.id).is_some() {
            continue;
        }

        if node.fits_alone(depot.capacity) {
            pool.spawn_single(node, depot.capacity);
        } else {
            warn!(
                "node {} (demand {:.2}) does not fit vehicle capacity {:.2} at depot {}",
                node.id, node.demand, depot.capacity, depot.id
            );
            diagnostics.push(Diagnostic::DemandExceedsCapacity {
                node_id: node.id.clone(),
                demand: node.demand,
                capacity: depot.capacity,
            });
        }
    }

    MergeOutcome {
        routes: pool.into_routes(),
        diagnostics,
    }
}

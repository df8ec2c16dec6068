//! Pairwise savings computation for the Clarke-Wright heuristic.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::problem::{Depot, Node, NodeKind};

/// The distance saved by serving two orders on one route instead of two
/// separate depot round trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saving {
    pub first: String,
    pub second: String,
    pub value: f64,
}

/// Compute `s(i, j) = d(depot, i) + d(depot, j) - d(i, j)` for every
/// unordered pair of distinct order nodes.
///
/// Vendors never appear as saving endpoints; a vendor anchors its cluster
/// the way the depot anchors the whole problem. Pair production follows
/// the input node list order, which keeps downstream tie-breaking
/// deterministic.
pub fn compute_savings(depot: &Depot, nodes: &[Node]) -> Vec<Saving> {
    nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Order)
        .tuple_combinations()
        .map(|(i, j)| Saving {
            first: i.id.clone(),
            second: j.id.clone(),
            value: depot.coordinate.distance_to(&i.coordinate)
                + depot.coordinate.distance_to(&j.coordinate)
                - i.coordinate.distance_to(&j.coordinate),
        })
        .collect()
}

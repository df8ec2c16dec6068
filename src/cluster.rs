//! Nearest-depot clustering for the multi-depot extension.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::problem::{Depot, Node, VendorOrderCluster};
use crate::report::Diagnostic;

/// Result of partitioning vendors and their orders across depots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterOutcome {
    /// Clusters keyed by depot id. Depots that attracted no vendor are
    /// absent.
    pub clusters: HashMap<String, Vec<VendorOrderCluster>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Assign each vendor, with the orders referencing it, to its nearest
/// depot by great-circle distance.
///
/// Ties go to the earliest depot in the input list. An empty depot list
/// leaves every vendor unassigned and reports each one. Inputs are not
/// mutated.
pub fn cluster_by_nearest_depot(
    depots: &[Depot],
    vendors: &[Node],
    orders: &[Node],
) -> ClusterOutcome {
    let mut clusters: HashMap<String, Vec<VendorOrderCluster>> = HashMap::new();
    let mut diagnostics = Vec::new();

    let vendor_ids: HashSet<&str> = vendors.iter().map(|v| v.id.as_str()).collect();
    for order in orders {
        match &order.vendor_id {
            Some(vendor_id) if vendor_ids.contains(vendor_id.as_str()) => {}
            Some(vendor_id) => warn!(
                "order {} references unknown vendor {}; dropped from clustering",
                order.id, vendor_id
            ),
            None => warn!(
                "order {} has no vendor reference; dropped from clustering",
                order.id
            ),
        }
    }

    for vendor in vendors {
        let mut nearest: Option<(&Depot, f64)> = None;
        for depot in depots {
            let distance = depot.coordinate.distance_to(&vendor.coordinate);
            // Strict comparison: the first depot in input order wins ties.
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((depot, distance));
            }
        }

        let Some((depot, _)) = nearest else {
            diagnostics.push(Diagnostic::NoDepotAvailable {
                vendor_id: vendor.id.clone(),
            });
            continue;
        };

        let cluster_orders: Vec<Node> = orders
            .iter()
            .filter(|order| order.vendor_id.as_deref() == Some(vendor.id.as_str()))
            .cloned()
            .collect();

        clusters
            .entry(depot.id.clone())
            .or_default()
            .push(VendorOrderCluster {
                vendor: vendor.clone(),
                orders: cluster_orders,
            });
    }

    ClusterOutcome {
        clusters,
        diagnostics,
    }
}

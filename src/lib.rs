//! # CW-MDVRP
//!
//! A Clarke-Wright savings heuristic for the multi-depot Capacitated
//! Vehicle Routing Problem (CVRP).
//!
//! Vendors (pickup points) and their orders (drop-offs) are partitioned
//! to their nearest depot, then each vendor cluster is routed
//! independently with the classic savings construction: compute the
//! pairwise distance saved by serving two orders on one route instead of
//! two separate depot round trips, rank the savings descending, and
//! greedily grow simple-path routes under the vehicle capacity
//! constraint.
//!
//! Based on the savings algorithm of "Scheduling of Vehicles from a
//! Central Depot to a Number of Delivery Points" by Clarke and Wright
//! (1964).

pub mod cluster;
pub mod config;
pub mod geo;
pub mod merge;
pub mod problem;
pub mod report;
pub mod savings;
pub mod solution;
pub mod utils;

use log::debug;
use std::collections::HashMap;

use crate::cluster::cluster_by_nearest_depot;
use crate::config::Config;
use crate::merge::clarke_wright_merge;
use crate::problem::{Depot, Node};
use crate::solution::RoutingSolution;

/// The top-level router: clusters vendors to their nearest depots and
/// runs the savings merge once per cluster.
pub struct MultiDepotRouter {
    pub config: Config,
}

impl MultiDepotRouter {
    /// Create a router with the given configuration.
    pub fn new(config: Config) -> Self {
        MultiDepotRouter { config }
    }

    /// Route all vendors and orders from their nearest depots.
    ///
    /// The result maps each depot id to the routes originating there;
    /// depots that attracted no vendor cluster are absent from the map.
    /// Conditions that excluded a node or vendor are collected in the
    /// solution's diagnostics.
    pub fn route(&self, depots: &[Depot], vendors: &[Node], orders: &[Node]) -> RoutingSolution {
        let clustered = cluster_by_nearest_depot(depots, vendors, orders);

        let mut routes_by_depot = HashMap::new();
        let mut diagnostics = clustered.diagnostics;

        for depot in depots {
            let Some(clusters) = clustered.clusters.get(&depot.id) else {
                continue;
            };

            let mut depot_routes = Vec::new();
            for cluster in clusters {
                let nodes = cluster.node_list();
                let mut outcome = clarke_wright_merge(depot, &nodes, &self.config);
                depot_routes.append(&mut outcome.routes);
                diagnostics.extend(outcome.diagnostics);
            }

            debug!(
                "depot {}: {} routes across {} clusters",
                depot.id,
                depot_routes.len(),
                clusters.len()
            );
            routes_by_depot.insert(depot.id.clone(), depot_routes);
        }

        RoutingSolution {
            routes_by_depot,
            diagnostics,
        }
    }
}

/// Route a multi-depot problem with the default configuration.
pub fn multi_depot_route(depots: &[Depot], vendors: &[Node], orders: &[Node]) -> RoutingSolution {
    MultiDepotRouter::new(Config::default()).route(depots, vendors, orders)
}

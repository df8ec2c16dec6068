//! Problem data: depots, vendor and order nodes, and vendor clusters.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_VEHICLE_CAPACITY;
use crate::geo::Coordinate;

/// Discriminates the two demand-point roles in a routing problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A drop-off point; its demand consumes vehicle capacity.
    Order,
    /// A pickup point; its demand is stored negative and comes back as
    /// freed capacity in the merge arithmetic.
    Vendor,
}

/// A demand point to be covered by a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub coordinate: Coordinate,
    /// Signed demand: orders carry non-negative values, vendors negative.
    pub demand: f64,
    /// For orders, the vendor node the goods are sourced from.
    pub vendor_id: Option<String>,
}

impl Node {
    /// Create an order (drop-off) node.
    pub fn order(
        id: String,
        coordinate: Coordinate,
        demand: f64,
        vendor_id: Option<String>,
    ) -> Self {
        Node {
            id,
            kind: NodeKind::Order,
            coordinate,
            demand,
            vendor_id,
        }
    }

    /// Create a vendor (pickup) node. The pickup quantity is stored as a
    /// negative demand.
    pub fn vendor(id: String, coordinate: Coordinate, pickup: f64) -> Self {
        Node {
            id,
            kind: NodeKind::Vendor,
            coordinate,
            demand: -pickup,
            vendor_id: None,
        }
    }

    /// Whether this node on its own fits within the given vehicle capacity.
    pub fn fits_alone(&self, capacity: f64) -> bool {
        match self.kind {
            NodeKind::Order => self.demand <= capacity,
            NodeKind::Vendor => self.demand.abs() <= capacity,
        }
    }
}

/// A depot and its vehicle, the origin of every route assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Depot {
    pub id: String,
    pub coordinate: Coordinate,
    /// Vehicle capacity in mass units.
    pub capacity: f64,
}

impl Depot {
    /// Create a depot. A missing capacity falls back to
    /// [`DEFAULT_VEHICLE_CAPACITY`], resolved here once rather than at
    /// every use site.
    pub fn new(id: String, coordinate: Coordinate, capacity: Option<f64>) -> Self {
        Depot {
            id,
            coordinate,
            capacity: capacity.unwrap_or(DEFAULT_VEHICLE_CAPACITY),
        }
    }
}

/// A vendor together with the orders sourced from it, grouped for routing
/// under a single depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorOrderCluster {
    pub vendor: Node,
    pub orders: Vec<Node>,
}

impl VendorOrderCluster {
    /// Node list for the merge phase: the vendor anchor followed by its
    /// orders.
    pub fn node_list(&self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(self.orders.len() + 1);
        nodes.push(self.vendor.clone());
        nodes.extend(self.orders.iter().cloned());
        nodes
    }
}

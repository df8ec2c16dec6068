//! Reportable routing conditions.
//!
//! The heuristic never halts on bad or unreachable input; anything that
//! cannot be routed degrades to an exclusion, surfaced through these
//! diagnostics instead of being dropped silently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A condition that excluded a node, vendor or saving from the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Diagnostic {
    /// A node's solitary demand exceeds the depot's vehicle capacity.
    DemandExceedsCapacity {
        node_id: String,
        demand: f64,
        capacity: f64,
    },
    /// A vendor could not be assigned because the depot list is empty.
    NoDepotAvailable { vendor_id: String },
    /// A saving referenced a node id absent from the node list.
    UnknownNodeReference {
        node_id: String,
        paired_with: String,
    },
    /// The merge deadline expired before all savings were processed.
    DeadlineExpired { savings_skipped: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DemandExceedsCapacity {
                node_id,
                demand,
                capacity,
            } => write!(
                f,
                // Vendor pickups carry negative demand; the magnitude is
                // what exceeds the capacity.
                "node {} with demand {:.2} exceeds vehicle capacity {:.2}",
                node_id,
                demand.abs(),
                capacity
            ),
            Diagnostic::NoDepotAvailable { vendor_id } => {
                write!(f, "vendor {} has no depot available", vendor_id)
            }
            Diagnostic::UnknownNodeReference {
                node_id,
                paired_with,
            } => write!(
                f,
                "saving references unknown node {} (paired with {})",
                node_id, paired_with
            ),
            Diagnostic::DeadlineExpired { savings_skipped } => write!(
                f,
                "merge deadline expired with {} savings unprocessed",
                savings_skipped
            ),
        }
    }
}

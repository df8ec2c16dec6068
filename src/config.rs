//! Configuration for route construction.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Vehicle capacity assumed for depots constructed without an explicit
/// value, in mass units.
pub const DEFAULT_VEHICLE_CAPACITY: f64 = 10.0;

/// Settings for the savings merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Optional deadline for the savings-processing loop. When it expires,
    /// the remaining savings are skipped and every node still unassigned
    /// falls back to a singleton route.
    pub time_limit: Option<Duration>,
}

impl Config {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the time limit for the savings-processing loop.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }
}

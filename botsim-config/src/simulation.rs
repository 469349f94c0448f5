//! Simulation parameters.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Tunables for a single simulation run.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct SimulationConfig {
    /// Seconds a bot spends on one order.
    #[serde(default = "default_processing_time")]
    #[validate(range(min = 1, max = 86400))]
    pub processing_time_seconds: u64,

    /// Id assigned to the first order created.
    #[serde(default = "default_first_order_id")]
    pub first_order_id: u64,

    /// Id assigned to the first bot added.
    #[serde(default = "default_first_bot_id")]
    #[validate(range(min = 1))]
    pub first_bot_id: u64,
}

fn default_processing_time() -> u64 {
    10
}

fn default_first_order_id() -> u64 {
    1001
}

fn default_first_bot_id() -> u64 {
    1
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            processing_time_seconds: default_processing_time(),
            first_order_id: default_first_order_id(),
            first_bot_id: default_first_bot_id(),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Excess entropy over target (nats) that flags a source state. Default: 0.3.
    pub entropy_threshold_nats: f64,
    /// Refuse emissions that would lower confidence. Default: true.
    pub require_non_decreasing: bool,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            entropy_threshold_nats: defaults::DEFAULT_ENTROPY_THRESHOLD_NATS,
            require_non_decreasing: defaults::DEFAULT_REQUIRE_NON_DECREASING,
        }
    }
}

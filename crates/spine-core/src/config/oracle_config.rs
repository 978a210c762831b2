use serde::{Deserialize, Serialize};

use super::defaults;
use super::policy::FalsifierPolicy;

/// Weights and thresholds of the integrity/maturity oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Weight of the coverage sub-score. Default: 0.5.
    pub coverage_weight: f64,
    /// Weight of the information sub-score. Default: 0.3.
    pub information_weight: f64,
    /// Weight of the confidence sub-score. Default: 0.2.
    pub confidence_weight: f64,
    /// Added once when any Hyper record exists. Default: 0.1.
    pub integration_bonus: f64,
    /// Transition count at which information saturates. Default: 1000.
    pub information_saturation: f64,
    /// Maturity needed to speak. Default: 0.8.
    pub ready_threshold: f64,
    /// Confidence needed for omniscience. Default: 0.7.
    pub omniscience_confidence: f64,
    /// Coverage needed for omniscience. Default: 0.9.
    pub omniscience_coverage: f64,
    /// Near-total pair coverage needed for omniscience. Default: 24/25.
    pub omniscience_pair_coverage: f64,
    /// Weight of organic corrective transitions in the information count. Default: 1.0.
    pub organic_weight: f64,
    /// Falsifier policy. Default: advisory.
    pub falsifier_policy: FalsifierPolicy,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            coverage_weight: defaults::DEFAULT_COVERAGE_WEIGHT,
            information_weight: defaults::DEFAULT_INFORMATION_WEIGHT,
            confidence_weight: defaults::DEFAULT_CONFIDENCE_WEIGHT,
            integration_bonus: defaults::DEFAULT_INTEGRATION_BONUS,
            information_saturation: defaults::DEFAULT_INFORMATION_SATURATION,
            ready_threshold: defaults::DEFAULT_READY_THRESHOLD,
            omniscience_confidence: defaults::DEFAULT_OMNISCIENCE_CONFIDENCE,
            omniscience_coverage: defaults::DEFAULT_OMNISCIENCE_COVERAGE,
            omniscience_pair_coverage: defaults::DEFAULT_OMNISCIENCE_PAIR_COVERAGE,
            organic_weight: defaults::DEFAULT_ORGANIC_WEIGHT,
            falsifier_policy: FalsifierPolicy::default(),
        }
    }
}

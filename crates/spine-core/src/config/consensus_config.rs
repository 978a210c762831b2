use serde::{Deserialize, Serialize};

use super::defaults;
use super::policy::FalsifierPolicy;

/// Quorum and reputation parameters for consensus rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Quorum used when a round context does not override it. Default: 2.
    pub default_quorum: usize,
    /// Reputation gained by each agent in a Canonical group. Default: 0.1.
    pub canonical_bonus: f64,
    /// Reputation lost by each agent contributing to a Theatrical verdict. Default: 0.05.
    pub theatrical_penalty: f64,
    /// Lower reputation bound. Default: 0.1.
    pub reputation_floor: f64,
    /// Upper reputation bound. Default: 10.0.
    pub reputation_ceiling: f64,
    /// Reputation of a previously unseen agent. Default: 1.0.
    pub reputation_initial: f64,
    /// Falsifier policy. Default: advisory.
    pub falsifier_policy: FalsifierPolicy,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            default_quorum: defaults::DEFAULT_QUORUM,
            canonical_bonus: defaults::DEFAULT_CANONICAL_BONUS,
            theatrical_penalty: defaults::DEFAULT_THEATRICAL_PENALTY,
            reputation_floor: defaults::DEFAULT_REPUTATION_FLOOR,
            reputation_ceiling: defaults::DEFAULT_REPUTATION_CEILING,
            reputation_initial: defaults::DEFAULT_REPUTATION_INITIAL,
            falsifier_policy: FalsifierPolicy::default(),
        }
    }
}

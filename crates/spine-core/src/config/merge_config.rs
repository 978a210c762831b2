use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Fidelity at or above which the merged ledger is Canonical. Default: 0.9.
    pub canonical_fidelity: f64,
    /// Permit merging ledgers whose genesis sentinels differ. Default: false.
    pub allow_cross_lineage: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            canonical_fidelity: defaults::DEFAULT_CANONICAL_FIDELITY,
            allow_cross_lineage: defaults::DEFAULT_ALLOW_CROSS_LINEAGE,
        }
    }
}

use serde::{Deserialize, Serialize};

/// How a missing falsifier is treated at the oracle/consensus boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalsifierPolicy {
    /// Report the schema enforcement rate; never block.
    #[default]
    Advisory,
    /// Withhold Canonical-grade standing from claims without a falsifier.
    Enforce,
}

use serde::{Deserialize, Serialize};

use spine_core::config::ConsensusConfig;
use spine_core::errors::ConsensusError;

/// Explicit per-round parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContext {
    pub round: u64,
    pub quorum: usize,
}

impl RoundContext {
    pub fn new(round: u64, quorum: usize) -> Result<Self, ConsensusError> {
        if quorum == 0 {
            return Err(ConsensusError::ZeroQuorum);
        }
        Ok(Self { round, quorum })
    }

    /// Context using the configured default quorum.
    pub fn from_config(round: u64, config: &ConsensusConfig) -> Result<Self, ConsensusError> {
        Self::new(round, config.default_quorum)
    }

    /// The context for the following round, same quorum.
    pub fn next(&self) -> Self {
        Self {
            round: self.round + 1,
            quorum: self.quorum,
        }
    }
}

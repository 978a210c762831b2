use crate::models::validation::PayloadViolation;

use super::{ConfigError, ConsensusError, IntegrityError, MergeError, RecoveryError};

/// Top-level error for every spine operation.
#[derive(Debug, thiserror::Error)]
pub enum SpineError {
    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("malformed payload: {}", format_violations(.violations))]
    MalformedPayload { violations: Vec<PayloadViolation> },

    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    #[error("consensus error: {0}")]
    Consensus(#[from] ConsensusError),

    #[error("recovery error: {0}")]
    Recovery(#[from] RecoveryError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the workspace.
pub type SpineResult<T> = Result<T, SpineError>;

fn format_violations(violations: &[PayloadViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

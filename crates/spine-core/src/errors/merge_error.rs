use crate::hashing::Digest;

/// Merge preconditions that cannot be resolved by rule.
///
/// Status conflicts are never errors; they become conflict records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    #[error("ledgers do not share lineage: genesis {left} vs {right}")]
    IncompatibleLineage { left: Digest, right: Digest },

    #[error("merge requires at least one input ledger")]
    NoInputs,
}

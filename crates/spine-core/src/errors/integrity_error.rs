use crate::hashing::Digest;

/// Hash-chain integrity errors. Always carry the exact index of the break.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("chain break at index {index}: expected prev_hash {expected}, found {found}")]
    ChainBreak {
        index: usize,
        expected: Digest,
        found: Digest,
    },

    #[error("content hash mismatch at index {index}: recomputed {expected}, stored {found}")]
    ContentMismatch {
        index: usize,
        expected: Digest,
        found: Digest,
    },

    #[error("content of record {index} cannot be canonically serialized: {reason}")]
    Unhashable { index: usize, reason: String },

    #[error("invalid digest encoding: {0}")]
    InvalidDigest(String),

    #[error("prune boundary {keep_from} out of range for ledger of length {len}")]
    PruneOutOfRange { keep_from: usize, len: usize },
}

impl IntegrityError {
    /// Index of the offending record, if the error points at one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::ChainBreak { index, .. }
            | Self::ContentMismatch { index, .. }
            | Self::Unhashable { index, .. } => Some(*index),
            Self::InvalidDigest(_) | Self::PruneOutOfRange { .. } => None,
        }
    }
}

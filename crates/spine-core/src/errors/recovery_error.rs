/// Distribution recovery errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecoveryError {
    #[error("invalid target distribution: {0}")]
    InvalidTarget(String),

    #[error("corrective emission would lower confidence from {before:.6} to {after:.6}")]
    ConfidenceRegressed { before: f64, after: f64 },
}

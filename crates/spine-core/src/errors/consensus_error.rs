/// Consensus input errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsensusError {
    #[error("attestation topic '{attestation_topic}' does not match round topic '{round_topic}'")]
    TopicMismatch {
        round_topic: String,
        attestation_topic: String,
    },

    #[error("attestation confidence {0} outside [0, 1]")]
    ConfidenceOutOfRange(f64),

    #[error("quorum must be at least 1")]
    ZeroQuorum,

    #[error("topic must not be empty")]
    EmptyTopic,
}

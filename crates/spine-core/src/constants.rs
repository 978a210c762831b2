/// Spine version string.
pub const SPINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of truth statuses in the closed classification alphabet.
pub const STATUS_COUNT: usize = 5;

/// Number of (source, destination) pairs in the transition matrix.
pub const PAIR_COUNT: usize = STATUS_COUNT * STATUS_COUNT;

/// Vantage recorded on records the merge engine writes itself.
pub const MERGE_VANTAGE: &str = "spine-merge";

/// Vantage recorded on corrective records emitted by the recovery controller.
pub const RECOVERY_VANTAGE: &str = "spine-recovery";

/// Falsifier attached to every merge conflict record.
pub const CONFLICT_FALSIFIER: &str =
    "a third independent vantage disagreeing with the winner would overturn this resolution";

/// Floating-point tolerance for probability normalization checks.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Domain-separation tags for the canonical hasher.
pub const CONTENT_DIGEST_TAG: &[u8] = b"spine.content.v1\0";
pub const CHAIN_DIGEST_TAG: &[u8] = b"spine.chain.v1\0";
pub const FINGERPRINT_TAG: &[u8] = b"spine.fingerprint.v1\0";
pub const LINEAGE_TAG: &[u8] = b"spine.lineage.v1\0";
pub const ATTESTATION_TAG: &[u8] = b"spine.attestation.v1\0";
pub const MISSION_TAG: &[u8] = b"spine.mission.v1\0";

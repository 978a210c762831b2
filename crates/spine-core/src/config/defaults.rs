// Single source of truth for all default values.

// --- Ledger ---
pub const DEFAULT_MAX_PAYLOAD_DEPTH: usize = 32;
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1_048_576; // 1 MiB

// --- Predictor ---
pub const DEFAULT_PSEUDO_COUNT: f64 = 1.0;
pub const DEFAULT_HYPER_SELF_PSEUDO_COUNT: f64 = 0.5;
pub const DEFAULT_NORMALIZE_PRIOR: bool = true;

// --- Oracle ---
pub const DEFAULT_COVERAGE_WEIGHT: f64 = 0.5;
pub const DEFAULT_INFORMATION_WEIGHT: f64 = 0.3;
pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 0.2;
pub const DEFAULT_INTEGRATION_BONUS: f64 = 0.1;
pub const DEFAULT_INFORMATION_SATURATION: f64 = 1000.0;
pub const DEFAULT_READY_THRESHOLD: f64 = 0.8;
pub const DEFAULT_OMNISCIENCE_CONFIDENCE: f64 = 0.7;
pub const DEFAULT_OMNISCIENCE_COVERAGE: f64 = 0.9;
pub const DEFAULT_OMNISCIENCE_PAIR_COVERAGE: f64 = 24.0 / 25.0;
pub const DEFAULT_ORGANIC_WEIGHT: f64 = 1.0;

// --- Recovery ---
pub const DEFAULT_ENTROPY_THRESHOLD_NATS: f64 = 0.3;
pub const DEFAULT_REQUIRE_NON_DECREASING: bool = true;

// --- Merge ---
pub const DEFAULT_CANONICAL_FIDELITY: f64 = 0.9;
pub const DEFAULT_ALLOW_CROSS_LINEAGE: bool = false;

// --- Consensus ---
pub const DEFAULT_QUORUM: usize = 2;
pub const DEFAULT_CANONICAL_BONUS: f64 = 0.1;
pub const DEFAULT_THEATRICAL_PENALTY: f64 = 0.05;
pub const DEFAULT_REPUTATION_FLOOR: f64 = 0.1;
pub const DEFAULT_REPUTATION_CEILING: f64 = 10.0;
pub const DEFAULT_REPUTATION_INITIAL: f64 = 1.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

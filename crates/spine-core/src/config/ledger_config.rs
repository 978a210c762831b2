use serde::{Deserialize, Serialize};

use super::defaults;

/// Payload acceptance limits applied at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Maximum JSON nesting depth of a payload. Default: 32.
    pub max_payload_depth: usize,
    /// Maximum canonical serialized payload size in bytes. Default: 1 MiB.
    pub max_payload_bytes: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_payload_depth: defaults::DEFAULT_MAX_PAYLOAD_DEPTH,
            max_payload_bytes: defaults::DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

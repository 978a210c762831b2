//! Engine configuration.
//!
//! Every sub-config is `#[serde(default)]`, so a partial TOML document only
//! overrides what it names. Configuration is passed explicitly into each
//! engine; nothing here is process-global.
//!
//! # Examples
//!
//! ```
//! use spine_core::config::SpineConfig;
//!
//! let config = SpineConfig::from_toml("[consensus]\ndefault_quorum = 3\n").unwrap();
//! assert_eq!(config.consensus.default_quorum, 3);
//! assert!((config.oracle.coverage_weight - 0.5).abs() < f64::EPSILON);
//! ```

pub mod consensus_config;
pub mod defaults;
pub mod ledger_config;
pub mod merge_config;
pub mod observability_config;
pub mod oracle_config;
pub mod policy;
pub mod predictor_config;
pub mod recovery_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use consensus_config::ConsensusConfig;
pub use ledger_config::LedgerConfig;
pub use merge_config::MergeConfig;
pub use observability_config::ObservabilityConfig;
pub use oracle_config::OracleConfig;
pub use policy::FalsifierPolicy;
pub use predictor_config::PredictorConfig;
pub use recovery_config::RecoveryConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpineConfig {
    pub ledger: LedgerConfig,
    pub predictor: PredictorConfig,
    pub oracle: OracleConfig,
    pub recovery: RecoveryConfig,
    pub merge: MergeConfig,
    pub consensus: ConsensusConfig,
    pub observability: ObservabilityConfig,
}

impl SpineConfig {
    /// Parse a (possibly partial) TOML document and validate it.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let oracle = &self.oracle;
        let weight_sum = oracle.coverage_weight + oracle.information_weight + oracle.confidence_weight;
        if (weight_sum - 1.0).abs() > 1e-9 {
            return Err(invalid(
                "oracle weights",
                format!("must sum to 1.0, got {weight_sum}"),
            ));
        }
        for (field, value) in [
            ("oracle.coverage_weight", oracle.coverage_weight),
            ("oracle.information_weight", oracle.information_weight),
            ("oracle.confidence_weight", oracle.confidence_weight),
            ("oracle.integration_bonus", oracle.integration_bonus),
            ("oracle.ready_threshold", oracle.ready_threshold),
            ("oracle.omniscience_confidence", oracle.omniscience_confidence),
            ("oracle.omniscience_coverage", oracle.omniscience_coverage),
            ("oracle.omniscience_pair_coverage", oracle.omniscience_pair_coverage),
            ("merge.canonical_fidelity", self.merge.canonical_fidelity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("must lie in [0, 1], got {value}")));
            }
        }
        if oracle.information_saturation <= 1.0 {
            return Err(invalid("oracle.information_saturation", "must exceed 1"));
        }
        if oracle.organic_weight < 0.0 {
            return Err(invalid("oracle.organic_weight", "must be non-negative"));
        }

        let predictor = &self.predictor;
        if predictor.pseudo_count <= 0.0 || predictor.hyper_self_pseudo_count <= 0.0 {
            return Err(invalid("predictor", "pseudo-counts must be positive"));
        }

        if self.recovery.entropy_threshold_nats < 0.0 {
            return Err(invalid("recovery.entropy_threshold_nats", "must be non-negative"));
        }

        let consensus = &self.consensus;
        if consensus.default_quorum == 0 {
            return Err(invalid("consensus.default_quorum", "must be at least 1"));
        }
        if consensus.reputation_floor <= 0.0 || consensus.reputation_floor >= consensus.reputation_ceiling {
            return Err(invalid(
                "consensus.reputation_floor",
                "must be positive and below reputation_ceiling",
            ));
        }
        if !(consensus.reputation_floor..=consensus.reputation_ceiling)
            .contains(&consensus.reputation_initial)
        {
            return Err(invalid("consensus.reputation_initial", "must lie within the reputation bounds"));
        }
        if self.ledger.max_payload_depth == 0 || self.ledger.max_payload_bytes == 0 {
            return Err(invalid("ledger", "payload limits must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
}

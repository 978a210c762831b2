use serde::{Deserialize, Serialize};

use super::defaults;

/// Smoothing prior for the Bayesian transition predictor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Pseudo-count for every (source, destination) pair. Default: 1.0.
    pub pseudo_count: f64,
    /// Pseudo-count for Hyper→Hyper (Jeffreys-style). Default: 0.5.
    pub hyper_self_pseudo_count: f64,
    /// When true, a row's pseudo-counts are rescaled so the whole row carries
    /// `pseudo_count` of prior mass, keeping their relative weights.
    /// When false, pseudo-counts apply per pair as-is. Default: true.
    pub normalize_prior: bool,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            pseudo_count: defaults::DEFAULT_PSEUDO_COUNT,
            hyper_self_pseudo_count: defaults::DEFAULT_HYPER_SELF_PSEUDO_COUNT,
            normalize_prior: defaults::DEFAULT_NORMALIZE_PRIOR,
        }
    }
}

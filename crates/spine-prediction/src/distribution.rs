//! Posterior distributions and point predictions.

use serde::{Deserialize, Serialize};

use spine_core::constants::{PROBABILITY_TOLERANCE, STATUS_COUNT};
use spine_core::models::TruthStatus;

/// Normalized posterior over destinations for one source status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorDistribution {
    pub source: TruthStatus,
    /// Probabilities in `TruthStatus::ALL` order.
    pub probabilities: [f64; STATUS_COUNT],
    /// Real transitions observed from `source`.
    pub observations: u64,
}

impl PosteriorDistribution {
    pub fn probability(&self, dest: TruthStatus) -> f64 {
        self.probabilities[dest.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TruthStatus, f64)> + '_ {
        TruthStatus::ALL.into_iter().zip(self.probabilities)
    }

    /// Most likely destination. Ties go to the status earliest in
    /// `TruthStatus::ALL` order.
    pub fn most_likely(&self) -> Prediction {
        let mut best = Prediction {
            source: self.source,
            destination: TruthStatus::ALL[0],
            probability: self.probabilities[0],
        };
        for (dest, p) in self.iter().skip(1) {
            if p > best.probability {
                best.destination = dest;
                best.probability = p;
            }
        }
        best
    }

    /// True when all components are in `[0, 1]` and sum to 1 within tolerance.
    pub fn is_normalized(&self) -> bool {
        let sum: f64 = self.probabilities.iter().sum();
        self.probabilities.iter().all(|p| (0.0..=1.0).contains(p))
            && (sum - 1.0).abs() <= PROBABILITY_TOLERANCE
    }

    /// True when no real transition backs this distribution.
    pub fn is_prior_only(&self) -> bool {
        self.observations == 0
    }
}

/// Point prediction for the status following `source`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub source: TruthStatus,
    pub destination: TruthStatus,
    pub probability: f64,
}

use serde::{Deserialize, Serialize};

use spine_core::constants::STATUS_COUNT;
use spine_core::errors::RecoveryError;
use spine_core::models::TruthStatus;
use spine_ledger::TransitionMatrix;

/// Non-negative weights over (source, destination) pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDistribution {
    weights: [[f64; STATUS_COUNT]; STATUS_COUNT],
}

impl TargetDistribution {
    /// Weights must be finite, non-negative, and not all zero.
    pub fn new(weights: [[f64; STATUS_COUNT]; STATUS_COUNT]) -> Result<Self, RecoveryError> {
        if let Some(bad) = weights.iter().flatten().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(RecoveryError::InvalidTarget(format!(
                "weight {bad} is not a finite non-negative number"
            )));
        }
        if weights.iter().flatten().sum::<f64>() <= 0.0 {
            return Err(RecoveryError::InvalidTarget("all weights are zero".to_string()));
        }
        Ok(Self { weights })
    }

    /// Build from sparse `(source, destination, weight)` entries; repeated
    /// pairs accumulate.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, RecoveryError>
    where
        I: IntoIterator<Item = (TruthStatus, TruthStatus, f64)>,
    {
        let mut weights = [[0.0; STATUS_COUNT]; STATUS_COUNT];
        for (from, to, w) in pairs {
            weights[from.index()][to.index()] += w;
        }
        Self::new(weights)
    }

    /// Use observed counts as the target, e.g. from a known-natural ledger.
    pub fn from_matrix(matrix: &TransitionMatrix) -> Result<Self, RecoveryError> {
        let mut weights = [[0.0; STATUS_COUNT]; STATUS_COUNT];
        for from in TruthStatus::ALL {
            for to in TruthStatus::ALL {
                weights[from.index()][to.index()] = matrix.count(from, to) as f64;
            }
        }
        Self::new(weights)
    }

    pub fn weight(&self, from: TruthStatus, to: TruthStatus) -> f64 {
        self.weights[from.index()][to.index()]
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().flatten().sum()
    }

    /// Conditional destination distribution for `from`, or `None` if the
    /// target puts no weight on that row.
    pub fn row_distribution(&self, from: TruthStatus) -> Option<[f64; STATUS_COUNT]> {
        let row = &self.weights[from.index()];
        let mass: f64 = row.iter().sum();
        if mass <= 0.0 {
            return None;
        }
        let mut dist = [0.0; STATUS_COUNT];
        for (slot, w) in dist.iter_mut().zip(row) {
            *slot = w / mass;
        }
        Some(dist)
    }

    /// Pairs with positive weight, in (source, destination) index order.
    pub fn weighted_pairs(&self) -> impl Iterator<Item = (TruthStatus, TruthStatus, f64)> + '_ {
        TruthStatus::ALL.into_iter().flat_map(move |from| {
            TruthStatus::ALL
                .into_iter()
                .map(move |to| (from, to, self.weight(from, to)))
                .filter(|(_, _, w)| *w > 0.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TruthStatus::*;

    #[test]
    fn rejects_negative_and_empty_targets() {
        assert!(TargetDistribution::from_pairs([(Pending, Verified, -1.0)]).is_err());
        assert!(TargetDistribution::from_pairs([]).is_err());
        assert!(TargetDistribution::from_pairs([(Pending, Verified, f64::NAN)]).is_err());
    }

    #[test]
    fn row_distribution_normalizes_one_row() {
        let t = TargetDistribution::from_pairs([(Pending, Verified, 3.0), (Pending, Canonical, 1.0)])
            .unwrap();
        let row = t.row_distribution(Pending).unwrap();
        assert!((row[Verified.index()] - 0.75).abs() < 1e-12);
        assert!(t.row_distribution(Hyper).is_none());
    }
}

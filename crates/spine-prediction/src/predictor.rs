//! BayesianPredictor: additive smoothing over a transition matrix.

use tracing::debug;

use spine_core::config::PredictorConfig;
use spine_core::constants::STATUS_COUNT;
use spine_core::models::TruthStatus;
use spine_ledger::{Ledger, TransitionMatrix};

use crate::distribution::{PosteriorDistribution, Prediction};
use crate::prior::Prior;

/// Stateless predictor; holds only its prior.
#[derive(Debug, Clone, Default)]
pub struct BayesianPredictor {
    prior: Prior,
}

impl BayesianPredictor {
    pub fn new(config: &PredictorConfig) -> Self {
        Self {
            prior: Prior::from_config(config),
        }
    }

    pub fn prior(&self) -> &Prior {
        &self.prior
    }

    /// Posterior over destinations given the observed matrix.
    pub fn predict_distribution(
        &self,
        matrix: &TransitionMatrix,
        source: TruthStatus,
    ) -> PosteriorDistribution {
        let counts = matrix.row(source);
        let alpha = self.prior.row(source);
        let mut probabilities = [0.0; STATUS_COUNT];
        for ((slot, &count), &a) in probabilities.iter_mut().zip(counts).zip(alpha) {
            *slot = count as f64 + a;
        }
        let total: f64 = probabilities.iter().sum();
        for p in &mut probabilities {
            *p /= total;
        }
        let observations = matrix.row_total(source);
        debug!(source = %source, observations, "posterior computed");
        PosteriorDistribution {
            source,
            probabilities,
            observations,
        }
    }

    /// Most likely next status and its posterior probability.
    pub fn predict_next(&self, matrix: &TransitionMatrix, source: TruthStatus) -> Prediction {
        self.predict_distribution(matrix, source).most_likely()
    }

    /// Posteriors for every source, in `TruthStatus::ALL` order.
    pub fn predict_all(&self, matrix: &TransitionMatrix) -> Vec<PosteriorDistribution> {
        TruthStatus::ALL
            .into_iter()
            .map(|s| self.predict_distribution(matrix, s))
            .collect()
    }

    /// Prediction from the status of the ledger's last record, if any.
    pub fn predict_from_tip(&self, ledger: &Ledger) -> Option<Prediction> {
        let last = ledger.records().last()?.status;
        Some(self.predict_next(&ledger.transitions(), last))
    }
}

//! Per-row Dirichlet pseudo-counts.

use serde::{Deserialize, Serialize};

use spine_core::config::PredictorConfig;
use spine_core::constants::STATUS_COUNT;
use spine_core::models::TruthStatus;

/// Pseudo-counts for every (source, destination) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prior {
    alpha: [[f64; STATUS_COUNT]; STATUS_COUNT],
}

impl Prior {
    pub fn from_config(config: &PredictorConfig) -> Self {
        let mut alpha = [[0.0; STATUS_COUNT]; STATUS_COUNT];
        for source in TruthStatus::ALL {
            let row = &mut alpha[source.index()];
            for dest in TruthStatus::ALL {
                row[dest.index()] = if source.is_terminal_influential() && dest == source {
                    config.hyper_self_pseudo_count
                } else {
                    config.pseudo_count
                };
            }
            if config.normalize_prior {
                let mass: f64 = row.iter().sum();
                for cell in row.iter_mut() {
                    *cell *= config.pseudo_count / mass;
                }
            }
        }
        Self { alpha }
    }

    pub fn alpha(&self, source: TruthStatus, dest: TruthStatus) -> f64 {
        self.alpha[source.index()][dest.index()]
    }

    pub fn row(&self, source: TruthStatus) -> &[f64; STATUS_COUNT] {
        &self.alpha[source.index()]
    }

    /// Total prior mass of a row.
    pub fn row_mass(&self, source: TruthStatus) -> f64 {
        self.row(source).iter().sum()
    }
}

impl Default for Prior {
    fn default() -> Self {
        Self::from_config(&PredictorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TruthStatus::*;

    #[test]
    fn normalized_rows_carry_pseudo_count_mass() {
        let prior = Prior::default();
        for s in TruthStatus::ALL {
            assert!((prior.row_mass(s) - 1.0).abs() < 1e-12);
        }
        assert!((prior.alpha(Canonical, Pending) - 0.2).abs() < 1e-12);
        // Hyper row: weights 1,1,1,1,0.5 scaled to mass 1.
        assert!((prior.alpha(Hyper, Hyper) - 0.5 / 4.5).abs() < 1e-12);
        assert!((prior.alpha(Hyper, Pending) - 1.0 / 4.5).abs() < 1e-12);
    }

    #[test]
    fn literal_prior_uses_per_pair_counts() {
        let prior = Prior::from_config(&PredictorConfig {
            normalize_prior: false,
            ..PredictorConfig::default()
        });
        assert_eq!(prior.alpha(Pending, Verified), 1.0);
        assert_eq!(prior.alpha(Hyper, Hyper), 0.5);
        assert_eq!(prior.row_mass(Hyper), 4.5);
    }
}

//! Shannon entropy helpers, in nats.

use spine_core::constants::STATUS_COUNT;
use spine_ledger::TransitionMatrix;

/// Entropy of a probability vector. Zero entries contribute nothing.
pub fn shannon(probabilities: &[f64]) -> f64 {
    -probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f64>()
}

/// Entropy divided by its maximum `ln(STATUS_COUNT)`, in `[0, 1]`.
pub fn normalized(probabilities: &[f64]) -> f64 {
    (shannon(probabilities) / (STATUS_COUNT as f64).ln()).clamp(0.0, 1.0)
}

/// Mean normalized entropy over source rows with at least one transition.
/// `None` when the matrix is empty.
pub fn mean_row_entropy(matrix: &TransitionMatrix) -> Option<f64> {
    let rows: Vec<f64> = matrix
        .observed_sources()
        .filter_map(|s| matrix.empirical_distribution(s))
        .map(|dist| normalized(&dist))
        .collect();
    if rows.is_empty() {
        None
    } else {
        Some(rows.iter().sum::<f64>() / rows.len() as f64)
    }
}

/// 1 − mean normalized row entropy. An empty matrix scores 0.
pub fn confidence(matrix: &TransitionMatrix) -> f64 {
    mean_row_entropy(matrix).map_or(0.0, |h| 1.0 - h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spine_core::models::TruthStatus::*;

    #[test]
    fn uniform_vector_has_max_entropy() {
        let p = [0.2; 5];
        assert!((shannon(&p) - 5f64.ln()).abs() < 1e-12);
        assert!((normalized(&p) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn point_mass_has_zero_entropy() {
        assert_eq!(shannon(&[1.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn deterministic_chain_is_fully_confident() {
        let m = TransitionMatrix::from_statuses([Pending, Verified, Pending, Verified]);
        assert!((confidence(&m) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_matrix_has_zero_confidence() {
        assert_eq!(confidence(&TransitionMatrix::new()), 0.0);
    }
}

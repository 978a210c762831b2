//! Property tests for spine-prediction: every posterior is a probability
//! distribution, whatever the counts or prior settings.

use proptest::prelude::*;

use spine_core::config::PredictorConfig;
use spine_core::models::TruthStatus;
use spine_ledger::TransitionMatrix;
use spine_prediction::BayesianPredictor;

fn matrix_strategy() -> impl Strategy<Value = TransitionMatrix> {
    prop::array::uniform5(prop::array::uniform5(0u64..10_000)).prop_map(TransitionMatrix::from_counts)
}

fn config_strategy() -> impl Strategy<Value = PredictorConfig> {
    (0.01f64..10.0, 0.01f64..10.0, any::<bool>()).prop_map(|(pseudo, hyper, normalize)| {
        PredictorConfig {
            pseudo_count: pseudo,
            hyper_self_pseudo_count: hyper,
            normalize_prior: normalize,
        }
    })
}

proptest! {
    #[test]
    fn posteriors_sum_to_one(matrix in matrix_strategy(), config in config_strategy()) {
        let predictor = BayesianPredictor::new(&config);
        for source in TruthStatus::ALL {
            let dist = predictor.predict_distribution(&matrix, source);
            let sum: f64 = dist.probabilities.iter().sum();
            prop_assert!((sum - 1.0).abs() <= 1e-9, "sum {} for {}", sum, source);
            prop_assert!(dist.probabilities.iter().all(|p| *p >= 0.0 && *p <= 1.0));
        }
    }

    #[test]
    fn prediction_is_the_distribution_maximum(matrix in matrix_strategy(), idx in 0usize..5) {
        let predictor = BayesianPredictor::default();
        let source = TruthStatus::ALL[idx];
        let dist = predictor.predict_distribution(&matrix, source);
        let next = predictor.predict_next(&matrix, source);
        prop_assert!(dist.probabilities.iter().all(|p| *p <= next.probability));
        prop_assert_eq!(dist.probability(next.destination), next.probability);
    }
}

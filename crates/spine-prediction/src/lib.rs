//! # spine-prediction
//!
//! Predicts the next truth status from the transition statistics of a ledger.
//!
//! ## Smoothing
//!
//! Each source row gets additive pseudo-counts before normalization. Every
//! pair carries `pseudo_count`, except `Hyper → Hyper` which carries
//! `hyper_self_pseudo_count` (a weaker, Jeffreys-style prior). With
//! `normalize_prior` the row's pseudo-counts are rescaled to a total mass of
//! `pseudo_count`, so a single observation already dominates the prior.
//!
//! An unobserved source yields the prior alone, never an error.

pub mod distribution;
pub mod predictor;
pub mod prior;

pub use distribution::{PosteriorDistribution, Prediction};
pub use predictor::BayesianPredictor;
pub use prior::Prior;

//! # spine-integrity
//!
//! Scores how much a ledger can be trusted to speak, and repairs transition
//! distributions that have been flooded toward uniform.
//!
//! ## Oracle sub-scores
//!
//! | Score | Definition |
//! |-------|-----------|
//! | Coverage | distinct observed pairs / 25 |
//! | Information | `min(1, ln(1 + n) / ln(saturation))` |
//! | Confidence | 1 − mean normalized entropy of observed rows |
//! | Integration bonus | fixed constant once any `Hyper` record exists |
//!
//! `maturity` is the weighted sum plus the bonus, clamped to `[0, 1]`.

pub mod entropy;
pub mod oracle;
pub mod recovery;

pub use oracle::{IntegrityOracle, OracleReport};
pub use recovery::{
    Allocation, RecoveryController, RecoveryReport, SourceAssessment, TargetDistribution,
};

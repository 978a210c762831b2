//! IntegrityOracle: maturity and omniscience scoring over a ledger snapshot.
//!
//! Every sub-score is available on its own as well as through
//! [`IntegrityOracle::evaluate`].

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use spine_core::config::{FalsifierPolicy, OracleConfig};
use spine_core::models::{Payload, Record, TruthStatus};
use spine_ledger::{Ledger, TransitionMatrix};

use crate::entropy;

/// Scored view of one ledger snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleReport {
    pub maturity: f64,
    pub ready_to_speak: bool,
    pub omniscient: bool,
    pub coverage: f64,
    pub information: f64,
    pub confidence: f64,
    pub integration_bonus: f64,
    /// Fraction of records carrying a non-empty falsifier. Reported under
    /// every policy.
    pub schema_enforcement_rate: f64,
    /// Fraction of transitions whose destination is an organic correction.
    pub organic_share: f64,
    pub landed_canonical_merge: bool,
    pub transitions: u64,
}

/// Maturity oracle. Holds only configuration.
#[derive(Debug, Clone, Default)]
pub struct IntegrityOracle {
    config: OracleConfig,
}

impl IntegrityOracle {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Distinct observed pairs over the full pair space.
    pub fn coverage(&self, matrix: &TransitionMatrix) -> f64 {
        matrix.pair_coverage()
    }

    /// Saturating log-scale evidence signal. Organic transitions count with
    /// `organic_weight`.
    pub fn information(&self, natural: &TransitionMatrix, organic: &TransitionMatrix) -> f64 {
        let effective = natural.total() as f64 + self.config.organic_weight * organic.total() as f64;
        ((1.0 + effective).ln() / self.config.information_saturation.ln()).min(1.0)
    }

    /// Information score of a ledger.
    pub fn information_of(&self, ledger: &Ledger) -> f64 {
        let (natural, organic) = ledger.transitions_by_origin();
        self.information(&natural, &organic)
    }

    /// 1 − mean normalized entropy of the observed source rows.
    pub fn confidence(&self, matrix: &TransitionMatrix) -> f64 {
        entropy::confidence(matrix)
    }

    pub fn integration_bonus(&self, ledger: &Ledger) -> f64 {
        if ledger.contains_status(TruthStatus::Hyper) {
            self.config.integration_bonus
        } else {
            0.0
        }
    }

    pub fn schema_enforcement_rate(&self, ledger: &Ledger) -> f64 {
        if ledger.is_empty() {
            return 0.0;
        }
        let with_falsifier = ledger.iter().filter(|r| has_falsifier(r)).count();
        with_falsifier as f64 / ledger.len() as f64
    }

    /// True if the ledger holds a landing receipt for a Canonical merge.
    /// Under `Enforce`, the receipt must itself carry a falsifier.
    pub fn has_landed_canonical_merge(&self, ledger: &Ledger) -> bool {
        ledger.iter().any(|r| match &r.payload {
            Payload::MergeLanded(landed) => {
                landed.truth_plane == TruthStatus::Canonical
                    && (self.config.falsifier_policy == FalsifierPolicy::Advisory || has_falsifier(r))
            }
            _ => false,
        })
    }

    /// Maturity from precomputed sub-scores.
    pub fn maturity(&self, coverage: f64, information: f64, confidence: f64, bonus: f64) -> f64 {
        let c = &self.config;
        (c.coverage_weight * coverage
            + c.information_weight * information
            + c.confidence_weight * confidence
            + bonus)
            .clamp(0.0, 1.0)
    }

    pub fn ready_to_speak(&self, maturity: f64) -> bool {
        maturity >= self.config.ready_threshold
    }

    /// Omniscience: confident, near-total coverage, and a landed canonical merge.
    pub fn omniscient(&self, ledger: &Ledger) -> bool {
        let matrix = ledger.transitions();
        self.omniscient_with(ledger, self.coverage(&matrix), self.confidence(&matrix))
    }

    fn omniscient_with(&self, ledger: &Ledger, coverage: f64, confidence: f64) -> bool {
        let c = &self.config;
        let falsifiers_ok = match c.falsifier_policy {
            FalsifierPolicy::Advisory => true,
            FalsifierPolicy::Enforce => ledger
                .iter()
                .filter(|r| r.status == TruthStatus::Canonical)
                .all(has_falsifier),
        };
        confidence >= c.omniscience_confidence
            && coverage >= c.omniscience_coverage
            && coverage >= c.omniscience_pair_coverage
            && falsifiers_ok
            && self.has_landed_canonical_merge(ledger)
    }

    /// Score a ledger snapshot.
    #[instrument(skip_all, fields(len = ledger.len()))]
    pub fn evaluate(&self, ledger: &Ledger) -> OracleReport {
        let (natural, organic) = ledger.transitions_by_origin();
        let matrix = natural.combined(&organic);

        let coverage = self.coverage(&matrix);
        let information = self.information(&natural, &organic);
        let confidence = self.confidence(&matrix);
        let integration_bonus = self.integration_bonus(ledger);
        let maturity = self.maturity(coverage, information, confidence, integration_bonus);
        let transitions = matrix.total();
        let organic_share = if transitions == 0 {
            0.0
        } else {
            organic.total() as f64 / transitions as f64
        };

        let report = OracleReport {
            maturity,
            ready_to_speak: self.ready_to_speak(maturity),
            omniscient: self.omniscient_with(ledger, coverage, confidence),
            coverage,
            information,
            confidence,
            integration_bonus,
            schema_enforcement_rate: self.schema_enforcement_rate(ledger),
            organic_share,
            landed_canonical_merge: self.has_landed_canonical_merge(ledger),
            transitions,
        };
        debug!(
            maturity = report.maturity,
            coverage = report.coverage,
            information = report.information,
            confidence = report.confidence,
            omniscient = report.omniscient,
            "oracle evaluated"
        );
        report
    }
}

fn has_falsifier(record: &Record) -> bool {
    record
        .falsifier
        .as_deref()
        .is_some_and(|f| !f.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spine_core::models::MergeLandedPayload;
    use spine_core::hashing::Digest;
    use TruthStatus::*;

    fn ledger(statuses: &[TruthStatus]) -> Ledger {
        let mut ledger = Ledger::new();
        for (i, s) in statuses.iter().enumerate() {
            ledger
                .append(
                    Payload::extension([("i", serde_json::json!(i))]),
                    *s,
                    Some(format!("f{i}")),
                    "v",
                )
                .unwrap();
        }
        ledger
    }

    #[test]
    fn empty_ledger_scores_zero() {
        let report = IntegrityOracle::default().evaluate(&Ledger::new());
        assert_eq!(report.maturity, 0.0);
        assert!(!report.ready_to_speak);
        assert!(!report.omniscient);
        assert_eq!(report.transitions, 0);
    }

    #[test]
    fn information_saturates_at_configured_count() {
        let oracle = IntegrityOracle::default();
        let mut m = TransitionMatrix::new();
        for _ in 0..999 {
            m.record(Pending, Pending);
        }
        assert!((oracle.information(&m, &TransitionMatrix::new()) - 1.0).abs() < 1e-12);
        m.record(Pending, Pending);
        assert_eq!(oracle.information(&m, &TransitionMatrix::new()), 1.0);
    }

    #[test]
    fn organic_weight_scales_only_information() {
        let oracle = IntegrityOracle::new(OracleConfig {
            organic_weight: 0.0,
            ..OracleConfig::default()
        });
        let mut organic = TransitionMatrix::new();
        organic.record(Pending, Verified);
        assert_eq!(oracle.information(&TransitionMatrix::new(), &organic), 0.0);
        assert!(oracle.coverage(&organic) > 0.0);
    }

    #[test]
    fn hyper_record_adds_integration_bonus() {
        let oracle = IntegrityOracle::default();
        assert_eq!(oracle.integration_bonus(&ledger(&[Pending, Verified])), 0.0);
        assert_eq!(oracle.integration_bonus(&ledger(&[Pending, Hyper])), 0.1);
    }

    #[test]
    fn maturity_is_clamped() {
        let oracle = IntegrityOracle::default();
        assert_eq!(oracle.maturity(1.0, 1.0, 1.0, 0.1), 1.0);
        assert!((oracle.maturity(0.5, 0.5, 0.5, 0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn schema_rate_counts_non_empty_falsifiers() {
        let mut l = ledger(&[Pending]);
        l.append(Payload::extension([("x", serde_json::json!(1))]), Pending, None, "v")
            .unwrap();
        assert!((IntegrityOracle::default().schema_enforcement_rate(&l) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn landed_merge_without_falsifier_counts_only_when_advisory() {
        let mut l = ledger(&[Pending]);
        l.append(
            Payload::MergeLanded(MergeLandedPayload {
                root: Digest::GENESIS,
                fidelity: 1.0,
                truth_plane: Canonical,
                records: 1,
                conflicts: 0,
            }),
            Canonical,
            None,
            "v",
        )
        .unwrap();
        assert!(IntegrityOracle::default().has_landed_canonical_merge(&l));
        let strict = IntegrityOracle::new(OracleConfig {
            falsifier_policy: FalsifierPolicy::Enforce,
            ..OracleConfig::default()
        });
        assert!(!strict.has_landed_canonical_merge(&l));
    }
}

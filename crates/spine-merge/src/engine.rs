//! MergeEngine: pairwise and N-way deterministic merge.

use tracing::instrument;

use spine_core::config::{LedgerConfig, MergeConfig};
use spine_core::constants::{CONFLICT_FALSIFIER, MERGE_VANTAGE};
use spine_core::errors::{MergeError, SpineResult};
use spine_core::hashing::Digest;
use spine_core::models::{ConflictPayload, Payload, RecordDraft, TruthStatus};
use spine_ledger::Ledger;
use spine_observability::tracing_setup::events;

use crate::grouping::{self, Resolution};
use crate::outcome::MergeOutcome;

/// Stateless merge engine. Inputs are never modified.
#[derive(Debug, Clone, Default)]
pub struct MergeEngine {
    config: MergeConfig,
}

impl MergeEngine {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge two ledgers. `merge(a, b)` and `merge(b, a)` are identical.
    pub fn merge(&self, left: &Ledger, right: &Ledger) -> SpineResult<MergeOutcome> {
        self.merge_all(&[left, right])
    }

    /// Merge any number of ledgers in one pass.
    #[instrument(skip_all, fields(inputs = ledgers.len()))]
    pub fn merge_all(&self, ledgers: &[&Ledger]) -> SpineResult<MergeOutcome> {
        let genesis = self.output_genesis(ledgers)?;

        let groups = grouping::group(ledgers.iter().map(|l| l.records()))?;
        let distinct_events = groups.len();
        let mut resolutions: Vec<Resolution> = groups
            .into_iter()
            .filter_map(|(fingerprint, candidates)| grouping::resolve(fingerprint, candidates))
            .collect();

        // Winners by (timestamp, fingerprint); conflicts stay in fingerprint order.
        let conflicts: Vec<(RecordDraft, ConflictPayload)> = resolutions
            .iter()
            .filter_map(|r| {
                let c = r.conflict.as_ref()?;
                Some((conflict_draft(&r.winner, c.clone()), c.clone()))
            })
            .collect();
        resolutions.sort_by(|a, b| {
            a.winner
                .timestamp
                .cmp(&b.winner.timestamp)
                .then_with(|| a.fingerprint.cmp(&b.fingerprint))
        });

        let mut merged = Ledger::with_genesis_digest(genesis).with_config(widest_limits(ledgers));
        for resolution in resolutions {
            merged.append_draft(resolution.winner)?;
        }
        let mut conflict_payloads = Vec::with_capacity(conflicts.len());
        for (draft, payload) in conflicts {
            events::conflict_resolved(&payload.fingerprint, payload.winner.status, payload.losers.len());
            merged.append_draft(draft)?;
            conflict_payloads.push(payload);
        }

        let fidelity = if distinct_events == 0 {
            1.0
        } else {
            1.0 - conflict_payloads.len() as f64 / distinct_events as f64
        };
        let truth_plane = if fidelity >= self.config.canonical_fidelity {
            TruthStatus::Canonical
        } else {
            TruthStatus::Verified
        };

        events::merge_completed(merged.len(), conflict_payloads.len(), fidelity, truth_plane);
        Ok(MergeOutcome {
            ledger: merged,
            fidelity,
            truth_plane,
            conflicts: conflict_payloads,
            distinct_events,
        })
    }

    /// The shared genesis, or the smallest one when cross-lineage merges are
    /// allowed.
    fn output_genesis(&self, ledgers: &[&Ledger]) -> SpineResult<Digest> {
        let first = ledgers.first().ok_or(MergeError::NoInputs)?.genesis();
        let mut genesis = first;
        for ledger in &ledgers[1..] {
            let other = ledger.genesis();
            if other != first && !self.config.allow_cross_lineage {
                return Err(MergeError::IncompatibleLineage {
                    left: first,
                    right: other,
                }
                .into());
            }
            genesis = genesis.min(other);
        }
        Ok(genesis)
    }
}

/// Payload limits that admit every record of every input.
fn widest_limits(ledgers: &[&Ledger]) -> LedgerConfig {
    ledgers.iter().map(|l| l.config()).fold(LedgerConfig::default(), |acc, c| LedgerConfig {
        max_payload_depth: acc.max_payload_depth.max(c.max_payload_depth),
        max_payload_bytes: acc.max_payload_bytes.max(c.max_payload_bytes),
    })
}

fn conflict_draft(winner: &RecordDraft, payload: ConflictPayload) -> RecordDraft {
    RecordDraft::new(Payload::MergeConflict(payload), winner.status, MERGE_VANTAGE)
        .with_falsifier(CONFLICT_FALSIFIER)
        .at(winner.timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spine_core::errors::SpineError;
    use spine_core::models::ObservationPayload;

    fn ledger(genesis: Option<&str>, statuses: &[TruthStatus], vantage: &str) -> Ledger {
        let mut ledger = match genesis {
            Some(seed) => Ledger::with_genesis(seed),
            None => Ledger::new(),
        };
        for (i, s) in statuses.iter().enumerate() {
            let draft = RecordDraft::new(
                Payload::Observation(ObservationPayload {
                    subject: format!("event-{i}"),
                    claim: "seen".into(),
                    tags: vec![],
                }),
                *s,
                vantage,
            )
            .at(chrono::DateTime::from_timestamp(1_700_000_000 + i as i64, 0).unwrap());
            ledger.append_draft(draft).unwrap();
        }
        ledger
    }

    #[test]
    fn empty_input_set_is_rejected() {
        let err = MergeEngine::default().merge_all(&[]).unwrap_err();
        assert!(matches!(err, SpineError::Merge(MergeError::NoInputs)));
    }

    #[test]
    fn different_lineages_are_rejected_by_default() {
        let a = ledger(Some("a"), &[TruthStatus::Pending], "a");
        let b = ledger(Some("b"), &[TruthStatus::Pending], "b");
        let err = MergeEngine::default().merge(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            SpineError::Merge(MergeError::IncompatibleLineage { .. })
        ));
    }

    #[test]
    fn cross_lineage_uses_smallest_genesis_symmetrically() {
        let engine = MergeEngine::new(MergeConfig {
            allow_cross_lineage: true,
            ..MergeConfig::default()
        });
        let a = ledger(Some("a"), &[TruthStatus::Pending], "a");
        let b = ledger(Some("b"), &[TruthStatus::Verified], "b");
        let ab = engine.merge(&a, &b).unwrap();
        let ba = engine.merge(&b, &a).unwrap();
        assert_eq!(ab.ledger.genesis(), a.genesis().min(b.genesis()));
        assert_eq!(ab.ledger.root(), ba.ledger.root());
    }

    #[test]
    fn inputs_under_raised_limits_still_merge() {
        let config = LedgerConfig {
            max_payload_depth: 64,
            ..LedgerConfig::default()
        };
        let mut nested = serde_json::json!("leaf");
        for _ in 0..40 {
            nested = serde_json::json!([nested]);
        }
        let mut a = Ledger::new().with_config(config.clone());
        a.append(Payload::extension([("trace", nested)]), TruthStatus::Verified, None, "a")
            .unwrap();
        let b = Ledger::new().with_config(config);

        let out = MergeEngine::default().merge(&a, &b).unwrap();
        assert_eq!(out.ledger.len(), 1);
        assert_eq!(out.ledger.config().max_payload_depth, 64);
        assert!(out.ledger.verify().ok);
    }

    #[test]
    fn hyper_dominates_canonical() {
        let a = ledger(None, &[TruthStatus::Canonical], "a");
        let b = ledger(None, &[TruthStatus::Hyper], "b");
        let out = MergeEngine::default().merge(&a, &b).unwrap();
        assert_eq!(out.ledger.get(0).unwrap().status, TruthStatus::Hyper);
        assert_eq!(out.conflicts[0].losers[0].status, TruthStatus::Canonical);
    }

    #[test]
    fn theatrical_loses_to_pending() {
        let a = ledger(None, &[TruthStatus::Theatrical], "a");
        let b = ledger(None, &[TruthStatus::Pending], "b");
        let out = MergeEngine::default().merge(&a, &b).unwrap();
        assert_eq!(out.ledger.get(0).unwrap().status, TruthStatus::Pending);
        assert_eq!(out.fidelity, 0.0);
        assert_eq!(out.truth_plane, TruthStatus::Verified);
    }

    #[test]
    fn merging_empty_ledgers_yields_empty_canonical() {
        let out = MergeEngine::default().merge(&Ledger::new(), &Ledger::new()).unwrap();
        assert!(out.ledger.is_empty());
        assert_eq!(out.fidelity, 1.0);
        assert_eq!(out.truth_plane, TruthStatus::Canonical);
    }
}

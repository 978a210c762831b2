//! Auditable pruning: the only way to shorten a ledger's history.
//!
//! Pruning never edits the source ledger. It produces a new ledger on the
//! same lineage whose first record is a `Pruned` receipt naming the prior
//! root and the boundary digest, followed by the retained records
//! re-chained from genesis.

use tracing::info;

use spine_core::errors::{IntegrityError, SpineResult};
use spine_core::models::{Payload, PrunedPayload, RecordDraft, TruthStatus, VantageId};

use crate::ledger::Ledger;

const PRUNE_FALSIFIER: &str =
    "the archived ledger's root does not match prior_root, or its record at the boundary does not chain to boundary";

impl Ledger {
    /// Drop records `[0, keep_from)` and re-chain the rest behind a receipt.
    pub fn rechain_from(
        &self,
        keep_from: usize,
        reason: &str,
        vantage_id: impl Into<VantageId>,
    ) -> SpineResult<Ledger> {
        if keep_from > self.len() {
            return Err(IntegrityError::PruneOutOfRange {
                keep_from,
                len: self.len(),
            }
            .into());
        }
        let boundary = match keep_from {
            0 => self.genesis(),
            n => self.records()[n - 1].chain_digest(),
        };
        let receipt = RecordDraft::new(
            Payload::Pruned(PrunedPayload {
                dropped: keep_from,
                prior_root: self.root(),
                boundary,
                reason: reason.to_string(),
            }),
            TruthStatus::Verified,
            vantage_id,
        )
        .with_falsifier(PRUNE_FALSIFIER);

        let mut pruned = Ledger::with_genesis_digest(self.genesis()).with_config(self.config().clone());
        pruned.append_draft(receipt)?;
        for record in &self.records()[keep_from..] {
            pruned.append_draft(record.to_draft())?;
        }

        info!(
            dropped = keep_from,
            retained = self.len() - keep_from,
            prior_root = %self.root().short(),
            new_root = %pruned.root().short(),
            "ledger pruned and re-chained"
        );
        Ok(pruned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spine_core::errors::SpineError;
    use spine_core::models::ObservationPayload;

    fn ledger(n: usize) -> Ledger {
        let mut ledger = Ledger::new();
        for i in 0..n {
            ledger
                .append(
                    Payload::Observation(ObservationPayload {
                        subject: format!("s{i}"),
                        claim: "c".into(),
                        tags: vec![],
                    }),
                    TruthStatus::Pending,
                    None,
                    "v",
                )
                .unwrap();
        }
        ledger
    }

    #[test]
    fn pruned_ledger_starts_with_receipt_and_verifies() {
        let source = ledger(5);
        let pruned = source.rechain_from(3, "retention window", "archiver").unwrap();
        assert_eq!(pruned.len(), 3);
        assert!(pruned.verify().ok);
        match &pruned.records()[0].payload {
            Payload::Pruned(receipt) => {
                assert_eq!(receipt.dropped, 3);
                assert_eq!(receipt.prior_root, source.root());
                assert_eq!(receipt.boundary, source.records()[2].chain_digest());
            }
            other => panic!("expected prune receipt, got {}", other.kind()),
        }
        assert_eq!(pruned.records()[1].content_hash, source.records()[3].content_hash);
    }

    #[test]
    fn source_ledger_is_untouched() {
        let source = ledger(4);
        let root = source.root();
        let _ = source.rechain_from(2, "r", "a").unwrap();
        assert_eq!(source.root(), root);
        assert_eq!(source.len(), 4);
    }

    #[test]
    fn out_of_range_boundary_is_rejected() {
        let err = ledger(2).rechain_from(3, "r", "a").unwrap_err();
        assert!(matches!(
            err,
            SpineError::Integrity(IntegrityError::PruneOutOfRange { keep_from: 3, len: 2 })
        ));
    }
}

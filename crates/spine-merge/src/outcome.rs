use serde::Serialize;

use spine_core::errors::SpineResult;
use spine_core::models::{ConflictPayload, MergeLandedPayload, Payload, RecordDraft, TruthStatus, VantageId};
use spine_ledger::Ledger;

const LANDING_FALSIFIER: &str =
    "recomputing the merged ledger does not reproduce the recorded root digest";

/// A merged ledger and its fidelity metadata.
#[derive(Debug, Clone, Serialize)]
pub struct MergeOutcome {
    #[serde(skip)]
    pub ledger: Ledger,
    /// `1 − conflict groups / distinct fingerprints`.
    pub fidelity: f64,
    /// `Canonical` when fidelity reaches the configured bar, else `Verified`.
    pub truth_plane: TruthStatus,
    /// Conflicts in fingerprint order, matching the conflict records.
    pub conflicts: Vec<ConflictPayload>,
    pub distinct_events: usize,
}

impl MergeOutcome {
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Land the merge: append a `MergeLanded` receipt carrying the root,
    /// fidelity, and truth plane, and hand back the ledger.
    pub fn land(mut self, vantage: impl Into<VantageId>) -> SpineResult<Ledger> {
        let receipt = RecordDraft::new(
            Payload::MergeLanded(MergeLandedPayload {
                root: self.ledger.root(),
                fidelity: self.fidelity,
                truth_plane: self.truth_plane,
                records: self.ledger.len(),
                conflicts: self.conflicts.len(),
            }),
            self.truth_plane,
            vantage,
        )
        .with_falsifier(LANDING_FALSIFIER);
        self.ledger.append_draft(receipt)?;
        Ok(self.ledger)
    }
}

//! RecoveryController: rebalance detection and staged corrective emission.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use spine_core::config::RecoveryConfig;
use spine_core::constants::RECOVERY_VANTAGE;
use spine_core::errors::{RecoveryError, SpineResult};
use spine_core::hashing::Digest;
use spine_core::models::{AnchorPayload, CorrectionPayload, Payload, RecordDraft, TruthStatus};
use spine_ledger::{Ledger, TransitionMatrix};

use super::allocation::{allocate, Allocation};
use super::target::TargetDistribution;
use crate::entropy;

const CORRECTION_FALSIFIER: &str =
    "natural transitions for this pair keep diverging from the target weight after correction";

/// Entropy comparison for one source state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAssessment {
    pub source: TruthStatus,
    /// Entropy of the observed outgoing distribution, in nats.
    pub current_entropy: f64,
    /// Entropy of the target's conditional distribution, in nats.
    pub target_entropy: f64,
    pub needs_rebalance: bool,
}

impl SourceAssessment {
    pub fn excess(&self) -> f64 {
        self.current_entropy - self.target_entropy
    }
}

/// Result of one emission, with the confidence postcondition exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryReport {
    pub requested: usize,
    pub allocations: Vec<Allocation>,
    /// Records appended: two per allocated unit.
    pub emitted: usize,
    /// Index of the first emitted record.
    pub first_index: usize,
    pub confidence_before: f64,
    pub confidence_after: f64,
}

impl RecoveryReport {
    /// Postcondition: emission did not lower the Confidence score.
    pub fn confidence_non_decreasing(&self) -> bool {
        self.confidence_after >= self.confidence_before
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecoveryController {
    config: RecoveryConfig,
}

impl RecoveryController {
    pub fn new(config: RecoveryConfig) -> Self {
        Self { config }
    }

    /// Compare each observed source row against the target row. Rows absent
    /// from either side are skipped.
    pub fn assess(&self, matrix: &TransitionMatrix, target: &TargetDistribution) -> Vec<SourceAssessment> {
        TruthStatus::ALL
            .into_iter()
            .filter_map(|source| {
                let current = matrix.empirical_distribution(source)?;
                let wanted = target.row_distribution(source)?;
                let current_entropy = entropy::shannon(&current);
                let target_entropy = entropy::shannon(&wanted);
                Some(SourceAssessment {
                    source,
                    current_entropy,
                    target_entropy,
                    needs_rebalance: current_entropy - target_entropy
                        > self.config.entropy_threshold_nats,
                })
            })
            .collect()
    }

    /// True if any source row is flooded beyond the threshold.
    pub fn needs_rebalance(&self, matrix: &TransitionMatrix, target: &TargetDistribution) -> bool {
        self.assess(matrix, target).iter().any(|a| a.needs_rebalance)
    }

    pub fn allocate(&self, target: &TargetDistribution, n: usize) -> Vec<Allocation> {
        allocate(target, n)
    }

    /// Append `n` organic anchor+correction pairs allocated across the target.
    ///
    /// Emission is staged on a copy of the ledger. If `require_non_decreasing`
    /// is set and Confidence would drop, nothing is committed.
    #[instrument(skip_all, fields(len = ledger.len(), n = n))]
    pub fn emit(
        &self,
        ledger: &mut Ledger,
        target: &TargetDistribution,
        n: usize,
    ) -> SpineResult<RecoveryReport> {
        let confidence_before = entropy::confidence(&ledger.transitions());
        let allocations = self.allocate(target, n);
        let first_index = ledger.len();
        let emission = ledger.tip();

        let mut staged = ledger.clone();
        let mut sequence: u32 = 0;
        for allocation in &allocations {
            for _ in 0..allocation.count {
                append_pair(&mut staged, allocation, emission, sequence)?;
                sequence = sequence.saturating_add(1);
            }
        }

        let report = RecoveryReport {
            requested: n,
            emitted: staged.len() - first_index,
            allocations,
            first_index,
            confidence_before,
            confidence_after: entropy::confidence(&staged.transitions()),
        };

        if !report.confidence_non_decreasing() && self.config.require_non_decreasing {
            warn!(
                before = report.confidence_before,
                after = report.confidence_after,
                "recovery refused: confidence would regress"
            );
            return Err(RecoveryError::ConfidenceRegressed {
                before: report.confidence_before,
                after: report.confidence_after,
            }
            .into());
        }

        *ledger = staged;
        info!(
            emitted = report.emitted,
            pairs = report.allocations.len(),
            before = report.confidence_before,
            after = report.confidence_after,
            "recovery emitted"
        );
        Ok(report)
    }
}

fn append_pair(
    ledger: &mut Ledger,
    allocation: &Allocation,
    emission: Digest,
    sequence: u32,
) -> SpineResult<()> {
    let anchor = RecordDraft::new(
        Payload::Anchor(AnchorPayload {
            source: allocation.source,
            target: allocation.target,
            emission,
            sequence,
            organic: true,
        }),
        allocation.source,
        RECOVERY_VANTAGE,
    )
    .with_falsifier(CORRECTION_FALSIFIER);
    let anchor_hash = ledger.append_draft(anchor)?.content_hash;

    let correction = RecordDraft::new(
        Payload::Correction(CorrectionPayload {
            source: allocation.source,
            target: allocation.target,
            sequence,
            anchor: anchor_hash,
            organic: true,
        }),
        allocation.target,
        RECOVERY_VANTAGE,
    )
    .with_falsifier(CORRECTION_FALSIFIER);
    ledger.append_draft(correction)?;
    Ok(())
}

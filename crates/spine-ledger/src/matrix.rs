//! Transition matrix: consecutive-status counts derived from a ledger.
//!
//! Never stored alongside the ledger; always recomputed from it, so it
//! cannot drift from the records it summarizes.

use serde::{Deserialize, Serialize};

use spine_core::constants::{PAIR_COUNT, STATUS_COUNT};
use spine_core::models::{StatusPair, TruthStatus};

/// Counts of observed `from → to` status transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    counts: [[u64; STATUS_COUNT]; STATUS_COUNT],
}

impl TransitionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a status sequence by counting each consecutive pair.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = TruthStatus>,
    {
        let mut matrix = Self::new();
        let mut prev: Option<TruthStatus> = None;
        for status in statuses {
            if let Some(from) = prev {
                matrix.record(from, status);
            }
            prev = Some(status);
        }
        matrix
    }

    /// Build directly from a 5×5 count table in `TruthStatus::ALL` order.
    pub fn from_counts(counts: [[u64; STATUS_COUNT]; STATUS_COUNT]) -> Self {
        Self { counts }
    }

    pub fn record(&mut self, from: TruthStatus, to: TruthStatus) {
        self.counts[from.index()][to.index()] += 1;
    }

    pub fn count(&self, from: TruthStatus, to: TruthStatus) -> u64 {
        self.counts[from.index()][to.index()]
    }

    pub fn pair_count(&self, pair: StatusPair) -> u64 {
        self.count(pair.from, pair.to)
    }

    pub fn row(&self, from: TruthStatus) -> &[u64; STATUS_COUNT] {
        &self.counts[from.index()]
    }

    /// Outgoing transitions observed from `from`.
    pub fn row_total(&self, from: TruthStatus) -> u64 {
        self.row(from).iter().sum()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Number of distinct pairs observed at least once.
    pub fn distinct_pairs(&self) -> usize {
        self.counts.iter().flatten().filter(|&&c| c > 0).count()
    }

    /// Fraction of the `STATUS_COUNT²` pair space observed.
    pub fn pair_coverage(&self) -> f64 {
        self.distinct_pairs() as f64 / PAIR_COUNT as f64
    }

    /// Source states with at least one outgoing transition.
    pub fn observed_sources(&self) -> impl Iterator<Item = TruthStatus> + '_ {
        TruthStatus::ALL
            .into_iter()
            .filter(move |&s| self.row_total(s) > 0)
    }

    /// Empirical outgoing distribution of `from`, or `None` if never observed.
    pub fn empirical_distribution(&self, from: TruthStatus) -> Option<[f64; STATUS_COUNT]> {
        let total = self.row_total(from);
        if total == 0 {
            return None;
        }
        let mut dist = [0.0; STATUS_COUNT];
        for (slot, &count) in dist.iter_mut().zip(self.row(from)) {
            *slot = count as f64 / total as f64;
        }
        Some(dist)
    }

    /// Element-wise sum of two matrices.
    pub fn combined(&self, other: &TransitionMatrix) -> TransitionMatrix {
        let mut out = self.clone();
        for (row, other_row) in out.counts.iter_mut().zip(other.counts.iter()) {
            for (c, o) in row.iter_mut().zip(other_row) {
                *c += o;
            }
        }
        out
    }
}

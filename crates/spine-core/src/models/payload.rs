//! Record payloads: a tagged union of known domain events plus an opaque
//! extension map for free-form generator output.
//!
//! Serialized as `{"type": "...", "data": {...}}` so the variant survives
//! a round trip through storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::status::TruthStatus;
use super::verdict::Verdict;
use super::identity::VantageId;
use crate::hashing::Digest;

/// Payload of a ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// A classified observation of some subject.
    Observation(ObservationPayload),
    /// A numeric score produced by an external formula generator.
    Measurement(MeasurementPayload),
    /// First half of a corrective pair emitted by distribution recovery.
    Anchor(AnchorPayload),
    /// Second half of a corrective pair, linked to its anchor.
    Correction(CorrectionPayload),
    /// A same-event status conflict resolved during merge.
    MergeConflict(ConflictPayload),
    /// Receipt that a merged ledger was landed by its owner.
    MergeLanded(MergeLandedPayload),
    /// A consensus verdict fed back into the spine.
    Verdict(VerdictPayload),
    /// Receipt written at the head of a pruned, re-chained ledger.
    Pruned(PrunedPayload),
    /// Opaque key-value content from external generators.
    Extension(BTreeMap<String, serde_json::Value>),
}

impl Payload {
    /// Variant name, for logs and validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Observation(_) => "observation",
            Self::Measurement(_) => "measurement",
            Self::Anchor(_) => "anchor",
            Self::Correction(_) => "correction",
            Self::MergeConflict(_) => "merge_conflict",
            Self::MergeLanded(_) => "merge_landed",
            Self::Verdict(_) => "verdict",
            Self::Pruned(_) => "pruned",
            Self::Extension(_) => "extension",
        }
    }

    /// True for corrective records tagged `organic`.
    pub fn is_organic(&self) -> bool {
        match self {
            Self::Anchor(a) => a.organic,
            Self::Correction(c) => c.organic,
            _ => false,
        }
    }

    /// Shorthand for an extension payload built from key-value pairs.
    pub fn extension<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, serde_json::Value)>,
    {
        Self::Extension(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationPayload {
    pub subject: String,
    pub claim: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPayload {
    /// Name of the generator that produced the score.
    pub formula: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub inputs: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorPayload {
    pub source: TruthStatus,
    pub target: TruthStatus,
    /// Ledger tip when the emission started; distinguishes repeated emissions.
    pub emission: Digest,
    /// Position of this pair within one recovery emission.
    pub sequence: u32,
    pub organic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionPayload {
    pub source: TruthStatus,
    pub target: TruthStatus,
    pub sequence: u32,
    /// Content hash of the anchor this correction completes.
    pub anchor: Digest,
    pub organic: bool,
}

/// One side of a merge conflict.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConflictSide {
    pub status: TruthStatus,
    pub vantage: VantageId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPayload {
    pub fingerprint: Digest,
    pub winner: ConflictSide,
    /// Every losing (status, vantage), sorted.
    pub losers: Vec<ConflictSide>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeLandedPayload {
    /// Root chain digest of the merged ledger before this receipt.
    pub root: Digest,
    pub fidelity: f64,
    pub truth_plane: TruthStatus,
    pub records: usize,
    pub conflicts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictPayload {
    pub topic: String,
    pub round: u64,
    pub verdict: Verdict,
    pub quorum: usize,
    #[serde(default)]
    pub evidence: Option<Digest>,
    pub agreeing_vantages: usize,
    #[serde(default)]
    pub missions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrunedPayload {
    pub dropped: usize,
    /// Root chain digest of the source ledger at prune time.
    pub prior_root: Digest,
    /// Chain digest of the last dropped record.
    pub boundary: Digest,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_tagged_in_json() {
        let p = Payload::Observation(ObservationPayload {
            subject: "dns".into(),
            claim: "resolves".into(),
            tags: vec![],
        });
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["type"], "observation");
        assert_eq!(v["data"]["subject"], "dns");
    }

    #[test]
    fn only_tagged_corrections_are_organic() {
        let anchor = Payload::Anchor(AnchorPayload {
            source: TruthStatus::Pending,
            target: TruthStatus::Verified,
            emission: Digest::GENESIS,
            sequence: 0,
            organic: true,
        });
        assert!(anchor.is_organic());
        assert!(!Payload::extension([("k", serde_json::json!(1))]).is_organic());
    }
}

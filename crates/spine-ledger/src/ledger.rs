//! The ledger: an ordered, append-only sequence of hash-linked records.
//!
//! # Examples
//!
//! ```
//! use spine_core::models::{Payload, TruthStatus};
//! use spine_ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.append(Payload::extension([("probe", serde_json::json!("dns"))]), TruthStatus::Pending, None, "eu-west").unwrap();
//! ledger.append(Payload::extension([("probe", serde_json::json!("tls"))]), TruthStatus::Verified, Some("cert mismatch".into()), "eu-west").unwrap();
//! assert!(ledger.verify().ok);
//! assert_eq!(ledger.transitions().total(), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use spine_core::config::LedgerConfig;
use spine_core::errors::{IntegrityError, SpineError, SpineResult};
use spine_core::hashing::{lineage_genesis, Digest};
use spine_core::models::{Payload, Record, RecordDraft, TruthStatus, VantageId};
use spine_core::traits::{RecordSink, RecordSource};

use crate::matrix::TransitionMatrix;
use crate::validation::validate_payload;

/// Outcome of walking the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub ok: bool,
    pub first_break_index: Option<usize>,
    /// Records checked before stopping (all of them when `ok`).
    pub checked: usize,
    #[serde(skip)]
    pub error: Option<IntegrityError>,
}

impl VerificationResult {
    /// Convert into a `Result`, surfacing the break as an integrity error.
    pub fn into_result(self) -> SpineResult<()> {
        match self.error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

/// An append-only, hash-chained ledger owned by one writer.
#[derive(Debug, Clone)]
pub struct Ledger {
    genesis: Digest,
    records: Vec<Record>,
    config: LedgerConfig,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// An empty ledger on the default lineage.
    pub fn new() -> Self {
        Self::with_genesis_digest(Digest::GENESIS)
    }

    /// An empty ledger on a lineage derived from `seed`.
    pub fn with_genesis(seed: &str) -> Self {
        Self::with_genesis_digest(lineage_genesis(seed))
    }

    pub fn with_genesis_digest(genesis: Digest) -> Self {
        Self {
            genesis,
            records: Vec::new(),
            config: LedgerConfig::default(),
        }
    }

    /// Replace the payload acceptance limits.
    pub fn with_config(mut self, config: LedgerConfig) -> Self {
        self.config = config;
        self
    }

    /// Rebuild a ledger from persisted records, rejecting any broken chain.
    pub fn from_records(genesis: Digest, records: Vec<Record>) -> SpineResult<Self> {
        let ledger = Self::open_unverified(genesis, records);
        ledger.verify().into_result()?;
        Ok(ledger)
    }

    /// Open persisted records without verifying them, for auditing a store
    /// that may have been tampered with. Call [`Ledger::verify`] before
    /// trusting or appending to the result.
    pub fn open_unverified(genesis: Digest, records: Vec<Record>) -> Self {
        Self {
            genesis,
            records,
            config: LedgerConfig::default(),
        }
    }

    /// Load and verify a ledger from a storage source.
    pub fn load(source: &impl RecordSource, genesis: Digest) -> SpineResult<Self> {
        let records = source.load()?;
        debug!(records = records.len(), "loaded records from storage");
        Self::from_records(genesis, records)
    }

    pub fn genesis(&self) -> Digest {
        self.genesis
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Chain digest of the last record, or the genesis sentinel if empty.
    pub fn tip(&self) -> Digest {
        self.records
            .last()
            .map(Record::chain_digest)
            .unwrap_or(self.genesis)
    }

    /// Root chain digest identifying the ledger's full history.
    pub fn root(&self) -> Digest {
        self.tip()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn statuses(&self) -> impl Iterator<Item = TruthStatus> + '_ {
        self.records.iter().map(|r| r.status)
    }

    pub fn contains_status(&self, status: TruthStatus) -> bool {
        self.records.iter().any(|r| r.status == status)
    }

    /// Append a record stamped with the current time.
    pub fn append(
        &mut self,
        payload: Payload,
        status: TruthStatus,
        falsifier: Option<String>,
        vantage_id: impl Into<VantageId>,
    ) -> SpineResult<&Record> {
        let mut draft = RecordDraft::new(payload, status, vantage_id);
        draft.falsifier = falsifier;
        self.append_draft(draft)
    }

    /// Validate, seal, and append a draft.
    ///
    /// Either the record is fully appended or the ledger is left unmodified.
    pub fn append_draft(&mut self, draft: RecordDraft) -> SpineResult<&Record> {
        let record = self.seal_next(draft)?;
        Ok(self.push(record))
    }

    /// Append and forward the sealed record to a storage sink.
    ///
    /// The sink sees the record before the ledger does; a sink failure leaves
    /// the ledger unmodified.
    pub fn append_to(&mut self, draft: RecordDraft, sink: &mut dyn RecordSink) -> SpineResult<&Record> {
        let record = self.seal_next(draft)?;
        sink.accept(&record)?;
        Ok(self.push(record))
    }

    fn seal_next(&self, draft: RecordDraft) -> SpineResult<Record> {
        let report = validate_payload(&draft.payload, draft.falsifier.as_deref(), &self.config)?;
        if !report.is_valid() {
            warn!(
                kind = draft.payload.kind(),
                violations = report.violations.len(),
                "rejected malformed payload"
            );
            return Err(SpineError::MalformedPayload {
                violations: report.violations,
            });
        }
        Record::seal(draft, self.tip())
    }

    fn push(&mut self, record: Record) -> &Record {
        debug!(
            index = self.records.len(),
            status = %record.status,
            vantage = %record.vantage_id,
            content = %record.content_hash.short(),
            "record appended"
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Walk the chain, recomputing every content and chain digest.
    #[instrument(skip(self), fields(len = self.records.len()))]
    pub fn verify(&self) -> VerificationResult {
        let mut expected_prev = self.genesis;
        for (index, record) in self.records.iter().enumerate() {
            let error = match record.recompute_content_hash() {
                Ok(content) if content != record.content_hash => Some(IntegrityError::ContentMismatch {
                    index,
                    expected: content,
                    found: record.content_hash,
                }),
                Err(e) => Some(IntegrityError::Unhashable {
                    index,
                    reason: e.to_string(),
                }),
                Ok(_) if record.prev_hash != expected_prev => Some(IntegrityError::ChainBreak {
                    index,
                    expected: expected_prev,
                    found: record.prev_hash,
                }),
                Ok(_) => None,
            };
            if let Some(error) = error {
                warn!(index, %error, "ledger integrity break");
                return VerificationResult {
                    ok: false,
                    first_break_index: Some(index),
                    checked: index,
                    error: Some(error),
                };
            }
            expected_prev = record.chain_digest();
        }
        VerificationResult {
            ok: true,
            first_break_index: None,
            checked: self.records.len(),
            error: None,
        }
    }

    /// Consecutive-status transition counts. O(n), recomputed on every call.
    pub fn transitions(&self) -> TransitionMatrix {
        TransitionMatrix::from_statuses(self.statuses())
    }

    /// Transition counts split by whether the destination record is organic.
    ///
    /// Returns `(natural, organic)`; their sum equals [`Ledger::transitions`].
    pub fn transitions_by_origin(&self) -> (TransitionMatrix, TransitionMatrix) {
        let mut natural = TransitionMatrix::new();
        let mut organic = TransitionMatrix::new();
        for pair in self.records.windows(2) {
            let target = if pair[1].is_organic() {
                &mut organic
            } else {
                &mut natural
            };
            target.record(pair[0].status, pair[1].status);
        }
        (natural, organic)
    }

}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

//! Ledger records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::VantageId;
use super::payload::Payload;
use super::status::TruthStatus;
use crate::errors::SpineResult;
use crate::hashing::{self, Digest};

/// An immutable, sealed ledger record.
///
/// Its ordinal index is implicit in its position in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub payload: Payload,
    pub status: TruthStatus,
    #[serde(default)]
    pub falsifier: Option<String>,
    pub vantage_id: VantageId,
    pub timestamp: DateTime<Utc>,
    /// Digest over payload + status + falsifier.
    pub content_hash: Digest,
    /// Chain digest of the predecessor, or the ledger's genesis sentinel.
    pub prev_hash: Digest,
}

impl Record {
    /// Seal a draft onto a chain tip.
    pub fn seal(draft: RecordDraft, prev_hash: Digest) -> SpineResult<Self> {
        let content_hash = draft.content_digest()?;
        Ok(Self {
            payload: draft.payload,
            status: draft.status,
            falsifier: draft.falsifier,
            vantage_id: draft.vantage_id,
            timestamp: draft.timestamp,
            content_hash,
            prev_hash,
        })
    }

    /// Chain digest of this record; the successor's `prev_hash` must equal it.
    pub fn chain_digest(&self) -> Digest {
        hashing::chain_digest(&self.prev_hash, &self.content_hash)
    }

    /// Recompute the content digest from the record's own fields.
    pub fn recompute_content_hash(&self) -> SpineResult<Digest> {
        hashing::content_digest(&self.payload, self.status, self.falsifier.as_deref())
    }

    pub fn fingerprint(&self) -> SpineResult<Digest> {
        hashing::event_fingerprint(&self.payload, self.falsifier.as_deref())
    }

    pub fn is_organic(&self) -> bool {
        self.payload.is_organic()
    }

    /// Strip chain fields, yielding a draft that can be re-sealed elsewhere.
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            payload: self.payload.clone(),
            status: self.status,
            falsifier: self.falsifier.clone(),
            vantage_id: self.vantage_id.clone(),
            timestamp: self.timestamp,
        }
    }
}

/// An unsealed record: every field except the chain linkage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub payload: Payload,
    pub status: TruthStatus,
    #[serde(default)]
    pub falsifier: Option<String>,
    pub vantage_id: VantageId,
    pub timestamp: DateTime<Utc>,
}

impl RecordDraft {
    pub fn new(payload: Payload, status: TruthStatus, vantage_id: impl Into<VantageId>) -> Self {
        Self {
            payload,
            status,
            falsifier: None,
            vantage_id: vantage_id.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_falsifier(mut self, falsifier: impl Into<String>) -> Self {
        self.falsifier = Some(falsifier.into());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn content_digest(&self) -> SpineResult<Digest> {
        hashing::content_digest(&self.payload, self.status, self.falsifier.as_deref())
    }

    pub fn fingerprint(&self) -> SpineResult<Digest> {
        hashing::event_fingerprint(&self.payload, self.falsifier.as_deref())
    }
}

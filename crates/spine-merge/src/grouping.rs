//! Fingerprint grouping and per-group resolution.

use std::collections::BTreeMap;

use spine_core::errors::SpineResult;
use spine_core::hashing::{canonical_bytes, Digest};
use spine_core::models::{ConflictPayload, ConflictSide, Record, RecordDraft};

/// One input record, stripped of chain fields.
pub(crate) struct Candidate {
    draft: RecordDraft,
    /// Canonical serialization of the draft; the deterministic sort key.
    key: Vec<u8>,
}

impl Candidate {
    fn from_record(record: &Record) -> SpineResult<(Digest, Self)> {
        let draft = record.to_draft();
        let key = canonical_bytes(&draft)?;
        Ok((record.fingerprint()?, Self { draft, key }))
    }
}

/// The surviving record of one event, plus its conflict if any.
pub(crate) struct Resolution {
    pub fingerprint: Digest,
    pub winner: RecordDraft,
    pub conflict: Option<ConflictPayload>,
}

/// Group every record of every input by fingerprint.
pub(crate) fn group<'a, I>(ledgers: I) -> SpineResult<BTreeMap<Digest, Vec<Candidate>>>
where
    I: IntoIterator<Item = &'a [Record]>,
{
    let mut groups: BTreeMap<Digest, Vec<Candidate>> = BTreeMap::new();
    for records in ledgers {
        for record in records {
            let (fingerprint, candidate) = Candidate::from_record(record)?;
            groups.entry(fingerprint).or_default().push(candidate);
        }
    }
    Ok(groups)
}

/// Resolve one group: highest-ranked status wins, ties between
/// serializations go to the lexicographically smallest.
pub(crate) fn resolve(fingerprint: Digest, mut candidates: Vec<Candidate>) -> Option<Resolution> {
    candidates.sort_by(|a, b| {
        b.draft
            .status
            .rank()
            .cmp(&a.draft.status.rank())
            .then_with(|| a.key.cmp(&b.key))
    });
    let mut iter = candidates.into_iter();
    let winner = iter.next()?.draft;

    let mut losers: Vec<ConflictSide> = iter
        .filter(|c| c.draft.status != winner.status)
        .map(|c| ConflictSide {
            status: c.draft.status,
            vantage: c.draft.vantage_id,
        })
        .collect();
    losers.sort();
    losers.dedup();

    let conflict = (!losers.is_empty()).then(|| ConflictPayload {
        fingerprint,
        winner: ConflictSide {
            status: winner.status,
            vantage: winner.vantage_id.clone(),
        },
        losers,
    });
    Some(Resolution {
        fingerprint,
        winner,
        conflict,
    })
}

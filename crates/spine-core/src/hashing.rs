//! Canonical hasher: deterministic blake3 digests over sorted-key JSON.
//!
//! Three digests are derived from a record:
//! - **content**: payload + status + falsifier (no chain fields)
//! - **chain**: `H(prev_hash || content)`
//! - **fingerprint**: payload + falsifier only, identifying "the same event"
//!   independently of who assessed it, when, or how.
//!
//! Every digest is domain-separated by a fixed tag so a content digest can
//! never collide with a chain digest over the same bytes.
//!
//! # Examples
//!
//! ```
//! use spine_core::hashing::{chain_digest, Digest};
//!
//! let a = chain_digest(&Digest::GENESIS, &Digest::of(b"x"));
//! let b = chain_digest(&Digest::GENESIS, &Digest::of(b"x"));
//! assert_eq!(a, b);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constants::{
    CHAIN_DIGEST_TAG, CONTENT_DIGEST_TAG, FINGERPRINT_TAG, LINEAGE_TAG,
};
use crate::errors::{IntegrityError, SpineResult};
use crate::models::{Payload, TruthStatus};

/// A 256-bit blake3 digest, serialized as lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    /// The genesis sentinel: `prev_hash` of the first record of a default-lineage ledger.
    pub const GENESIS: Digest = Digest([0u8; 32]);

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Plain blake3 of arbitrary bytes, without a domain tag.
    pub fn of(bytes: &[u8]) -> Self {
        Self(*blake3::hash(bytes).as_bytes())
    }

    pub fn to_hex(&self) -> String {
        blake3::Hash::from_bytes(self.0).to_hex().to_string()
    }

    /// First 12 hex characters, for log lines.
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(12);
        hex
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short())
    }
}

impl FromStr for Digest {
    type Err = IntegrityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        blake3::Hash::from_hex(s)
            .map(|h| Self(*h.as_bytes()))
            .map_err(|e| IntegrityError::InvalidDigest(format!("{s}: {e}")))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Serialize any value to canonical JSON bytes: object keys sorted at every
/// depth, no insignificant whitespace.
///
/// Independent of serde_json's `preserve_order` feature.
pub fn canonical_bytes<T: Serialize + ?Sized>(value: &T) -> SpineResult<Vec<u8>> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_vec(&sort_keys(value))?)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Tagged blake3 over a sequence of byte slices.
pub fn tagged_digest(tag: &[u8], parts: &[&[u8]]) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(tag);
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    Digest(*hasher.finalize().as_bytes())
}

#[derive(Serialize)]
struct ContentView<'a> {
    payload: &'a Payload,
    status: TruthStatus,
    falsifier: Option<&'a str>,
}

#[derive(Serialize)]
struct FingerprintView<'a> {
    payload: &'a Payload,
    falsifier: Option<&'a str>,
}

/// Content digest of a record: payload, status, and falsifier.
///
/// Excludes chain linkage, vantage, and timestamp.
pub fn content_digest(
    payload: &Payload,
    status: TruthStatus,
    falsifier: Option<&str>,
) -> SpineResult<Digest> {
    let bytes = canonical_bytes(&ContentView {
        payload,
        status,
        falsifier,
    })?;
    Ok(tagged_digest(CONTENT_DIGEST_TAG, &[&bytes]))
}

/// Chain digest: `H(prev_hash || content_digest)`.
pub fn chain_digest(prev_hash: &Digest, content: &Digest) -> Digest {
    tagged_digest(CHAIN_DIGEST_TAG, &[prev_hash.as_bytes(), content.as_bytes()])
}

/// Event fingerprint: everything except chain fields, status, timestamp, and vantage.
pub fn event_fingerprint(payload: &Payload, falsifier: Option<&str>) -> SpineResult<Digest> {
    let bytes = canonical_bytes(&FingerprintView { payload, falsifier })?;
    Ok(tagged_digest(FINGERPRINT_TAG, &[&bytes]))
}

/// Derive a genesis sentinel for a distinct lineage from a seed.
pub fn lineage_genesis(seed: &str) -> Digest {
    tagged_digest(LINEAGE_TAG, &[seed.as_bytes()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::ObservationPayload;

    fn obs(subject: &str) -> Payload {
        Payload::Observation(ObservationPayload {
            subject: subject.to_string(),
            claim: "latency under 20ms".to_string(),
            tags: vec![],
        })
    }

    #[test]
    fn canonical_bytes_sorts_keys_at_every_depth() {
        let a: Value = serde_json::json!({"b": 1, "a": {"d": 2, "c": 3}});
        let bytes = canonical_bytes(&a).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"a":{"c":3,"d":2},"b":1}"#
        );
    }

    #[test]
    fn content_digest_is_stable_across_calls() {
        let p = obs("dns");
        let a = content_digest(&p, TruthStatus::Verified, Some("x")).unwrap();
        let b = content_digest(&p, TruthStatus::Verified, Some("x")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn content_digest_covers_status_and_falsifier() {
        let p = obs("dns");
        let base = content_digest(&p, TruthStatus::Verified, None).unwrap();
        assert_ne!(base, content_digest(&p, TruthStatus::Canonical, None).unwrap());
        assert_ne!(base, content_digest(&p, TruthStatus::Verified, Some("f")).unwrap());
    }

    #[test]
    fn fingerprint_ignores_status() {
        let p = obs("tls");
        let a = event_fingerprint(&p, None).unwrap();
        assert_ne!(a, event_fingerprint(&obs("http"), None).unwrap());
        // Content digests differ by status, fingerprints never see it.
        assert_eq!(a, event_fingerprint(&p.clone(), None).unwrap());
    }

    #[test]
    fn chain_and_content_domains_are_separated() {
        let d = Digest::of(b"seed");
        assert_ne!(chain_digest(&d, &d), tagged_digest(CONTENT_DIGEST_TAG, &[d.as_bytes(), d.as_bytes()]));
    }

    #[test]
    fn digest_hex_roundtrip() {
        let d = Digest::of(b"spine");
        let parsed: Digest = d.to_hex().parse().unwrap();
        assert_eq!(parsed, d);
        assert!("not-hex".parse::<Digest>().is_err());
    }

    #[test]
    fn lineage_genesis_differs_from_default() {
        assert_ne!(lineage_genesis("vantage-a"), Digest::GENESIS);
        assert_eq!(lineage_genesis("vantage-a"), lineage_genesis("vantage-a"));
    }
}

//! Test fixture loader and deterministic ledger builders shared across the
//! spine crates.
//!
//! Golden JSON files live under `test-fixtures/golden/` at the workspace root.
//! Builders use fixed timestamps so that merged roots are reproducible.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;

use spine_core::models::{ObservationPayload, Payload, RecordDraft, TruthStatus};
use spine_ledger::Ledger;

/// Status sequence of 26 records whose 25 consecutive pairs cover every
/// (source, destination) pair exactly once.
pub const EULERIAN_STATUSES: [TruthStatus; 26] = {
    use TruthStatus::*;
    [
        Pending, Pending, Verified, Pending, Canonical, Pending, Theatrical, Pending, Hyper,
        Verified, Verified, Canonical, Verified, Theatrical, Verified, Hyper, Canonical,
        Canonical, Theatrical, Canonical, Hyper, Theatrical, Theatrical, Hyper, Hyper, Pending,
    ]
};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Walk up from whichever crate is running until the golden directory shows up.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Fixed epoch used by every builder.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid fixture epoch"))
}

/// `base_time()` plus `seconds`.
pub fn timestamp(seconds: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(seconds)
}

/// Observation payload unique to `index`.
pub fn observation(index: usize) -> Payload {
    Payload::Observation(ObservationPayload {
        subject: format!("endpoint-{index:03}"),
        claim: "reachable within budget".to_string(),
        tags: vec!["probe".to_string()],
    })
}

/// Draft of event `index` with a falsifier and a timestamp of `index` seconds.
pub fn draft(index: usize, status: TruthStatus, vantage: &str) -> RecordDraft {
    RecordDraft::new(observation(index), status, vantage)
        .with_falsifier(format!("endpoint-{index:03} unreachable from a second vantage"))
        .at(timestamp(index as i64))
}

/// Ledger with one record per status, events numbered from 0.
pub fn ledger_from_statuses(statuses: &[TruthStatus], vantage: &str) -> Ledger {
    let mut ledger = Ledger::new();
    for (i, status) in statuses.iter().enumerate() {
        ledger
            .append_draft(draft(i, *status, vantage))
            .unwrap_or_else(|e| panic!("fixture append {i} failed: {e}"));
    }
    ledger
}

/// Ledger whose transition matrix has exactly one count in every cell.
pub fn uniform_ledger() -> Ledger {
    ledger_from_statuses(&EULERIAN_STATUSES, "fixture")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_ledger_covers_every_pair_once() {
        let matrix = uniform_ledger().transitions();
        for from in TruthStatus::ALL {
            for to in TruthStatus::ALL {
                assert_eq!(matrix.count(from, to), 1, "{from}->{to}");
            }
        }
    }

    #[test]
    fn golden_consensus_fixture_parses() {
        let value: serde_json::Value = load_fixture("golden/consensus_rounds.json");
        assert!(value["cases"].as_array().is_some_and(|c| !c.is_empty()));
    }
}

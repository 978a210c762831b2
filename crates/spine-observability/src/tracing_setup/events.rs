//! Named events shared across crates, so every emitter uses the same
//! `event` tag and field names.

use spine_core::hashing::Digest;
use spine_core::models::{TruthStatus, Verdict};

/// Log a chain integrity break. Breaks are never repaired silently.
pub fn integrity_break(index: usize, reason: &str) {
    tracing::warn!(
        event = "integrity_break",
        index = index,
        reason = %reason,
        "ledger integrity break"
    );
}

/// Log a completed merge.
pub fn merge_completed(records: usize, conflicts: usize, fidelity: f64, truth_plane: TruthStatus) {
    tracing::info!(
        event = "merge_completed",
        records = records,
        conflicts = conflicts,
        fidelity = fidelity,
        truth_plane = %truth_plane,
        "merge completed"
    );
}

/// Log one resolved merge conflict.
pub fn conflict_resolved(fingerprint: &Digest, winner: TruthStatus, losers: usize) {
    tracing::debug!(
        event = "conflict_resolved",
        fingerprint = %fingerprint.short(),
        winner = %winner,
        losers = losers,
        "merge conflict resolved"
    );
}

/// Log a consensus verdict.
pub fn verdict_reached(topic: &str, round: u64, verdict: Verdict, missions: usize) {
    tracing::info!(
        event = "verdict_reached",
        topic = %topic,
        round = round,
        verdict = %verdict,
        missions = missions,
        "verdict reached"
    );
}

/// Log a source row flagged as flooded.
pub fn rebalance_needed(source: TruthStatus, excess_nats: f64) {
    tracing::warn!(
        event = "rebalance_needed",
        source = %source,
        excess_nats = excess_nats,
        "transition distribution needs rebalance"
    );
}

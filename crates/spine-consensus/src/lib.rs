//! # spine-consensus
//!
//! Separates independently checkable facts from opinion. Only `Observable`
//! attestations can produce a verdict; agreement that does not span enough
//! distinct vantages is treated as theater, and disagreement is kept as a
//! mission to investigate instead of being voted away.
//!
//! ## Verdict ladder
//!
//! | Condition | Verdict |
//! |-----------|---------|
//! | fewer than `quorum` observable attestations | `Pending` |
//! | fewer than `quorum` distinct vantages overall | `Theatrical` |
//! | largest evidence group ≥ quorum, spanning ≥ quorum vantages | `Canonical` |
//! | largest evidence group ≥ quorum, fewer vantages | `Verified` |
//! | otherwise | `Pending`, with disagreements |
//!
//! Rounds carry an explicit [`RoundContext`]; there is no process-wide round
//! counter.

pub mod context;
pub mod engine;
pub mod mission;
pub mod outcome;
pub mod reputation;
pub mod round;

pub use context::RoundContext;
pub use engine::ConsensusEngine;
pub use mission::{Mission, MissionReason};
pub use outcome::{Disagreement, RoundFlag, RoundOutcome};
pub use reputation::ReputationBook;
pub use round::ConsensusRound;

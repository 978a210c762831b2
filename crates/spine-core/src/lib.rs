//! # spine-core
//!
//! Foundation crate for the spine ledger engine.
//! Defines records, payloads, truth statuses, attestations, the canonical
//! hasher, errors, config, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SpineConfig;
pub use errors::{SpineError, SpineResult};
pub use hashing::Digest;
pub use models::{
    AgentId, Attestation, Layer, Payload, Record, RecordDraft, TruthStatus, VantageId, Verdict,
};

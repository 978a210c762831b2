//! # spine-ledger
//!
//! The append-only, hash-chained ledger at the center of the spine.
//!
//! - **append**: validate, seal onto the chain tip, push. Atomic.
//! - **verify**: walk the chain and report the first broken index.
//! - **transitions**: one linear scan producing consecutive-status counts.
//! - **rechain_from**: the only way to shorten history: a new ledger
//!   headed by an auditable `Pruned` receipt.
//!
//! Single writer per ledger; no internal locking.

pub mod ledger;
pub mod matrix;
pub mod prune;
pub mod storage;
pub mod validation;

pub use ledger::{Ledger, VerificationResult};
pub use matrix::TransitionMatrix;
pub use storage::JsonlStore;
pub use validation::validate_payload;

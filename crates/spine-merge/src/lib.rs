//! # spine-merge
//!
//! Reconciles ledgers grown independently by different vantages into one
//! canonical ledger, with no arbiter and no dependence on input order.
//!
//! Records are grouped by event fingerprint (payload and falsifier only).
//! A group whose records disagree on status is resolved by merge precedence,
//! `Hyper > Canonical > Verified > Pending > Theatrical`, and documented by a
//! conflict record appended after the winners.
//!
//! Same inputs, in any order, give byte-identical output.

pub mod engine;
mod grouping;
pub mod outcome;

pub use engine::MergeEngine;
pub use outcome::MergeOutcome;

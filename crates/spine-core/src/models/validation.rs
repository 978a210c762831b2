//! Structured validation outcomes for record payloads.
//!
//! Violations make an append fail with no effect on the ledger.
//! Warnings are reported but never block.

use serde::{Deserialize, Serialize};

/// A reason a payload cannot be canonically recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum PayloadViolation {
    #[error("non-finite number in {field}")]
    NonFiniteNumber { field: String },

    #[error("required field {field} is empty")]
    EmptyField { field: String },

    #[error("extension key must not be empty")]
    EmptyExtensionKey,

    #[error("payload nesting depth {depth} exceeds {max}")]
    TooDeep { depth: usize, max: usize },

    #[error("serialized payload is {bytes} bytes, limit {max}")]
    TooLarge { bytes: usize, max: usize },

    #[error("{field} must lie in [0, 1]")]
    OutOfUnitRange { field: String },
}

/// A schema concern that does not block an append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaWarning {
    /// No falsifier was supplied; the record is not Canonical-grade.
    MissingFalsifier,
}

/// Result of validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub violations: Vec<PayloadViolation>,
    pub warnings: Vec<SchemaWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

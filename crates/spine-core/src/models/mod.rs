pub mod attestation;
pub mod identity;
pub mod payload;
pub mod record;
pub mod status;
pub mod validation;
pub mod verdict;

pub use attestation::{Attestation, Layer};
pub use identity::{AgentId, VantageId};
pub use payload::{
    AnchorPayload, ConflictPayload, ConflictSide, CorrectionPayload, MeasurementPayload,
    MergeLandedPayload, ObservationPayload, Payload, PrunedPayload, VerdictPayload,
};
pub use record::{Record, RecordDraft};
pub use status::{StatusPair, TruthStatus};
pub use validation::{PayloadViolation, SchemaWarning, ValidationReport};
pub use verdict::Verdict;

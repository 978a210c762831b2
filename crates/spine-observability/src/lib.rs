//! # spine-observability
//!
//! Subscriber setup driven by `ObservabilityConfig` (overridable with
//! `SPINE_LOG`), named events shared by the engines, and health reporting
//! over a ledger snapshot.

pub mod health;
pub mod tracing_setup;

pub use health::{HealthReport, HealthReporter, HealthSnapshot, HealthStatus, SubsystemHealth};

//! Distribution recovery: detect flooded transition rows and emit organic
//! corrective records toward a target distribution.

mod allocation;
mod controller;
mod target;

pub use allocation::{allocate, Allocation};
pub use controller::{RecoveryController, RecoveryReport, SourceAssessment};
pub use target::TargetDistribution;

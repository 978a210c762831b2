//! Health reporting across the ledger's subsystems.

pub mod recommendations;
pub mod reporter;
pub mod subsystem_checks;

use serde::{Deserialize, Serialize};

pub use recommendations::{Recommendation, Severity};
pub use reporter::{HealthReporter, HealthSnapshot};
pub use subsystem_checks::SubsystemChecker;

/// Coarse status of one subsystem or of the whole engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsystemHealth {
    pub name: String,
    pub status: HealthStatus,
    pub message: Option<String>,
}

/// Headline numbers copied out of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub records: usize,
    pub transitions: u64,
    pub maturity: f64,
    pub coverage: f64,
    pub confidence: f64,
    pub schema_enforcement_rate: f64,
    pub organic_share: f64,
    pub flooded_sources: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall_status: HealthStatus,
    pub subsystems: Vec<SubsystemHealth>,
    pub metrics: HealthMetrics,
    pub recommendations: Vec<Recommendation>,
}

impl HealthReport {
    pub fn subsystem(&self, name: &str) -> Option<&SubsystemHealth> {
        self.subsystems.iter().find(|s| s.name == name)
    }
}

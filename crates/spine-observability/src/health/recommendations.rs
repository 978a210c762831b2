//! Actionable recommendations based on ledger health.

use serde::{Deserialize, Serialize};

use super::reporter::HealthSnapshot;
use super::subsystem_checks::MIN_FALSIFIER_RATE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
    pub action: String,
}

pub fn generate(snapshot: &HealthSnapshot) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if let Some(index) = snapshot.verification.first_break_index {
        recs.push(Recommendation {
            severity: Severity::Critical,
            message: format!("chain integrity broken at record {index}"),
            action: "restore the ledger from a verified copy; do not append".into(),
        });
    }

    for flagged in snapshot.assessments.iter().filter(|a| a.needs_rebalance) {
        recs.push(Recommendation {
            severity: Severity::Warning,
            message: format!(
                "{} row exceeds target entropy by {:.3} nats",
                flagged.source,
                flagged.excess()
            ),
            action: "emit recovery records toward the target distribution".into(),
        });
    }

    if !snapshot.oracle.ready_to_speak && snapshot.records > 0 {
        recs.push(Recommendation {
            severity: Severity::Info,
            message: format!(
                "maturity is {:.2}; {} of 25 transition pairs observed",
                snapshot.oracle.maturity,
                (snapshot.oracle.coverage * 25.0).round() as u32
            ),
            action: "keep observing before acting on predictions".into(),
        });
    }

    if snapshot.records > 0 && snapshot.oracle.schema_enforcement_rate < MIN_FALSIFIER_RATE {
        recs.push(Recommendation {
            severity: Severity::Warning,
            message: format!(
                "falsifier coverage is {:.0}%",
                snapshot.oracle.schema_enforcement_rate * 100.0
            ),
            action: "attach a falsifier to every new claim".into(),
        });
    }

    recs
}

//! Per-subsystem checks: chain integrity, maturity, distribution shape, and
//! falsifier coverage.

use super::reporter::HealthSnapshot;
use super::{HealthStatus, SubsystemHealth};

/// Records without a falsifier above this share degrade the report.
pub const MIN_FALSIFIER_RATE: f64 = 0.5;

pub struct SubsystemChecker;

impl SubsystemChecker {
    pub fn check_all(snapshot: &HealthSnapshot) -> Vec<SubsystemHealth> {
        vec![
            Self::check_integrity(snapshot),
            Self::check_maturity(snapshot),
            Self::check_distribution(snapshot),
            Self::check_falsifiers(snapshot),
        ]
    }

    /// Integrity: unhealthy on any chain break.
    fn check_integrity(snapshot: &HealthSnapshot) -> SubsystemHealth {
        let v = &snapshot.verification;
        let (status, message) = match (v.ok, v.first_break_index) {
            (true, _) => (HealthStatus::Healthy, None),
            (false, Some(index)) => (
                HealthStatus::Unhealthy,
                Some(format!("chain broken at record {index}")),
            ),
            (false, None) => (HealthStatus::Unhealthy, Some("chain broken".into())),
        };
        SubsystemHealth {
            name: "integrity".into(),
            status,
            message,
        }
    }

    /// Maturity: degraded until the oracle is ready to speak.
    fn check_maturity(snapshot: &HealthSnapshot) -> SubsystemHealth {
        let (status, message) = if snapshot.oracle.ready_to_speak {
            (HealthStatus::Healthy, None)
        } else {
            (
                HealthStatus::Degraded,
                Some(format!("maturity {:.2} below readiness", snapshot.oracle.maturity)),
            )
        };
        SubsystemHealth {
            name: "maturity".into(),
            status,
            message,
        }
    }

    fn check_distribution(snapshot: &HealthSnapshot) -> SubsystemHealth {
        let flooded = snapshot.flooded_sources();
        let (status, message) = if flooded > 0 {
            (
                HealthStatus::Degraded,
                Some(format!("{flooded} source rows flooded toward uniform")),
            )
        } else {
            (HealthStatus::Healthy, None)
        };
        SubsystemHealth {
            name: "distribution".into(),
            status,
            message,
        }
    }

    fn check_falsifiers(snapshot: &HealthSnapshot) -> SubsystemHealth {
        let rate = snapshot.oracle.schema_enforcement_rate;
        let (status, message) = if snapshot.records > 0 && rate < MIN_FALSIFIER_RATE {
            (
                HealthStatus::Degraded,
                Some(format!("only {:.0}% of records carry a falsifier", rate * 100.0)),
            )
        } else {
            (HealthStatus::Healthy, None)
        };
        SubsystemHealth {
            name: "falsifiers".into(),
            status,
            message,
        }
    }
}

//! Aggregate health report generation.

use spine_integrity::{IntegrityOracle, OracleReport, RecoveryController, SourceAssessment, TargetDistribution};
use spine_ledger::{Ledger, VerificationResult};

use super::recommendations::{self, Recommendation};
use super::subsystem_checks::SubsystemChecker;
use super::{HealthMetrics, HealthReport, HealthStatus, SubsystemHealth};
use crate::tracing_setup::events;

/// Everything a health report is derived from, captured at one instant.
#[derive(Debug, Clone)]
pub struct HealthSnapshot {
    pub records: usize,
    pub verification: VerificationResult,
    pub oracle: OracleReport,
    /// Empty when no target distribution was supplied.
    pub assessments: Vec<SourceAssessment>,
}

impl HealthSnapshot {
    /// Verify the chain, score it, and optionally compare its rows against a target.
    pub fn capture(
        ledger: &Ledger,
        oracle: &IntegrityOracle,
        recovery: Option<(&RecoveryController, &TargetDistribution)>,
    ) -> Self {
        let verification = ledger.verify();
        if let (Some(index), Some(error)) = (verification.first_break_index, verification.error.as_ref()) {
            events::integrity_break(index, &error.to_string());
        }

        let assessments = match recovery {
            Some((controller, target)) => controller.assess(&ledger.transitions(), target),
            None => Vec::new(),
        };
        for flagged in assessments.iter().filter(|a| a.needs_rebalance) {
            events::rebalance_needed(flagged.source, flagged.excess());
        }

        Self {
            records: ledger.len(),
            verification,
            oracle: oracle.evaluate(ledger),
            assessments,
        }
    }

    pub fn flooded_sources(&self) -> usize {
        self.assessments.iter().filter(|a| a.needs_rebalance).count()
    }
}

/// Builds a [`HealthReport`] from a snapshot and subsystem checks.
pub struct HealthReporter;

impl HealthReporter {
    pub fn build(snapshot: &HealthSnapshot) -> HealthReport {
        let subsystems = SubsystemChecker::check_all(snapshot);
        let overall_status = Self::derive_overall(&subsystems);

        HealthReport {
            overall_status,
            subsystems,
            metrics: HealthMetrics {
                records: snapshot.records,
                transitions: snapshot.oracle.transitions,
                maturity: snapshot.oracle.maturity,
                coverage: snapshot.oracle.coverage,
                confidence: snapshot.oracle.confidence,
                schema_enforcement_rate: snapshot.oracle.schema_enforcement_rate,
                organic_share: snapshot.oracle.organic_share,
                flooded_sources: snapshot.flooded_sources(),
            },
            recommendations: Self::recommendations(snapshot),
        }
    }

    pub fn recommendations(snapshot: &HealthSnapshot) -> Vec<Recommendation> {
        recommendations::generate(snapshot)
    }

    /// Unhealthy if any subsystem is unhealthy, degraded if any is degraded,
    /// otherwise healthy.
    pub fn derive_overall(subsystems: &[SubsystemHealth]) -> HealthStatus {
        let mut worst = HealthStatus::Healthy;
        for s in subsystems {
            match s.status {
                HealthStatus::Unhealthy => return HealthStatus::Unhealthy,
                HealthStatus::Degraded => worst = HealthStatus::Degraded,
                HealthStatus::Healthy => {}
            }
        }
        worst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subsystem(status: HealthStatus) -> SubsystemHealth {
        SubsystemHealth {
            name: "x".into(),
            status,
            message: None,
        }
    }

    #[test]
    fn unhealthy_dominates() {
        let subs = [
            subsystem(HealthStatus::Degraded),
            subsystem(HealthStatus::Unhealthy),
            subsystem(HealthStatus::Healthy),
        ];
        assert_eq!(HealthReporter::derive_overall(&subs), HealthStatus::Unhealthy);
    }

    #[test]
    fn degraded_beats_healthy() {
        let subs = [subsystem(HealthStatus::Healthy), subsystem(HealthStatus::Degraded)];
        assert_eq!(HealthReporter::derive_overall(&subs), HealthStatus::Degraded);
        assert_eq!(HealthReporter::derive_overall(&[]), HealthStatus::Healthy);
    }
}

//! Payload validation, evaluated eagerly before anything is sealed.
//!
//! Returns a structured report instead of failing fast, so a caller sees
//! every violation at once.

use serde_json::Value;

use spine_core::config::LedgerConfig;
use spine_core::errors::SpineResult;
use spine_core::hashing::canonical_bytes;
use spine_core::models::{Payload, PayloadViolation, SchemaWarning, ValidationReport};

/// Validate a payload and its falsifier against the ledger limits.
///
/// Only serialization itself can fail; every schema problem is reported in
/// the returned [`ValidationReport`].
pub fn validate_payload(
    payload: &Payload,
    falsifier: Option<&str>,
    config: &LedgerConfig,
) -> SpineResult<ValidationReport> {
    let mut report = ValidationReport::default();
    check_variant(payload, &mut report.violations);

    let value = serde_json::to_value(payload)?;
    let depth = json_depth(&value);
    if depth > config.max_payload_depth {
        report.violations.push(PayloadViolation::TooDeep {
            depth,
            max: config.max_payload_depth,
        });
    }

    let bytes = canonical_bytes(&value)?.len();
    if bytes > config.max_payload_bytes {
        report.violations.push(PayloadViolation::TooLarge {
            bytes,
            max: config.max_payload_bytes,
        });
    }

    if falsifier.map_or(true, |f| f.trim().is_empty()) {
        report.warnings.push(SchemaWarning::MissingFalsifier);
    }
    Ok(report)
}

fn check_variant(payload: &Payload, violations: &mut Vec<PayloadViolation>) {
    match payload {
        Payload::Observation(obs) => {
            require_text(&obs.subject, "observation.subject", violations);
        }
        Payload::Measurement(m) => {
            require_text(&m.formula, "measurement.formula", violations);
            require_finite(m.value, "measurement.value", violations);
            for (name, value) in &m.inputs {
                if name.is_empty() {
                    violations.push(PayloadViolation::EmptyField {
                        field: "measurement.inputs key".to_string(),
                    });
                }
                require_finite(*value, &format!("measurement.inputs.{name}"), violations);
            }
        }
        Payload::MergeLanded(landed) => {
            if !landed.fidelity.is_finite() {
                require_finite(landed.fidelity, "merge_landed.fidelity", violations);
            } else if !(0.0..=1.0).contains(&landed.fidelity) {
                violations.push(PayloadViolation::OutOfUnitRange {
                    field: "merge_landed.fidelity".to_string(),
                });
            }
        }
        Payload::Verdict(v) => require_text(&v.topic, "verdict.topic", violations),
        Payload::Pruned(p) => require_text(&p.reason, "pruned.reason", violations),
        Payload::Extension(map) => {
            if map.keys().any(|k| k.is_empty()) {
                violations.push(PayloadViolation::EmptyExtensionKey);
            }
        }
        Payload::Anchor(_) | Payload::Correction(_) | Payload::MergeConflict(_) => {}
    }
}

fn require_text(value: &str, field: &str, violations: &mut Vec<PayloadViolation>) {
    if value.trim().is_empty() {
        violations.push(PayloadViolation::EmptyField {
            field: field.to_string(),
        });
    }
}

fn require_finite(value: f64, field: &str, violations: &mut Vec<PayloadViolation>) {
    if !value.is_finite() {
        violations.push(PayloadViolation::NonFiniteNumber {
            field: field.to_string(),
        });
    }
}

/// Nesting depth of a JSON value; scalars are depth 0.
fn json_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(json_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(json_depth).max().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use spine_core::models::{MeasurementPayload, ObservationPayload};

    fn config() -> LedgerConfig {
        LedgerConfig::default()
    }

    #[test]
    fn well_formed_observation_passes_with_falsifier() {
        let p = Payload::Observation(ObservationPayload {
            subject: "dns".into(),
            claim: "resolves".into(),
            tags: vec![],
        });
        let report = validate_payload(&p, Some("NXDOMAIN"), &config()).unwrap();
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_falsifier_is_a_warning_not_a_violation() {
        let p = Payload::extension([("k", serde_json::json!("v"))]);
        let report = validate_payload(&p, Some("   "), &config()).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.warnings, vec![SchemaWarning::MissingFalsifier]);
    }

    #[test]
    fn non_finite_measurements_are_rejected() {
        let mut inputs = BTreeMap::new();
        inputs.insert("rtt".to_string(), f64::INFINITY);
        let p = Payload::Measurement(MeasurementPayload {
            formula: "latency_score".into(),
            value: f64::NAN,
            unit: None,
            inputs,
        });
        let report = validate_payload(&p, None, &config()).unwrap();
        assert_eq!(report.violations.len(), 2);
    }

    #[test]
    fn deep_extension_is_rejected() {
        let mut nested = serde_json::json!(1);
        for _ in 0..40 {
            nested = serde_json::json!([nested]);
        }
        let p = Payload::extension([("deep", nested)]);
        let report = validate_payload(&p, None, &config()).unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, PayloadViolation::TooDeep { .. })));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let cfg = LedgerConfig {
            max_payload_bytes: 64,
            ..LedgerConfig::default()
        };
        let p = Payload::extension([("blob", serde_json::json!("x".repeat(200)))]);
        let report = validate_payload(&p, None, &cfg).unwrap();
        assert!(matches!(report.violations[0], PayloadViolation::TooLarge { .. }));
    }

    #[test]
    fn empty_extension_key_is_rejected() {
        let p = Payload::extension([("", serde_json::json!(null))]);
        let report = validate_payload(&p, None, &config()).unwrap();
        assert_eq!(report.violations, vec![PayloadViolation::EmptyExtensionKey]);
    }
}

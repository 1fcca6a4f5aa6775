//! Additional services total calculation.
//!
//! Selected add-on identifiers are priced from the catalog. Selection is a
//! set: duplicates collapse. An identifier that no longer resolves is treated
//! as "service no longer offered" and contributes zero; it produces an audit
//! warning rather than a validation error.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::collections::HashSet;

use crate::catalog::AdditionalService;
use crate::models::{AdditionalServiceLine, AuditStep, AuditWarning};

/// The result of pricing the selected add-on services.
#[derive(Debug, Clone)]
pub struct AdditionalServicesResult {
    /// The priced add-on lines, in selection order.
    pub lines: Vec<AdditionalServiceLine>,
    /// The sum of all line prices.
    pub total: Decimal,
    /// One warning per selected identifier that did not resolve.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices the selected add-on services.
///
/// Duplicated identifiers are collapsed, preserving first-seen order.
/// Identifiers missing from the catalog contribute zero silently at the
/// price level, with a low-severity audit warning for follow-up.
///
/// # Arguments
///
/// * `selected` - The selected add-on identifiers
/// * `available` - The catalog's add-on table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::calculate_additional_services;
/// use quote_engine::catalog::AdditionalService;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
/// use std::str::FromStr;
///
/// let mut available = HashMap::new();
/// available.insert(
///     "scalpMassage".to_string(),
///     AdditionalService {
///         name: "Massage du cuir chevelu".to_string(),
///         price: Decimal::from_str("15").unwrap(),
///         duration_hours: Decimal::from_str("0.25").unwrap(),
///         description: String::new(),
///     },
/// );
///
/// let result =
///     calculate_additional_services(&["scalpMassage".to_string()], &available, 1);
/// assert_eq!(result.total, Decimal::from_str("15").unwrap());
/// ```
pub fn calculate_additional_services(
    selected: &[String],
    available: &HashMap<String, AdditionalService>,
    step_number: u32,
) -> AdditionalServicesResult {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut lines = Vec::new();
    let mut warnings = Vec::new();
    let mut total = Decimal::ZERO;

    for id in selected {
        if !seen.insert(id.as_str()) {
            continue;
        }
        match available.get(id) {
            Some(service) => {
                total += service.price;
                lines.push(AdditionalServiceLine {
                    id: id.clone(),
                    name: service.name.clone(),
                    price: service.price,
                });
            }
            None => {
                warnings.push(AuditWarning {
                    code: "unknown_additional_service".to_string(),
                    message: format!(
                        "Selected add-on '{}' is no longer offered; priced at $0",
                        id
                    ),
                    severity: "low".to_string(),
                });
            }
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "additional_services".to_string(),
        rule_name: "Additional Services".to_string(),
        input: serde_json::json!({ "selected": selected }),
        output: serde_json::json!({
            "priced": lines
                .iter()
                .map(|line| {
                    serde_json::json!({
                        "id": line.id,
                        "price": line.price.normalize().to_string()
                    })
                })
                .collect::<Vec<_>>(),
            "skipped": warnings.len(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} add-on(s) priced, {} unknown identifier(s) skipped, total ${}",
            lines.len(),
            warnings.len(),
            total.normalize()
        ),
    };

    AdditionalServicesResult {
        lines,
        total,
        warnings,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn available() -> HashMap<String, AdditionalService> {
        let mut map = HashMap::new();
        map.insert(
            "deepConditioning".to_string(),
            AdditionalService {
                name: "Soin profond".to_string(),
                price: dec("20"),
                duration_hours: dec("0.5"),
                description: String::new(),
            },
        );
        map.insert(
            "scalpMassage".to_string(),
            AdditionalService {
                name: "Massage du cuir chevelu".to_string(),
                price: dec("15"),
                duration_hours: dec("0.25"),
                description: String::new(),
            },
        );
        map
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    /// AS-001: two known add-ons sum their prices
    #[test]
    fn test_two_known_addons_sum() {
        let result = calculate_additional_services(
            &ids(&["deepConditioning", "scalpMassage"]),
            &available(),
            1,
        );

        assert_eq!(result.total, dec("35"));
        assert_eq!(result.lines.len(), 2);
        assert!(result.warnings.is_empty());
    }

    /// AS-002: empty selection totals zero
    #[test]
    fn test_empty_selection_totals_zero() {
        let result = calculate_additional_services(&[], &available(), 1);

        assert_eq!(result.total, Decimal::ZERO);
        assert!(result.lines.is_empty());
    }

    /// AS-003: unknown identifier contributes zero beside a known one
    #[test]
    fn test_unknown_identifier_contributes_zero() {
        let result = calculate_additional_services(
            &ids(&["deepConditioning", "discontinued"]),
            &available(),
            1,
        );

        assert_eq!(result.total, dec("20"));
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "unknown_additional_service");
        assert_eq!(result.warnings[0].severity, "low");
    }

    /// AS-004: duplicate selections collapse
    #[test]
    fn test_duplicate_selections_collapse() {
        let result = calculate_additional_services(
            &ids(&["scalpMassage", "scalpMassage", "scalpMassage"]),
            &available(),
            1,
        );

        assert_eq!(result.total, dec("15"));
        assert_eq!(result.lines.len(), 1);
    }

    /// AS-005: lines keep selection order
    #[test]
    fn test_lines_keep_selection_order() {
        let result = calculate_additional_services(
            &ids(&["scalpMassage", "deepConditioning"]),
            &available(),
            1,
        );

        assert_eq!(result.lines[0].id, "scalpMassage");
        assert_eq!(result.lines[1].id, "deepConditioning");
    }

    #[test]
    fn test_audit_step_counts_priced_and_skipped() {
        let result = calculate_additional_services(
            &ids(&["deepConditioning", "ghost"]),
            &available(),
            6,
        );

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.output["skipped"].as_u64().unwrap(), 1);
        assert_eq!(result.audit_step.output["total"].as_str().unwrap(), "20");
    }
}

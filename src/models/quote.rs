//! Quote breakdown models for the Price Quotation Engine.
//!
//! This module contains the [`QuoteBreakdown`] type and its associated
//! structures that capture all outputs from a quote calculation, including
//! the labor line, travel fee, add-on lines, tax, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FactorSelection;

/// The labor portion of a quote.
///
/// Retains every intermediate value so a receipt can show how the labor cost
/// was derived: the base rate, the experience adjustment, the estimated
/// hours, and whether the price-range clamp fired.
///
/// # Example
///
/// ```
/// use quote_engine::models::LaborLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let labor = LaborLine {
///     base_hourly_rate: Decimal::from_str("22.00").unwrap(),
///     hourly_rate_multiplier: Decimal::ONE,
///     adjusted_hourly_rate: Decimal::from_str("22.00").unwrap(),
///     estimated_hours: Decimal::from_str("3.0").unwrap(),
///     raw_labor_cost: Decimal::from_str("66.00").unwrap(),
///     labor_cost: Decimal::from_str("66.00").unwrap(),
///     clamped: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborLine {
    /// The service's hourly rate before the experience adjustment.
    pub base_hourly_rate: Decimal,
    /// The experience level's hourly-rate multiplier.
    pub hourly_rate_multiplier: Decimal,
    /// The hourly rate actually charged (base x multiplier).
    pub adjusted_hourly_rate: Decimal,
    /// The hours the quote was computed with (estimated or manually entered).
    pub estimated_hours: Decimal,
    /// The unclamped product of rate and hours.
    pub raw_labor_cost: Decimal,
    /// The labor cost after clamping into the service's price range.
    pub labor_cost: Decimal,
    /// Whether the price-range clamp changed the raw cost.
    pub clamped: bool,
}

/// The travel fee portion of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelLine {
    /// The one-way travel distance in kilometers.
    pub distance_km: Decimal,
    /// The distance covered by the flat base fee.
    pub threshold_km: Decimal,
    /// The resulting travel fee.
    pub fee: Decimal,
}

/// One selected add-on service, priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalServiceLine {
    /// The add-on identifier.
    pub id: String,
    /// The add-on's display name.
    pub name: String,
    /// The add-on's flat price.
    pub price: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a pricing rule
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent a quote but may require
/// attention, such as a selected add-on that is no longer offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a quote calculation.
///
/// Records every pricing decision made so a quote can be explained line by
/// line to the customer.
///
/// # Example
///
/// ```
/// use quote_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 42,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a quote calculation.
///
/// Carries every intermediate amount the presentation layer needs to render
/// a line-itemized summary, plus an echo of the selections the quote was
/// computed from. Quotes are ephemeral: each carries a fresh id and
/// timestamp and nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the quote.
    pub engine_version: String,
    /// The selected service identifier.
    pub service_id: String,
    /// The selected service's display name.
    pub service_name: String,
    /// The selected experience level identifier.
    pub experience: String,
    /// The hair factor selections the quote was computed with.
    pub factors: FactorSelection,
    /// The labor line with all intermediate values.
    pub labor: LaborLine,
    /// The travel fee line.
    pub travel: TravelLine,
    /// The priced add-on lines.
    pub additional_services: Vec<AdditionalServiceLine>,
    /// The sum of all add-on prices.
    pub additional_services_total: Decimal,
    /// Labor cost + travel fee + add-ons total.
    pub subtotal: Decimal,
    /// The tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// The tax amount (subtotal x tax rate).
    pub tax_amount: Decimal,
    /// The tax-inclusive final price.
    pub total_price: Decimal,
    /// The audit trace for the calculation.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> QuoteBreakdown {
        QuoteBreakdown {
            quote_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            service_id: "cornrows".to_string(),
            service_name: "Cornrows simples".to_string(),
            experience: "experimente".to_string(),
            factors: FactorSelection {
                length: "moyen".to_string(),
                thickness: "moyen".to_string(),
                braid_size: "moyenne".to_string(),
                density: "normale".to_string(),
            },
            labor: LaborLine {
                base_hourly_rate: dec("22.00"),
                hourly_rate_multiplier: Decimal::ONE,
                adjusted_hourly_rate: dec("22.00"),
                estimated_hours: dec("3.0"),
                raw_labor_cost: dec("66.00"),
                labor_cost: dec("66.00"),
                clamped: false,
            },
            travel: TravelLine {
                distance_km: dec("20"),
                threshold_km: dec("15"),
                fee: dec("15"),
            },
            additional_services: vec![],
            additional_services_total: Decimal::ZERO,
            subtotal: dec("81.00"),
            tax_rate: dec("0.13"),
            tax_amount: dec("10.53"),
            total_price: dec("91.53"),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        }
    }

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let breakdown = sample_breakdown();
        let json = serde_json::to_value(&breakdown).unwrap();

        assert_eq!(json["labor"]["labor_cost"], "66.00");
        assert_eq!(json["total_price"], "91.53");
        assert_eq!(json["factors"]["braidSize"], "moyenne");
    }

    #[test]
    fn test_breakdown_round_trips() {
        let breakdown = sample_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();
        let back: QuoteBreakdown = serde_json::from_str(&json).unwrap();

        assert_eq!(back.quote_id, breakdown.quote_id);
        assert_eq!(back.labor, breakdown.labor);
        assert_eq!(back.total_price, breakdown.total_price);
    }

    #[test]
    fn test_audit_step_payloads_are_json() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "duration_estimate".to_string(),
            rule_name: "Duration Estimate".to_string(),
            input: serde_json::json!({"base_hours": "3"}),
            output: serde_json::json!({"hours": "3.0"}),
            reasoning: "3 x 1 x 1 = 3.0 hours".to_string(),
        };

        assert_eq!(step.input["base_hours"], "3");
        assert_eq!(step.output["hours"], "3.0");
    }
}

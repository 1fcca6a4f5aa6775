//! Labor cost calculation with price-range clamping.
//!
//! The labor cost starts as rate x hours, then is clamped into the service's
//! business-declared price band. The band takes precedence over the formula:
//! hourly-rate arithmetic can drift outside the quoted range, and the quote
//! must stay inside it.

use rust_decimal::Decimal;

use crate::catalog::PriceRange;
use crate::models::AuditStep;

/// The result of a labor cost calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct LaborCostResult {
    /// The unclamped product of rate and hours.
    pub raw_cost: Decimal,
    /// The labor cost after clamping into the price range.
    pub labor_cost: Decimal,
    /// Whether the clamp changed the raw cost.
    pub clamped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the labor cost and clamps it into the service's price range.
///
/// If the raw cost falls below the range minimum it snaps to the minimum;
/// above the maximum it snaps to the maximum; otherwise it passes through
/// unchanged.
///
/// # Arguments
///
/// * `hourly_rate` - The experience-adjusted hourly rate
/// * `hours` - The estimated or manually-entered labor hours
/// * `price_range` - The service's declared price band
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::calculate_labor_cost;
/// use quote_engine::catalog::PriceRange;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let range = PriceRange {
///     min: Decimal::from_str("40").unwrap(),
///     max: Decimal::from_str("90").unwrap(),
/// };
///
/// let result = calculate_labor_cost(
///     Decimal::from_str("22.00").unwrap(),
///     Decimal::from_str("3").unwrap(),
///     &range,
///     1,
/// );
/// assert_eq!(result.labor_cost, Decimal::from_str("66.00").unwrap());
/// assert!(!result.clamped);
/// ```
pub fn calculate_labor_cost(
    hourly_rate: Decimal,
    hours: Decimal,
    price_range: &PriceRange,
    step_number: u32,
) -> LaborCostResult {
    let raw_cost = hourly_rate * hours;

    let labor_cost = if raw_cost < price_range.min {
        price_range.min
    } else if raw_cost > price_range.max {
        price_range.max
    } else {
        raw_cost
    };
    let clamped = labor_cost != raw_cost;

    let reasoning = if clamped {
        format!(
            "${} x {} h = ${} falls outside the quoted range [${}, ${}]; snapped to ${}",
            hourly_rate.normalize(),
            hours.normalize(),
            raw_cost.normalize(),
            price_range.min.normalize(),
            price_range.max.normalize(),
            labor_cost.normalize()
        )
    } else {
        format!(
            "${} x {} h = ${}, within the quoted range [${}, ${}]",
            hourly_rate.normalize(),
            hours.normalize(),
            raw_cost.normalize(),
            price_range.min.normalize(),
            price_range.max.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "labor_cost".to_string(),
        rule_name: "Labor Cost".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours": hours.normalize().to_string(),
            "price_range_min": price_range.min.normalize().to_string(),
            "price_range_max": price_range.max.normalize().to_string()
        }),
        output: serde_json::json!({
            "raw_cost": raw_cost.normalize().to_string(),
            "labor_cost": labor_cost.normalize().to_string(),
            "clamped": clamped
        }),
        reasoning,
    };

    LaborCostResult {
        raw_cost,
        labor_cost,
        clamped,
        audit_step,
    }
}

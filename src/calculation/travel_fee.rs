//! Travel fee calculation functionality.
//!
//! The stylist travels to the customer, so every appointment carries a flat
//! base fee; beyond the threshold distance a per-kilometer surcharge applies
//! on the excess only, making the fee continuous at the threshold.

use rust_decimal::Decimal;

use crate::catalog::PricingConstants;
use crate::models::AuditStep;

/// The result of a travel fee calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TravelFeeResult {
    /// The resulting travel fee.
    pub fee: Decimal,
    /// Kilometers beyond the flat-fee threshold (zero when within it).
    pub excess_km: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the tiered travel fee for a distance.
///
/// Flat `travel_fee_base` for distances up to and including the threshold;
/// above it, `travel_fee_base + (distance - threshold) x travel_fee_per_km`.
/// Distance may be fractional and has no upper bound.
///
/// # Arguments
///
/// * `distance_km` - The validated, non-negative travel distance
/// * `constants` - The global pricing constants
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::calculate_travel_fee;
/// use quote_engine::catalog::PricingConstants;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = PricingConstants {
///     travel_fee_base: Decimal::from_str("10").unwrap(),
///     travel_fee_per_km: Decimal::from_str("1").unwrap(),
///     travel_fee_threshold_km: Decimal::from_str("15").unwrap(),
///     tax_rate: Decimal::from_str("0.13").unwrap(),
///     min_time_multiplier: Decimal::from_str("0.5").unwrap(),
///     max_time_multiplier: Decimal::from_str("2.0").unwrap(),
/// };
///
/// let result = calculate_travel_fee(Decimal::from_str("20").unwrap(), &constants, 1);
/// assert_eq!(result.fee, Decimal::from_str("15").unwrap());
/// ```
pub fn calculate_travel_fee(
    distance_km: Decimal,
    constants: &PricingConstants,
    step_number: u32,
) -> TravelFeeResult {
    let threshold = constants.travel_fee_threshold_km;
    let excess_km = if distance_km > threshold {
        distance_km - threshold
    } else {
        Decimal::ZERO
    };
    let fee = constants.travel_fee_base + excess_km * constants.travel_fee_per_km;

    let reasoning = if excess_km > Decimal::ZERO {
        format!(
            "{} km exceeds the {} km included; ${} + {} km x ${}/km = ${}",
            distance_km.normalize(),
            threshold.normalize(),
            constants.travel_fee_base.normalize(),
            excess_km.normalize(),
            constants.travel_fee_per_km.normalize(),
            fee.normalize()
        )
    } else {
        format!(
            "{} km is within the {} km included; flat fee ${}",
            distance_km.normalize(),
            threshold.normalize(),
            fee.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "travel_fee".to_string(),
        rule_name: "Travel Fee".to_string(),
        input: serde_json::json!({
            "distance_km": distance_km.normalize().to_string(),
            "threshold_km": threshold.normalize().to_string(),
            "base_fee": constants.travel_fee_base.normalize().to_string(),
            "per_km": constants.travel_fee_per_km.normalize().to_string()
        }),
        output: serde_json::json!({
            "excess_km": excess_km.normalize().to_string(),
            "fee": fee.normalize().to_string()
        }),
        reasoning,
    };

    TravelFeeResult {
        fee,
        excess_km,
        audit_step,
    }
}

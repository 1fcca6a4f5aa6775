//! Labor duration estimation functionality.
//!
//! This module provides the factor-based duration estimate: the four hair
//! factor impacts are summed, scaled into a multiplier, and combined with the
//! stylist's experience-level duration multiplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ExperienceLevel;
use crate::models::AuditStep;

/// Weight applied to the summed factor impacts when forming the duration
/// multiplier: `multiplier = 1 + IMPACT_WEIGHT x total_impact`.
pub const IMPACT_WEIGHT: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// The resolved time-impact coefficients for the four hair factor families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorImpacts {
    /// Hair length impact.
    pub length: Decimal,
    /// Hair thickness impact.
    pub thickness: Decimal,
    /// Braid size impact.
    pub braid_size: Decimal,
    /// Hair density impact.
    pub density: Decimal,
}

impl FactorImpacts {
    /// Sums the four impacts.
    pub fn total(&self) -> Decimal {
        self.length + self.thickness + self.braid_size + self.density
    }
}

/// The result of a duration estimate, including the audit step.
#[derive(Debug, Clone)]
pub struct DurationEstimate {
    /// The estimated labor duration in hours.
    pub hours: Decimal,
    /// The summed factor impacts.
    pub total_impact: Decimal,
    /// The duration multiplier formed from the impacts.
    pub impact_multiplier: Decimal,
    /// The audit step recording this estimate.
    pub audit_step: AuditStep,
}

/// Estimates the labor duration for a service.
///
/// The estimate is `base_hours x (1 + 0.2 x total_impact) x
/// experience.duration_multiplier`. The result has no upper bound here; the
/// business's price band is enforced later against the labor *cost*, not the
/// hours. The catalog's declared min/max time-multiplier bounds are not
/// applied either; quotes match the in-salon calculator, which never clamped
/// duration.
///
/// # Arguments
///
/// * `base_hours` - The service's baseline duration in hours
/// * `impacts` - The resolved time-impact coefficients for the four factors
/// * `experience_id` - The experience level identifier, for the audit step
/// * `experience` - The resolved experience level
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// A [`DurationEstimate`] with the hours, the intermediate multiplier, and
/// an audit step. The result is positive whenever `base_hours` is positive
/// and the impacts keep the multiplier positive, which holds for every
/// combination in the shipped catalog.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::{estimate_duration, FactorImpacts};
/// use quote_engine::catalog::ExperienceLevel;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let experience = ExperienceLevel {
///     name: "Experimentee".to_string(),
///     hourly_rate_multiplier: Decimal::ONE,
///     duration_multiplier: Decimal::ONE,
/// };
/// let neutral = FactorImpacts {
///     length: Decimal::ZERO,
///     thickness: Decimal::ZERO,
///     braid_size: Decimal::ZERO,
///     density: Decimal::ZERO,
/// };
///
/// let estimate = estimate_duration(
///     Decimal::from_str("3").unwrap(),
///     &neutral,
///     "experimente",
///     &experience,
///     1,
/// );
/// assert_eq!(estimate.hours, Decimal::from_str("3").unwrap());
/// ```
pub fn estimate_duration(
    base_hours: Decimal,
    impacts: &FactorImpacts,
    experience_id: &str,
    experience: &ExperienceLevel,
    step_number: u32,
) -> DurationEstimate {
    let total_impact = impacts.total();
    let impact_multiplier = Decimal::ONE + IMPACT_WEIGHT * total_impact;
    let hours = base_hours * impact_multiplier * experience.duration_multiplier;

    let audit_step = AuditStep {
        step_number,
        rule_id: "duration_estimate".to_string(),
        rule_name: "Duration Estimate".to_string(),
        input: serde_json::json!({
            "base_hours": base_hours.normalize().to_string(),
            "impacts": {
                "length": impacts.length.normalize().to_string(),
                "thickness": impacts.thickness.normalize().to_string(),
                "braid_size": impacts.braid_size.normalize().to_string(),
                "density": impacts.density.normalize().to_string()
            },
            "experience": experience_id,
            "duration_multiplier": experience.duration_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_impact": total_impact.normalize().to_string(),
            "impact_multiplier": impact_multiplier.normalize().to_string(),
            "hours": hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} x (1 + {} x {}) x {} = {} hours",
            base_hours.normalize(),
            IMPACT_WEIGHT.normalize(),
            total_impact.normalize(),
            experience.duration_multiplier.normalize(),
            hours.normalize()
        ),
    };

    DurationEstimate {
        hours,
        total_impact,
        impact_multiplier,
        audit_step,
    }
}

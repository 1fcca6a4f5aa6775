//! Hourly rate adjustment functionality.
//!
//! This module scales a service's base hourly rate by the stylist's
//! experience-level rate multiplier.

use rust_decimal::Decimal;

use crate::catalog::ExperienceLevel;
use crate::models::AuditStep;

/// The result of an hourly rate adjustment, including the audit step.
#[derive(Debug, Clone)]
pub struct AdjustedRate {
    /// The hourly rate after the experience adjustment.
    pub rate: Decimal,
    /// The audit step recording this adjustment.
    pub audit_step: AuditStep,
}

/// Adjusts a base hourly rate for a stylist's experience level.
///
/// Pure multiplication, no clamping: `rate = base_rate x
/// experience.hourly_rate_multiplier`. The business's price band is applied
/// later against the labor cost, not the rate.
///
/// # Arguments
///
/// * `base_rate` - The service's hourly rate before adjustment
/// * `experience_id` - The experience level identifier, for the audit step
/// * `experience` - The resolved experience level
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::adjusted_hourly_rate;
/// use quote_engine::catalog::ExperienceLevel;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let expert = ExperienceLevel {
///     name: "Experte".to_string(),
///     hourly_rate_multiplier: Decimal::from_str("1.2").unwrap(),
///     duration_multiplier: Decimal::from_str("0.85").unwrap(),
/// };
///
/// let result = adjusted_hourly_rate(Decimal::from_str("22.00").unwrap(), "expert", &expert, 1);
/// assert_eq!(result.rate, Decimal::from_str("26.40").unwrap());
/// ```
pub fn adjusted_hourly_rate(
    base_rate: Decimal,
    experience_id: &str,
    experience: &ExperienceLevel,
    step_number: u32,
) -> AdjustedRate {
    let rate = base_rate * experience.hourly_rate_multiplier;

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate_adjustment".to_string(),
        rule_name: "Hourly Rate Adjustment".to_string(),
        input: serde_json::json!({
            "base_rate": base_rate.normalize().to_string(),
            "experience": experience_id,
            "hourly_rate_multiplier": experience.hourly_rate_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "adjusted_rate": rate.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${} per hour",
            base_rate.normalize(),
            experience.hourly_rate_multiplier.normalize(),
            rate.normalize()
        ),
    };

    AdjustedRate { rate, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn level(rate: &str, duration: &str) -> ExperienceLevel {
        ExperienceLevel {
            name: "Test".to_string(),
            hourly_rate_multiplier: dec(rate),
            duration_multiplier: dec(duration),
        }
    }

    /// HR-001: neutral multiplier returns the base rate
    #[test]
    fn test_neutral_multiplier_returns_base_rate() {
        let result = adjusted_hourly_rate(dec("22.00"), "experimente", &level("1", "1"), 1);

        assert_eq!(result.rate, dec("22.00"));
        assert_eq!(result.audit_step.rule_id, "hourly_rate_adjustment");
    }

    /// HR-002: expert premium raises the rate
    #[test]
    fn test_expert_premium_raises_rate() {
        let result = adjusted_hourly_rate(dec("22.00"), "expert", &level("1.2", "0.85"), 1);

        assert_eq!(result.rate, dec("26.400"));
        assert!(result.audit_step.reasoning.contains("$22"));
        assert!(result.audit_step.reasoning.contains("1.2"));
    }

    /// HR-003: beginner discount lowers the rate
    #[test]
    fn test_beginner_discount_lowers_rate() {
        let result = adjusted_hourly_rate(dec("26.00"), "debutante", &level("0.8", "1.3"), 1);

        assert_eq!(result.rate, dec("20.80"));
    }

    /// HR-004: no clamping is applied to the adjusted rate
    #[test]
    fn test_no_clamping_on_adjusted_rate() {
        let result = adjusted_hourly_rate(dec("100"), "expert", &level("1.2", "0.85"), 1);

        assert_eq!(result.rate, dec("120"));
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let result = adjusted_hourly_rate(dec("22.00"), "experimente", &level("1", "1"), 7);

        assert_eq!(result.audit_step.step_number, 7);
    }
}

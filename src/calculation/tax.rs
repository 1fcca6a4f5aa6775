//! Sales tax calculation functionality.
//!
//! The tax is a flat rate on the subtotal (labor + travel + add-ons); the
//! final price is the subtotal plus the tax amount.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of a tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// The tax amount (subtotal x rate).
    pub tax_amount: Decimal,
    /// The tax-inclusive total price.
    pub total_price: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the tax amount and tax-inclusive total for a subtotal.
///
/// # Arguments
///
/// * `subtotal` - Labor cost + travel fee + add-ons total
/// * `tax_rate` - The sales tax rate from the pricing constants
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::calculate_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_tax(
///     Decimal::from_str("81.00").unwrap(),
///     Decimal::from_str("0.13").unwrap(),
///     1,
/// );
/// assert_eq!(result.tax_amount, Decimal::from_str("10.53").unwrap());
/// assert_eq!(result.total_price, Decimal::from_str("91.53").unwrap());
/// ```
pub fn calculate_tax(subtotal: Decimal, tax_rate: Decimal, step_number: u32) -> TaxResult {
    let tax_amount = subtotal * tax_rate;
    let total_price = subtotal + tax_amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: "sales_tax".to_string(),
        rule_name: "Sales Tax".to_string(),
        input: serde_json::json!({
            "subtotal": subtotal.normalize().to_string(),
            "tax_rate": tax_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax_amount": tax_amount.normalize().to_string(),
            "total_price": total_price.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${} tax; total ${}",
            subtotal.normalize(),
            tax_rate.normalize(),
            tax_amount.normalize(),
            total_price.normalize()
        ),
    };

    TaxResult {
        tax_amount,
        total_price,
        audit_step,
    }
}

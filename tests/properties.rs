//! Property-based tests for the calculation invariants.
//!
//! These exercise the calculation modules directly, across randomly
//! generated inputs, rather than going through the HTTP layer.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use quote_engine::calculation::{
    FactorImpacts, calculate_labor_cost, calculate_tax, calculate_travel_fee, estimate_duration,
};
use quote_engine::catalog::{ExperienceLevel, PriceRange, PricingConstants};

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn ottawa_constants() -> PricingConstants {
    PricingConstants {
        travel_fee_base: decimal("10"),
        travel_fee_per_km: decimal("1"),
        travel_fee_threshold_km: decimal("15"),
        tax_rate: decimal("0.13"),
        min_time_multiplier: decimal("0.5"),
        max_time_multiplier: decimal("2.0"),
    }
}

/// A Decimal with two fractional digits in [0, max_cents / 100].
fn money(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_cents).prop_map(|c| Decimal::new(c, 2))
}

/// A factor impact with one fractional digit in [-0.5, 1.0].
fn impact() -> impl Strategy<Value = Decimal> {
    (-5i64..=10).prop_map(|t| Decimal::new(t, 1))
}

proptest! {
    /// The quoted labor cost always lands inside the service's price range,
    /// and the clamped flag is set exactly when the raw cost fell outside it.
    #[test]
    fn labor_cost_stays_within_price_range(
        rate in money(10_000),
        hours in money(1_200),
        min_cents in 0i64..=20_000,
        span_cents in 0i64..=20_000,
    ) {
        let range = PriceRange {
            min: Decimal::new(min_cents, 2),
            max: Decimal::new(min_cents + span_cents, 2),
        };

        let result = calculate_labor_cost(rate, hours, &range, 1);

        prop_assert!(result.labor_cost >= range.min);
        prop_assert!(result.labor_cost <= range.max);
        prop_assert_eq!(result.raw_cost, rate * hours);
        prop_assert_eq!(
            result.clamped,
            result.raw_cost < range.min || result.raw_cost > range.max
        );
    }

    /// The travel fee never decreases when the distance grows.
    #[test]
    fn travel_fee_is_monotonic_in_distance(
        a_tenths in 0i64..=1_000,
        b_tenths in 0i64..=1_000,
    ) {
        let constants = ottawa_constants();
        let (near, far) = if a_tenths <= b_tenths {
            (a_tenths, b_tenths)
        } else {
            (b_tenths, a_tenths)
        };

        let near_fee = calculate_travel_fee(Decimal::new(near, 1), &constants, 1).fee;
        let far_fee = calculate_travel_fee(Decimal::new(far, 1), &constants, 1).fee;

        prop_assert!(near_fee <= far_fee);
    }

    /// Inside the threshold the fee is flat; beyond it, exactly base plus
    /// the per-kilometer rate on the excess.
    #[test]
    fn travel_fee_matches_tier_formula(distance_tenths in 0i64..=1_000) {
        let constants = ottawa_constants();
        let distance = Decimal::new(distance_tenths, 1);

        let result = calculate_travel_fee(distance, &constants, 1);

        if distance <= constants.travel_fee_threshold_km {
            prop_assert_eq!(result.fee, constants.travel_fee_base);
        } else {
            let excess = distance - constants.travel_fee_threshold_km;
            prop_assert_eq!(
                result.fee,
                constants.travel_fee_base + excess * constants.travel_fee_per_km
            );
        }
    }

    /// Tax and total are exact multiples of the subtotal, with no drift.
    #[test]
    fn tax_identity_holds(subtotal in money(100_000)) {
        let result = calculate_tax(subtotal, decimal("0.13"), 1);

        prop_assert_eq!(result.tax_amount, subtotal * decimal("0.13"));
        prop_assert_eq!(result.total_price, subtotal + result.tax_amount);
        prop_assert_eq!(result.total_price, subtotal * decimal("1.13"));
    }

    /// The duration estimate scales linearly with the base duration and is
    /// never negative for impact totals above -5 (where the impact
    /// multiplier itself stays positive).
    #[test]
    fn duration_estimate_scales_with_base(
        base_tenths in 1i64..=120,
        length in impact(),
        thickness in impact(),
        braid_size in impact(),
        density in impact(),
    ) {
        let level = ExperienceLevel {
            name: "Test".to_string(),
            hourly_rate_multiplier: Decimal::ONE,
            duration_multiplier: decimal("1.15"),
        };
        let impacts = FactorImpacts {
            length,
            thickness,
            braid_size,
            density,
        };

        let base = Decimal::new(base_tenths, 1);
        let single = estimate_duration(base, &impacts, "test", &level, 1);
        let doubled = estimate_duration(base * decimal("2"), &impacts, "test", &level, 1);

        prop_assert!(single.hours > Decimal::ZERO);
        prop_assert_eq!(doubled.hours, single.hours * decimal("2"));
    }
}

//! Calculation logic for the Price Quotation Engine.
//!
//! This module contains all the pricing rules for producing a quote:
//! request validation, the factor-based duration estimate, the experience
//! hourly-rate adjustment, labor cost with price-range clamping, the tiered
//! travel fee, add-on pricing, sales tax, and the quote builder that runs
//! them in order.

mod additional_services;
mod duration;
mod hourly_rate;
mod labor_cost;
mod quote;
mod tax;
mod travel_fee;
mod validation;

pub use additional_services::{AdditionalServicesResult, calculate_additional_services};
pub use duration::{DurationEstimate, FactorImpacts, IMPACT_WEIGHT, estimate_duration};
pub use hourly_rate::{AdjustedRate, adjusted_hourly_rate};
pub use labor_cost::{LaborCostResult, calculate_labor_cost};
pub use quote::build_quote;
pub use tax::{TaxResult, calculate_tax};
pub use travel_fee::{TravelFeeResult, calculate_travel_fee};
pub use validation::{ResolvedRequest, validate_request};

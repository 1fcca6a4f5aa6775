//! Core data models for the Price Quotation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod quote;
mod quote_request;
mod validation;

pub use quote::{
    AdditionalServiceLine, AuditStep, AuditTrace, AuditWarning, LaborLine, QuoteBreakdown,
    TravelLine,
};
pub use quote_request::{FactorSelection, QuoteRequest};
pub use validation::ValidationErrors;

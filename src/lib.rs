//! Price Quotation Engine for mobile hair-braiding services
//!
//! This crate provides functionality for producing itemized price quotes for
//! braiding appointments: estimating labor duration from hair characteristics,
//! adjusting hourly rates by stylist experience level, and assembling a
//! tax-inclusive price breakdown with travel fees and add-on services.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod error;
pub mod models;

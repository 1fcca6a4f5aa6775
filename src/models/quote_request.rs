//! Quote request model for the Price Quotation Engine.
//!
//! A [`QuoteRequest`] mirrors the state of the booking form: every selection
//! is optional until validation runs, so the validator can report all missing
//! fields at once instead of failing on the first one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw input for one quote calculation.
///
/// Constructed fresh per calculation and discarded afterwards; nothing is
/// persisted. Selection fields are `Option` because the form may be submitted
/// incomplete; the validation layer turns each `None` or unresolvable
/// identifier into a field error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// The selected service type identifier (e.g., "cornrows").
    #[serde(default)]
    pub service: Option<String>,
    /// Hair length value identifier (e.g., "moyen").
    #[serde(default)]
    pub length: Option<String>,
    /// Hair thickness value identifier (e.g., "moyen").
    #[serde(default)]
    pub thickness: Option<String>,
    /// Braid size value identifier (e.g., "moyenne").
    #[serde(default)]
    pub braid_size: Option<String>,
    /// Hair density value identifier (e.g., "normale").
    #[serde(default)]
    pub density: Option<String>,
    /// Stylist experience level identifier (e.g., "experimente").
    #[serde(default)]
    pub experience: Option<String>,
    /// One-way travel distance in kilometers.
    #[serde(default)]
    pub travel_distance_km: Option<Decimal>,
    /// Selected add-on service identifiers. Duplicates collapse; identifiers
    /// no longer in the catalog contribute zero to the quote.
    #[serde(default)]
    pub additional_services: Vec<String>,
    /// Manually-entered hours, replacing the factor-based estimate.
    ///
    /// When present, the value must fall within the selected service's
    /// declared hours range.
    #[serde(default)]
    pub hours: Option<Decimal>,
}

/// The hair factor selections a quote was computed with.
///
/// Echoed back in the breakdown so the receipt can restate what was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorSelection {
    /// Hair length value identifier.
    pub length: String,
    /// Hair thickness value identifier.
    pub thickness: String,
    /// Braid size value identifier.
    pub braid_size: String,
    /// Hair density value identifier.
    pub density: String,
}

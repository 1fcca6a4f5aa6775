//! Catalog types for the Price Quotation Engine.
//!
//! This module contains the strongly-typed catalog structures that are
//! deserialized from YAML catalog files. The catalog is pure reference data:
//! it is loaded once at startup and never mutated afterwards.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Metadata about the price catalog.
///
/// Identifies which price list is loaded: the business name, the region the
/// prices were calibrated for, the currency, and a version date.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMetadata {
    /// The human-readable name of the price list.
    pub name: String,
    /// The region the prices apply to (e.g., "Ottawa-Gatineau").
    pub region: String,
    /// The ISO currency code all amounts are denominated in.
    pub currency: String,
    /// The version or effective date of the price list.
    pub version: String,
}

/// The business-declared acceptable labor cost band for a service.
///
/// Raw hourly-rate arithmetic can drift outside the quoted band; the band
/// takes precedence, so the computed labor cost is always clamped into it.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRange {
    /// The minimum quoted labor cost.
    pub min: Decimal,
    /// The maximum quoted labor cost.
    pub max: Decimal,
}

/// The plausible manual-hours band for a service.
///
/// Only consulted when a caller enters hours directly instead of letting the
/// engine estimate them; a manual value outside this band is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct HoursRange {
    /// The minimum plausible hours for the service.
    pub min: Decimal,
    /// The maximum plausible hours for the service.
    pub max: Decimal,
}

/// A braiding service offered by the business.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDefinition {
    /// The human-readable name of the service.
    pub name: String,
    /// The acceptable labor cost band; computed labor cost is clamped into it.
    pub price_range: PriceRange,
    /// The baseline duration in hours before factor and experience adjustments.
    pub base_duration_hours: Decimal,
    /// The plausible band for manually-entered hours.
    pub hours_range: HoursRange,
    /// The hourly rate before the experience-level adjustment.
    pub base_hourly_rate: Decimal,
    /// Relative complexity of the style, for display ordering and hints.
    pub complexity_factor: Decimal,
    /// Factor value identifiers this style works best with. Informational
    /// only; never enforced during calculation.
    #[serde(default)]
    pub recommended_factors: Vec<String>,
}

/// Services catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// Map of service identifier to service definition.
    pub services: HashMap<String, ServiceDefinition>,
}

/// One selectable option within a hair factor family.
#[derive(Debug, Clone, Deserialize)]
pub struct FactorOption {
    /// The human-readable label for the option.
    pub name: String,
    /// Signed, dimensionless duration impact. Summed across the four
    /// families and scaled to form the duration multiplier.
    pub time_impact: Decimal,
    /// A description of the option shown as a tooltip.
    pub description: String,
}

/// The four hair factor families, each a map of value identifier to option.
#[derive(Debug, Clone, Deserialize)]
pub struct HairFactorTables {
    /// Hair length options.
    pub length: HashMap<String, FactorOption>,
    /// Hair thickness options.
    pub thickness: HashMap<String, FactorOption>,
    /// Braid size options.
    pub braid_size: HashMap<String, FactorOption>,
    /// Hair density options.
    pub density: HashMap<String, FactorOption>,
}

/// Identifies one of the four hair factor families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorFamily {
    /// Hair length.
    Length,
    /// Hair thickness.
    Thickness,
    /// Braid size.
    BraidSize,
    /// Hair density.
    Density,
}

impl FactorFamily {
    /// All four families, in form-field order.
    pub const ALL: [FactorFamily; 4] = [
        FactorFamily::Length,
        FactorFamily::Thickness,
        FactorFamily::BraidSize,
        FactorFamily::Density,
    ];

    /// The field name used for this family in requests and error maps.
    pub fn field_name(self) -> &'static str {
        match self {
            FactorFamily::Length => "length",
            FactorFamily::Thickness => "thickness",
            FactorFamily::BraidSize => "braidSize",
            FactorFamily::Density => "density",
        }
    }

    /// The human-readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            FactorFamily::Length => "hair length",
            FactorFamily::Thickness => "hair thickness",
            FactorFamily::BraidSize => "braid size",
            FactorFamily::Density => "hair density",
        }
    }
}

impl fmt::Display for FactorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl HairFactorTables {
    /// Returns the option table for one factor family.
    pub fn family(&self, family: FactorFamily) -> &HashMap<String, FactorOption> {
        match family {
            FactorFamily::Length => &self.length,
            FactorFamily::Thickness => &self.thickness,
            FactorFamily::BraidSize => &self.braid_size,
            FactorFamily::Density => &self.density,
        }
    }
}

/// A stylist experience level.
///
/// The two multipliers are inversely correlated by design: a more
/// experienced stylist charges more per hour but finishes sooner.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceLevel {
    /// The human-readable label for the level.
    pub name: String,
    /// Multiplier applied to the service's base hourly rate.
    pub hourly_rate_multiplier: Decimal,
    /// Multiplier applied to the estimated duration.
    pub duration_multiplier: Decimal,
}

/// Experience levels catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceLevelsConfig {
    /// Map of experience level identifier to level details.
    pub levels: HashMap<String, ExperienceLevel>,
}

/// A flat-priced add-on service.
#[derive(Debug, Clone, Deserialize)]
pub struct AdditionalService {
    /// The human-readable name of the add-on.
    pub name: String,
    /// The flat price of the add-on.
    pub price: Decimal,
    /// Extra appointment time the add-on takes, in hours.
    pub duration_hours: Decimal,
    /// A description of the add-on shown as a tooltip.
    pub description: String,
}

/// Additional services catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AdditionalServicesConfig {
    /// Map of add-on identifier to add-on details.
    pub services: HashMap<String, AdditionalService>,
}

/// Global pricing constants from pricing.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConstants {
    /// Flat travel fee charged on every appointment.
    pub travel_fee_base: Decimal,
    /// Per-kilometer surcharge beyond the threshold distance.
    pub travel_fee_per_km: Decimal,
    /// Distance in kilometers covered by the flat travel fee.
    pub travel_fee_threshold_km: Decimal,
    /// Sales tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// Declared lower bound for the duration impact multiplier. Present in
    /// the price list but not applied by any calculation; quotes match the
    /// in-salon calculator, which never clamped duration.
    pub min_time_multiplier: Decimal,
    /// Declared upper bound for the duration impact multiplier. Not applied;
    /// see `min_time_multiplier`.
    pub max_time_multiplier: Decimal,
}

/// The complete price catalog loaded from YAML files.
///
/// This struct aggregates all reference data loaded from the various YAML
/// files in a catalog directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Catalog metadata.
    metadata: CatalogMetadata,
    /// Braiding services offered.
    services: HashMap<String, ServiceDefinition>,
    /// The four hair factor families.
    hair_factors: HairFactorTables,
    /// Stylist experience levels.
    experience_levels: HashMap<String, ExperienceLevel>,
    /// Flat-priced add-on services.
    additional_services: HashMap<String, AdditionalService>,
    /// Global pricing constants.
    constants: PricingConstants,
}

impl Catalog {
    /// Creates a new Catalog from its component parts.
    pub fn new(
        metadata: CatalogMetadata,
        services: HashMap<String, ServiceDefinition>,
        hair_factors: HairFactorTables,
        experience_levels: HashMap<String, ExperienceLevel>,
        additional_services: HashMap<String, AdditionalService>,
        constants: PricingConstants,
    ) -> Self {
        Self {
            metadata,
            services,
            hair_factors,
            experience_levels,
            additional_services,
            constants,
        }
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns all services.
    pub fn services(&self) -> &HashMap<String, ServiceDefinition> {
        &self.services
    }

    /// Returns the hair factor tables.
    pub fn hair_factors(&self) -> &HairFactorTables {
        &self.hair_factors
    }

    /// Returns all experience levels.
    pub fn experience_levels(&self) -> &HashMap<String, ExperienceLevel> {
        &self.experience_levels
    }

    /// Returns all additional services.
    pub fn additional_services(&self) -> &HashMap<String, AdditionalService> {
        &self.additional_services
    }

    /// Returns the global pricing constants.
    pub fn constants(&self) -> &PricingConstants {
        &self.constants
    }
}

//! Quote request validation.
//!
//! Validation runs before any monetary computation and collects every
//! violation rather than stopping at the first, so the booking form can
//! annotate all offending fields at once. On success it hands back resolved
//! catalog references, which makes the downstream calculation infallible.

use rust_decimal::Decimal;

use crate::catalog::{CatalogLoader, ExperienceLevel, FactorFamily, ServiceDefinition};
use crate::models::{FactorSelection, QuoteRequest, ValidationErrors};

use super::duration::FactorImpacts;

/// A quote request with every identifier resolved against the catalog.
///
/// Produced by [`validate_request`]; holding catalog references here means
/// the quote builder never has to re-resolve (and therefore cannot fail).
#[derive(Debug, Clone)]
pub struct ResolvedRequest<'a> {
    /// The selected service identifier.
    pub service_id: String,
    /// The resolved service definition.
    pub service: &'a ServiceDefinition,
    /// The selected experience level identifier.
    pub experience_id: String,
    /// The resolved experience level.
    pub experience: &'a ExperienceLevel,
    /// The four factor value identifiers, as selected.
    pub factors: FactorSelection,
    /// The resolved time-impact coefficients for the four factors.
    pub impacts: FactorImpacts,
    /// The validated, non-negative travel distance in kilometers.
    pub travel_distance_km: Decimal,
    /// Manually-entered hours, already checked against the service's
    /// hours range.
    pub hours_override: Option<Decimal>,
    /// The selected add-on identifiers with duplicates collapsed,
    /// first-seen order preserved.
    pub additional_services: Vec<String>,
}

/// Validates a quote request against the catalog.
///
/// Checks, collecting all violations:
/// - the service identifier is present and resolvable (`service`);
/// - the experience level identifier is present and resolvable
///   (`experience`);
/// - each of the four hair factor selections is present and resolvable
///   (`length`, `thickness`, `braidSize`, `density`);
/// - the travel distance is present and non-negative (`travelDistance`);
/// - manually-entered hours, when supplied, fall within the service's
///   declared hours range (`hours`), with the bounds interpolated into the
///   message.
///
/// # Returns
///
/// A [`ResolvedRequest`] when everything checks out, or the complete
/// [`ValidationErrors`] map otherwise. No monetary computation happens here.
pub fn validate_request<'a>(
    request: &QuoteRequest,
    catalog: &'a CatalogLoader,
) -> Result<ResolvedRequest<'a>, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let service = match &request.service {
        None => {
            errors.insert("service", "Please select a service type.");
            None
        }
        Some(id) => match catalog.get_service(id) {
            Ok(service) => Some((id.clone(), service)),
            Err(_) => {
                errors.insert("service", format!("Unknown service type '{}'.", id));
                None
            }
        },
    };

    let experience = match &request.experience {
        None => {
            errors.insert("experience", "Please select an experience level.");
            None
        }
        Some(id) => match catalog.get_experience_level(id) {
            Ok(level) => Some((id.clone(), level)),
            Err(_) => {
                errors.insert("experience", format!("Unknown experience level '{}'.", id));
                None
            }
        },
    };

    let mut resolve_factor = |family: FactorFamily, value: &Option<String>| match value {
        None => {
            errors.insert(
                family.field_name(),
                format!("Please select a {}.", family.label()),
            );
            None
        }
        Some(id) => match catalog.get_factor(family, id) {
            Ok(option) => Some((id.clone(), option.time_impact)),
            Err(_) => {
                errors.insert(
                    family.field_name(),
                    format!("Unknown {} '{}'.", family.label(), id),
                );
                None
            }
        },
    };

    let length = resolve_factor(FactorFamily::Length, &request.length);
    let thickness = resolve_factor(FactorFamily::Thickness, &request.thickness);
    let braid_size = resolve_factor(FactorFamily::BraidSize, &request.braid_size);
    let density = resolve_factor(FactorFamily::Density, &request.density);

    let distance = match request.travel_distance_km {
        None => {
            errors.insert("travelDistance", "Please enter the travel distance.");
            None
        }
        Some(d) if d < Decimal::ZERO => {
            errors.insert("travelDistance", "Travel distance cannot be negative.");
            None
        }
        Some(d) => Some(d),
    };

    // Manual hours are only checkable once the service resolved; a missing
    // service already carries its own error.
    if let (Some(hours), Some((_, service))) = (request.hours, &service) {
        let range = &service.hours_range;
        if hours < range.min || hours > range.max {
            errors.insert(
                "hours",
                format!(
                    "Hours must be between {} and {} for this service.",
                    range.min.normalize(),
                    range.max.normalize()
                ),
            );
        }
    }

    match (service, experience, length, thickness, braid_size, density, distance) {
        (
            Some((service_id, service)),
            Some((experience_id, experience)),
            Some((length_id, length_impact)),
            Some((thickness_id, thickness_impact)),
            Some((braid_size_id, braid_size_impact)),
            Some((density_id, density_impact)),
            Some(travel_distance_km),
        ) if errors.is_empty() => Ok(ResolvedRequest {
            service_id,
            service,
            experience_id,
            experience,
            factors: FactorSelection {
                length: length_id,
                thickness: thickness_id,
                braid_size: braid_size_id,
                density: density_id,
            },
            impacts: FactorImpacts {
                length: length_impact,
                thickness: thickness_impact,
                braid_size: braid_size_impact,
                density: density_impact,
            },
            travel_distance_km,
            hours_override: request.hours,
            additional_services: dedup_preserving_order(&request.additional_services),
        }),
        _ => Err(errors),
    }
}

/// Collapses duplicate identifiers, keeping first-seen order.
fn dedup_preserving_order(ids: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.iter().any(|seen| seen == id) {
            out.push(id.clone());
        }
    }
    out
}

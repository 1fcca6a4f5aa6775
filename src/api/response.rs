//! Response types for the Price Quotation Engine API.
//!
//! This module defines the error response structures, the validation
//! rejection body, and the catalog listing returned to selection menus.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogLoader, FactorFamily};
use crate::error::EngineError;
use crate::models::ValidationErrors;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Body returned when a quote request fails validation.
///
/// The `fields` map annotates each offending form field with its message,
/// so the form can mark every problem at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    /// Always "VALIDATION_ERROR".
    pub code: String,
    /// Summary message.
    pub message: String,
    /// Field-to-message map of all violations.
    pub fields: ValidationErrors,
}

impl ValidationErrorBody {
    /// Wraps a validation error set for the wire.
    pub fn new(fields: ValidationErrors) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: format!("{} field(s) failed validation", fields.len()),
            fields,
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::CatalogNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog error",
                    format!("Catalog file not found: {}", path),
                ),
            },
            EngineError::CatalogParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ServiceNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SERVICE_NOT_FOUND",
                    format!("Service not found: {}", id),
                    format!("The service identifier '{}' is not in the catalog", id),
                ),
            },
            EngineError::ExperienceNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EXPERIENCE_NOT_FOUND",
                    format!("Experience level not found: {}", id),
                    format!("The experience identifier '{}' is not in the catalog", id),
                ),
            },
            EngineError::FactorNotFound { family, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "FACTOR_NOT_FOUND",
                    format!("Hair factor '{}' not found in family '{}'", value, family),
                    "The factor identifier is not in the catalog",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

/// One service entry in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// The service identifier.
    pub id: String,
    /// The service's display name.
    pub name: String,
    /// The minimum quoted labor cost.
    pub price_min: Decimal,
    /// The maximum quoted labor cost.
    pub price_max: Decimal,
    /// The baseline duration in hours.
    pub base_duration_hours: Decimal,
    /// The hourly rate before experience adjustment.
    pub base_hourly_rate: Decimal,
}

/// One factor option entry in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorEntry {
    /// The value identifier within its family.
    pub id: String,
    /// The option's display label.
    pub name: String,
    /// The option's signed time-impact coefficient.
    pub time_impact: Decimal,
}

/// One experience level entry in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// The experience level identifier.
    pub id: String,
    /// The level's display label.
    pub name: String,
    /// Multiplier applied to the base hourly rate.
    pub hourly_rate_multiplier: Decimal,
    /// Multiplier applied to the estimated duration.
    pub duration_multiplier: Decimal,
}

/// One add-on entry in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalServiceEntry {
    /// The add-on identifier.
    pub id: String,
    /// The add-on's display name.
    pub name: String,
    /// The add-on's flat price.
    pub price: Decimal,
}

/// The catalog listing returned by `GET /catalog`.
///
/// Everything a booking form needs to populate its selection menus, sorted
/// by identifier for stable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// The price list name.
    pub name: String,
    /// The region the prices apply to.
    pub region: String,
    /// The ISO currency code.
    pub currency: String,
    /// The offered services.
    pub services: Vec<ServiceEntry>,
    /// Hair length options.
    pub length: Vec<FactorEntry>,
    /// Hair thickness options.
    pub thickness: Vec<FactorEntry>,
    /// Braid size options.
    pub braid_size: Vec<FactorEntry>,
    /// Hair density options.
    pub density: Vec<FactorEntry>,
    /// Stylist experience levels.
    pub experience_levels: Vec<ExperienceEntry>,
    /// Flat-priced add-ons.
    pub additional_services: Vec<AdditionalServiceEntry>,
}

impl CatalogResponse {
    /// Renders the loaded catalog as a listing.
    pub fn from_catalog(loader: &CatalogLoader) -> Self {
        let catalog = loader.catalog();

        let mut services: Vec<ServiceEntry> = catalog
            .services()
            .iter()
            .map(|(id, service)| ServiceEntry {
                id: id.clone(),
                name: service.name.clone(),
                price_min: service.price_range.min,
                price_max: service.price_range.max,
                base_duration_hours: service.base_duration_hours,
                base_hourly_rate: service.base_hourly_rate,
            })
            .collect();
        services.sort_by(|a, b| a.id.cmp(&b.id));

        let factor_entries = |family: FactorFamily| {
            let mut entries: Vec<FactorEntry> = catalog
                .hair_factors()
                .family(family)
                .iter()
                .map(|(id, option)| FactorEntry {
                    id: id.clone(),
                    name: option.name.clone(),
                    time_impact: option.time_impact,
                })
                .collect();
            entries.sort_by(|a, b| a.id.cmp(&b.id));
            entries
        };

        let mut experience_levels: Vec<ExperienceEntry> = catalog
            .experience_levels()
            .iter()
            .map(|(id, level)| ExperienceEntry {
                id: id.clone(),
                name: level.name.clone(),
                hourly_rate_multiplier: level.hourly_rate_multiplier,
                duration_multiplier: level.duration_multiplier,
            })
            .collect();
        experience_levels.sort_by(|a, b| a.id.cmp(&b.id));

        let mut additional_services: Vec<AdditionalServiceEntry> = catalog
            .additional_services()
            .iter()
            .map(|(id, service)| AdditionalServiceEntry {
                id: id.clone(),
                name: service.name.clone(),
                price: service.price,
            })
            .collect();
        additional_services.sort_by(|a, b| a.id.cmp(&b.id));

        Self {
            name: catalog.metadata().name.clone(),
            region: catalog.metadata().region.clone(),
            currency: catalog.metadata().currency.clone(),
            services,
            length: factor_entries(FactorFamily::Length),
            thickness: factor_entries(FactorFamily::Thickness),
            braid_size: factor_entries(FactorFamily::BraidSize),
            density: factor_entries(FactorFamily::Density),
            experience_levels,
            additional_services,
        }
    }
}

//! HTTP request handlers for the Price Quotation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_quote;
use crate::models::QuoteRequest;

use super::response::{ApiError, CatalogResponse, ValidationErrorBody};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/catalog", get(catalog_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /quote.
///
/// Accepts a quote request and returns the itemized breakdown, or the full
/// field-to-message validation error map with a 422 status.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match build_quote(&request, state.catalog()) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                quote_id = %breakdown.quote_id,
                service = %breakdown.service_id,
                total_price = %breakdown.total_price,
                duration_us = breakdown.audit_trace.duration_us,
                "Quote produced"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdown),
            )
                .into_response()
        }
        Err(errors) => {
            warn!(
                correlation_id = %correlation_id,
                field_count = errors.len(),
                "Quote request failed validation"
            );
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ValidationErrorBody::new(errors)),
            )
                .into_response()
        }
    }
}

/// Handler for GET /catalog.
///
/// Returns the loaded catalog rendered for selection menus.
async fn catalog_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(CatalogResponse::from_catalog(state.catalog()))
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "catalog": state.catalog().metadata().name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

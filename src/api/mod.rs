//! HTTP API module for the Price Quotation Engine.
//!
//! This module provides the REST API endpoints consumed by the booking
//! front end: quote calculation, the catalog listing, and a health check.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, CatalogResponse, ValidationErrorBody};
pub use state::AppState;

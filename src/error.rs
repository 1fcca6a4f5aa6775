//! Error types for the Price Quotation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the catalog or
//! resolving catalog entries.
//!
//! Field-level input validation failures are deliberately *not* part of this
//! taxonomy: they are collected into a [`crate::models::ValidationErrors`]
//! value so the caller can display every field error at once.

use thiserror::Error;

/// The main error type for the Price Quotation Engine.
///
/// All catalog operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use quote_engine::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Service type identifier was not found in the catalog.
    #[error("Service not found: {id}")]
    ServiceNotFound {
        /// The service identifier that was not found.
        id: String,
    },

    /// Experience level identifier was not found in the catalog.
    #[error("Experience level not found: {id}")]
    ExperienceNotFound {
        /// The experience level identifier that was not found.
        id: String,
    },

    /// A hair factor value was not found within its factor family.
    #[error("Hair factor '{value}' not found in family '{family}'")]
    FactorNotFound {
        /// The factor family (length, thickness, braid size, density).
        family: String,
        /// The factor value identifier that was not found.
        value: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

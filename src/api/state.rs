//! Application state for the Price Quotation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::CatalogLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded price catalog, which is read-only for the process lifetime and
/// therefore safe to share without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The loaded price catalog.
    catalog: Arc<CatalogLoader>,
}

impl AppState {
    /// Creates a new application state with the given catalog loader.
    pub fn new(catalog: CatalogLoader) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the catalog loader.
    pub fn catalog(&self) -> &CatalogLoader {
        &self.catalog
    }
}

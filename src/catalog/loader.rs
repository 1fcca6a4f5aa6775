//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the price
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AdditionalService, AdditionalServicesConfig, Catalog, CatalogMetadata, ExperienceLevel,
    ExperienceLevelsConfig, FactorFamily, FactorOption, HairFactorTables, PricingConstants,
    ServiceDefinition, ServicesConfig,
};

/// Loads and provides access to the price catalog.
///
/// The `CatalogLoader` reads YAML catalog files from a directory and provides
/// methods to resolve services, hair factors, experience levels, and add-ons.
///
/// # Directory Structure
///
/// The catalog directory should have the following structure:
/// ```text
/// config/ottawa/
/// ├── catalog.yaml             # Catalog metadata
/// ├── services.yaml            # Braiding services and price ranges
/// ├── hair_factors.yaml        # Length/thickness/braid size/density options
/// ├── experience_levels.yaml   # Stylist experience levels
/// ├── additional_services.yaml # Flat-priced add-ons
/// └── pricing.yaml             # Travel fee and tax constants
/// ```
///
/// # Example
///
/// ```no_run
/// use quote_engine::catalog::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/ottawa").unwrap();
///
/// let service = loader.get_service("cornrows").unwrap();
/// println!("Service: {} (${}/h)", service.name, service.base_hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: Catalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog directory (e.g., "./config/ottawa")
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the catalog data
    ///
    /// # Example
    ///
    /// ```no_run
    /// use quote_engine::catalog::CatalogLoader;
    ///
    /// let loader = CatalogLoader::load("./config/ottawa")?;
    /// # Ok::<(), quote_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CatalogMetadata>(&path.join("catalog.yaml"))?;
        let services = Self::load_yaml::<ServicesConfig>(&path.join("services.yaml"))?;
        let hair_factors = Self::load_yaml::<HairFactorTables>(&path.join("hair_factors.yaml"))?;
        let levels = Self::load_yaml::<ExperienceLevelsConfig>(&path.join("experience_levels.yaml"))?;
        let additional =
            Self::load_yaml::<AdditionalServicesConfig>(&path.join("additional_services.yaml"))?;
        let constants = Self::load_yaml::<PricingConstants>(&path.join("pricing.yaml"))?;

        let catalog = Catalog::new(
            metadata,
            services.services,
            hair_factors,
            levels.levels,
            additional.services,
            constants,
        );

        Ok(Self { catalog })
    }

    /// Creates a loader from an already-assembled catalog.
    ///
    /// Primarily useful in tests, where catalogs are built in code.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        self.catalog.metadata()
    }

    /// Gets a service by its identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The service identifier (e.g., "cornrows")
    ///
    /// # Returns
    ///
    /// Returns the service definition if found, or `ServiceNotFound` error.
    pub fn get_service(&self, id: &str) -> EngineResult<&ServiceDefinition> {
        self.catalog
            .services()
            .get(id)
            .ok_or_else(|| EngineError::ServiceNotFound { id: id.to_string() })
    }

    /// Gets an experience level by its identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The experience level identifier (e.g., "experimente")
    ///
    /// # Returns
    ///
    /// Returns the experience level if found, or `ExperienceNotFound` error.
    pub fn get_experience_level(&self, id: &str) -> EngineResult<&ExperienceLevel> {
        self.catalog
            .experience_levels()
            .get(id)
            .ok_or_else(|| EngineError::ExperienceNotFound { id: id.to_string() })
    }

    /// Gets one hair factor option by family and value identifier.
    ///
    /// # Arguments
    ///
    /// * `family` - The factor family (length, thickness, braid size, density)
    /// * `value` - The value identifier within that family (e.g., "moyen")
    ///
    /// # Returns
    ///
    /// Returns the factor option if found, or `FactorNotFound` error.
    pub fn get_factor(&self, family: FactorFamily, value: &str) -> EngineResult<&FactorOption> {
        self.catalog
            .hair_factors()
            .family(family)
            .get(value)
            .ok_or_else(|| EngineError::FactorNotFound {
                family: family.field_name().to_string(),
                value: value.to_string(),
            })
    }

    /// Gets an additional service by its identifier.
    ///
    /// Returns `None` for unknown identifiers rather than an error: a
    /// selected add-on that no longer exists in the catalog is treated as
    /// "no longer offered" and priced at zero by the quote builder.
    pub fn get_additional_service(&self, id: &str) -> Option<&AdditionalService> {
        self.catalog.additional_services().get(id)
    }

    /// Returns the global pricing constants.
    pub fn constants(&self) -> &PricingConstants {
        self.catalog.constants()
    }
}

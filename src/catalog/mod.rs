//! Catalog loading and access for the Price Quotation Engine.
//!
//! This module provides functionality to load the static price catalog from
//! YAML files: service definitions, hair factor tables, experience levels,
//! add-on services, and global pricing constants.
//!
//! # Example
//!
//! ```no_run
//! use quote_engine::catalog::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./config/ottawa").unwrap();
//! println!("Loaded price list: {}", catalog.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{
    AdditionalService, AdditionalServicesConfig, Catalog, CatalogMetadata, ExperienceLevel,
    ExperienceLevelsConfig, FactorFamily, FactorOption, HairFactorTables, HoursRange,
    PriceRange, PricingConstants, ServiceDefinition, ServicesConfig,
};

//! Validation error collection for the Price Quotation Engine.
//!
//! Validation failures are reported as a field-to-message map so a booking
//! form can annotate every offending field in one pass. This is distinct from
//! [`crate::error::EngineError`], which covers catalog loading and lookup
//! failures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A collection of field-level validation errors.
///
/// Keys are request field names (`service`, `experience`, `length`,
/// `thickness`, `braidSize`, `density`, `travelDistance`, `hours`); values
/// are human-readable messages. All violations for a request are collected
/// before any monetary computation runs, never one at a time.
///
/// # Example
///
/// ```
/// use quote_engine::models::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.insert("service", "Please select a service type.");
/// assert!(!errors.is_empty());
/// assert_eq!(errors.get("service"), Some("Please select a service type."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty error collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error message for a field. A later message for the same
    /// field replaces the earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Returns the message recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns true when no errors were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the recorded (field, message) pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the underlying field-to-message map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collection_is_empty() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut errors = ValidationErrors::new();
        errors.insert("travelDistance", "Travel distance cannot be negative.");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("travelDistance"),
            Some("Travel distance cannot be negative.")
        );
        assert_eq!(errors.get("service"), None);
    }

    #[test]
    fn test_later_insert_replaces_earlier() {
        let mut errors = ValidationErrors::new();
        errors.insert("hours", "first");
        errors.insert("hours", "second");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("hours"), Some("second"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = ValidationErrors::new();
        errors.insert("service", "Please select a service type.");
        errors.insert("experience", "Please select an experience level.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "experience": "Please select an experience level.",
                "service": "Please select a service type."
            })
        );
    }

    #[test]
    fn test_iter_yields_fields_in_order() {
        let mut errors = ValidationErrors::new();
        errors.insert("thickness", "b");
        errors.insert("braidSize", "a");

        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["braidSize", "thickness"]);
    }
}

//! GA4 property identifier newtype.
//!
//! Type-safe wrapper for the numeric property id that report requests
//! target (the `properties/<id>` path segment of the Data API).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a property identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyIdError {
    /// The identifier was empty.
    #[error("property id is empty")]
    Empty,

    /// The identifier contained a non-digit character.
    #[error("property id must be numeric, got '{0}'")]
    NotNumeric(String),
}

/// A GA4 property identifier.
///
/// Property ids are numeric strings (e.g. `"316499999"`). They are kept as
/// strings because they are only ever interpolated into request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    /// Create a property id without validation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse and validate a property id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or contains non-digit characters.
    pub fn parse(id: impl Into<String>) -> Result<Self, PropertyIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PropertyIdError::Empty);
        }
        if !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(PropertyIdError::NotNumeric(id));
        }
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PropertyId> for String {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        let id = PropertyId::parse("316499999").unwrap();
        assert_eq!(id.as_str(), "316499999");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PropertyId::parse(""), Err(PropertyIdError::Empty));
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = PropertyId::parse("properties/316499999").unwrap_err();
        assert!(matches!(err, PropertyIdError::NotNumeric(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyId::new("42").to_string(), "42");
    }
}

//! Error types for the terranote annotation core.
//!
//! Failures are confined to two boundaries: loading configuration and
//! ingesting geometry from the external draw tool. Everything past those
//! boundaries operates on validated values and stays total. All errors are
//! serializable so they can cross a process boundary intact.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using TerranoteError as the error type.
pub type Result<T> = std::result::Result<T, TerranoteError>;

/// Top-level error type for all terranote operations.
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum TerranoteError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Geometry validation errors
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Internal errors that shouldn't normally occur
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors related to configuration.
///
/// These occur when loading, parsing, or validating configuration, and at
/// startup when the map credential is absent.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {reason}")]
    InvalidFormat { reason: String },

    /// Missing required configuration field
    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// No map credential configured; the engine cannot start without one
    #[error("No map access token configured")]
    MissingCredential,
}

impl ConfigError {
    /// Creates a file not found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Creates a load failed error.
    pub fn load_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while validating geometry handed over by the draw tool.
///
/// The tool's create-event payload is untyped JSON; these errors are the
/// reasons a payload can be refused at the ingestion boundary. A refused
/// payload never becomes a draft region.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeometryError {
    /// Fewer than three vertices after ring-closure dedup
    #[error("Polygon ring has {count} vertices, need at least 3")]
    TooFewVertices { count: usize },

    /// A vertex contains NaN or an infinity
    #[error("Vertex {index} is not a finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// Feature geometry is not a polygon
    #[error("Expected {expected} geometry, got {actual}")]
    WrongGeometryType { expected: String, actual: String },

    /// Polygon carries interior rings (holes), which are not supported
    #[error("Polygon has {count} rings; holes are not supported")]
    UnsupportedRings { count: usize },

    /// Feature carries no geometry at all
    #[error("Feature carries no geometry")]
    MissingGeometry,

    /// Coordinates are not an array of numeric pairs
    #[error("Malformed coordinates: {reason}")]
    MalformedCoordinates { reason: String },
}

impl GeometryError {
    /// Creates a wrong geometry type error.
    pub fn wrong_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::WrongGeometryType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a malformed coordinates error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCoordinates {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helpers() {
        let err = ConfigError::file_not_found("/etc/terranote/config.yaml");
        assert!(matches!(err, ConfigError::FileNotFound { .. }));

        let err = ConfigError::invalid_value("search.fly_zoom", "must be non-negative");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_geometry_error_helpers() {
        let err = GeometryError::wrong_type("Polygon", "LineString");
        assert!(matches!(err, GeometryError::WrongGeometryType { .. }));

        let err = GeometryError::malformed("expected a coordinate pair");
        assert!(matches!(err, GeometryError::MalformedCoordinates { .. }));
    }

    #[test]
    fn test_error_serialization() {
        let err = TerranoteError::Config(ConfigError::MissingCredential);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Config"));
        assert!(json.contains("MissingCredential"));
    }

    #[test]
    fn test_error_display() {
        let err = TerranoteError::Geometry(GeometryError::TooFewVertices { count: 2 });
        let display = format!("{}", err);
        assert!(display.contains("2 vertices"));
    }
}

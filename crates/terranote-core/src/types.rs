//! Core types for the terranote annotation system.
//!
//! This module defines the geographic primitives and the annotation data
//! model: coordinate pairs, the tracked camera viewport, validated polygon
//! regions, and the committed annotations that pair a region with user text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::GeometryError;

/// A longitude/latitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    /// Longitude in decimal degrees (-180 to 180)
    pub lng: f64,
    /// Latitude in decimal degrees (-90 to 90)
    pub lat: f64,
}

impl LngLat {
    /// Creates a new coordinate pair.
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Returns true when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// Returns true when the pair lies inside the valid geographic range.
    pub fn in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.lng) && (-90.0..=90.0).contains(&self.lat)
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lng, self.lat)
    }
}

impl From<(f64, f64)> for LngLat {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

/// Camera state of the map view: center plus zoom.
///
/// Mutated only by engine camera events or explicit fly/fit commands. The
/// engine is the sole producer and is trusted, so values are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Camera center
    pub center: LngLat,
    /// Zoom level (non-negative by engine contract)
    pub zoom: f64,
}

impl Viewport {
    /// Creates a new viewport.
    pub const fn new(center: LngLat, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Longitude: {:.4} | Latitude: {:.4} | Zoom: {:.2}",
            self.center.lng, self.center.lat, self.zoom
        )
    }
}

/// Unique identifier for an annotation.
///
/// Normally the id the draw tool stamped on the feature; features that
/// arrive without one get a generated UUID instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationId(String);

impl AnnotationId {
    /// Creates an identifier from the draw tool's feature id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a random identifier for an id-less feature.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AnnotationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for AnnotationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A closed polygon ring of geographic coordinates.
///
/// The first vertex implicitly connects to the last. A region can only be
/// built through [`Region::from_vertices`], which enforces the invariants
/// (at least three vertices, all finite), and is immutable afterwards.
///
/// # Examples
///
/// ```
/// use terranote_core::types::{LngLat, Region};
///
/// let region = Region::from_vertices(vec![
///     LngLat::new(-106.5, 39.5),
///     LngLat::new(-106.4, 39.5),
///     LngLat::new(-106.4, 39.4),
/// ])
/// .unwrap();
/// assert_eq!(region.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LngLat>", into = "Vec<LngLat>")]
pub struct Region {
    vertices: Vec<LngLat>,
}

impl Region {
    /// Builds a region from an ordered vertex list.
    ///
    /// A trailing vertex equal to the first (GeoJSON-style ring closure) is
    /// dropped before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices remain or any
    /// coordinate is non-finite.
    pub fn from_vertices(mut vertices: Vec<LngLat>) -> Result<Self, GeometryError> {
        if vertices.len() >= 4 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { index });
        }

        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }

        Ok(Self { vertices })
    }

    /// Returns the ordered vertex list (without the closing duplicate).
    pub fn vertices(&self) -> &[LngLat] {
        &self.vertices
    }

    /// Returns the number of vertices in the ring.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Computes the minimal axis-aligned bounding box enclosing every vertex.
    pub fn bounding_box(&self) -> BoundingBox {
        let first = self.vertices[0];
        self.vertices.iter().skip(1).fold(
            BoundingBox {
                min: first,
                max: first,
            },
            |bounds, v| bounds.expanded_to(*v),
        )
    }
}

impl TryFrom<Vec<LngLat>> for Region {
    type Error = GeometryError;

    fn try_from(vertices: Vec<LngLat>) -> Result<Self, Self::Error> {
        Self::from_vertices(vertices)
    }
}

impl From<Region> for Vec<LngLat> {
    fn from(region: Region) -> Self {
        region.vertices
    }
}

/// Minimal axis-aligned bounding box of a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// South-west corner
    pub min: LngLat,
    /// North-east corner
    pub max: LngLat,
}

impl BoundingBox {
    /// Folds a vertex list into its bounding box.
    ///
    /// Returns `None` for an empty list.
    pub fn of_vertices(vertices: &[LngLat]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        Some(rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |bounds, v| bounds.expanded_to(*v),
        ))
    }

    /// Returns this box grown just enough to contain the given vertex.
    pub fn expanded_to(self, v: LngLat) -> Self {
        Self {
            min: LngLat::new(self.min.lng.min(v.lng), self.min.lat.min(v.lat)),
            max: LngLat::new(self.max.lng.max(v.lng), self.max.lat.max(v.lat)),
        }
    }

    /// Longitudinal span in degrees.
    pub fn width(&self) -> f64 {
        self.max.lng - self.min.lng
    }

    /// Latitudinal span in degrees.
    pub fn height(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    /// Returns true when the box has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Returns a box whose spans are each at least `span` degrees, grown
    /// symmetrically around the original center.
    ///
    /// A camera fit on a zero-area box is undefined; this is the fallback
    /// extent that keeps the fit command well-formed.
    pub fn padded_to_min_span(self, span: f64) -> Self {
        let mut min = self.min;
        let mut max = self.max;

        if self.width() < span {
            let center = (self.min.lng + self.max.lng) / 2.0;
            min.lng = center - span / 2.0;
            max.lng = center + span / 2.0;
        }

        if self.height() < span {
            let center = (self.min.lat + self.max.lat) / 2.0;
            min.lat = center - span / 2.0;
            max.lat = center + span / 2.0;
        }

        Self { min, max }
    }
}

/// A drawn region awaiting its note.
///
/// Created when the draw tool completes a shape; consumed on commit or
/// discarded on cancel. At most one draft exists at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRegion {
    /// Identifier assigned by the draw tool (or generated)
    pub id: AnnotationId,
    /// The drawn polygon ring
    pub region: Region,
}

/// A committed pairing of a region with user text.
///
/// Created only by committing a draft with non-empty text; immutable once
/// created. Insertion order into the store is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Identifier carried over from the draft
    pub id: AnnotationId,
    /// Note text, non-empty after trimming
    pub text: String,
    /// The annotated polygon ring
    pub region: Region,
    /// When the annotation was committed
    pub created_at: DateTime<Utc>,
}

impl Annotation {
    /// Creates an annotation stamped with the current time.
    pub fn new(id: AnnotationId, text: impl Into<String>, region: Region) -> Self {
        Self {
            id,
            text: text.into(),
            region,
            created_at: Utc::now(),
        }
    }
}

/// A single resolved geocoder result.
///
/// Transient: consumed to issue a fly-to command, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Human-readable place name, when the geocoder supplied one
    pub place_name: Option<String>,
    /// Resolved coordinate
    pub center: LngLat,
}

impl SearchHit {
    /// Creates a hit from a bare coordinate.
    pub fn new(center: LngLat) -> Self {
        Self {
            place_name: None,
            center,
        }
    }

    /// Creates a named hit.
    pub fn named(place_name: impl Into<String>, center: LngLat) -> Self {
        Self {
            place_name: Some(place_name.into()),
            center,
        }
    }
}

//! Adapter for the external polygon-drawing tool.
//!
//! The tool is configured to offer exactly one drawing mode (polygon) plus
//! its own delete action, and emits one create event per completed shape.
//! Its payload is untyped JSON, so this module is the validation boundary:
//! a payload either becomes a well-formed [`DraftRegion`] or is refused with
//! a [`GeometryError`] before it can reach the input flow.

use serde::{Deserialize, Serialize};
use terranote_core::error::GeometryError;
use terranote_core::types::{AnnotationId, DraftRegion, LngLat, Region};

/// Control surface configuration handed to the drawing tool.
///
/// Defaults to the polygon mode and the trash action, everything else off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawControls {
    /// Point drawing mode
    #[serde(default)]
    pub point: bool,
    /// Line drawing mode
    #[serde(default)]
    pub line_string: bool,
    /// Polygon drawing mode
    #[serde(default = "default_true")]
    pub polygon: bool,
    /// Delete/trash action
    #[serde(default = "default_true")]
    pub trash: bool,
    /// Combine-features action
    #[serde(default)]
    pub combine_features: bool,
    /// Uncombine-features action
    #[serde(default)]
    pub uncombine_features: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DrawControls {
    fn default() -> Self {
        Self {
            point: false,
            line_string: false,
            polygon: true,
            trash: true,
            combine_features: false,
            uncombine_features: false,
        }
    }
}

impl DrawControls {
    /// The polygon-plus-trash configuration used by the annotation flow.
    pub fn polygon_only() -> Self {
        Self::default()
    }
}

/// A completed shape as emitted by the drawing tool.
///
/// The geometry is kept as raw JSON until [`ShapeFeature::into_draft`]
/// validates it.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeFeature {
    /// Feature id stamped by the tool, when present
    #[serde(default)]
    pub id: Option<String>,
    /// Raw geometry object
    pub geometry: Option<ShapeGeometry>,
}

/// The geometry member of a draw-tool feature.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeGeometry {
    /// Geometry type tag ("Polygon" is the only accepted value)
    #[serde(rename = "type")]
    pub kind: String,
    /// Nested coordinate arrays, untyped until validated
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl ShapeFeature {
    /// Deserializes a raw create-event payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not feature-shaped at all.
    pub fn from_value(value: serde_json::Value) -> Result<Self, GeometryError> {
        serde_json::from_value(value).map_err(|e| GeometryError::malformed(e.to_string()))
    }

    /// Validates the payload into a draft region.
    ///
    /// Accepts single-ring polygons only: holes and extra rings are
    /// rejected rather than silently dropped, since the resulting
    /// annotation would outline a different shape than the user drew.
    /// Features without an id get a generated one.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] describing why the payload was refused.
    pub fn into_draft(self) -> Result<DraftRegion, GeometryError> {
        let geometry = self.geometry.ok_or(GeometryError::MissingGeometry)?;

        if geometry.kind != "Polygon" {
            return Err(GeometryError::wrong_type("Polygon", geometry.kind));
        }

        let rings = geometry
            .coordinates
            .as_array()
            .ok_or_else(|| GeometryError::malformed("expected an array of rings"))?;

        let ring = match rings.as_slice() {
            [] => return Err(GeometryError::malformed("polygon has no rings")),
            [ring] => ring,
            more => {
                return Err(GeometryError::UnsupportedRings { count: more.len() });
            }
        };

        let positions = ring
            .as_array()
            .ok_or_else(|| GeometryError::malformed("expected an array of positions"))?;

        let mut vertices = Vec::with_capacity(positions.len());
        for position in positions {
            vertices.push(parse_position(position)?);
        }

        let region = Region::from_vertices(vertices)?;
        let id = match self.id {
            Some(id) => AnnotationId::new(id),
            None => AnnotationId::generate(),
        };

        Ok(DraftRegion { id, region })
    }
}

fn parse_position(position: &serde_json::Value) -> Result<LngLat, GeometryError> {
    let pair = position
        .as_array()
        .ok_or_else(|| GeometryError::malformed("expected a coordinate pair"))?;

    match pair.as_slice() {
        // Trailing members (altitude) are tolerated, per GeoJSON positions.
        [lng, lat, ..] => {
            let lng = lng
                .as_f64()
                .ok_or_else(|| GeometryError::malformed("non-numeric longitude"))?;
            let lat = lat
                .as_f64()
                .ok_or_else(|| GeometryError::malformed("non-numeric latitude"))?;
            Ok(LngLat::new(lng, lat))
        }
        _ => Err(GeometryError::malformed("coordinate pair too short")),
    }
}

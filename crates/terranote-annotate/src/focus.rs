//! Re-centering the camera on a stored annotation.

use terranote_core::config::FocusConfig;
use terranote_core::types::Annotation;
use terranote_map::camera::CameraLink;
use tracing::debug;

/// Issues fit-bounds commands that frame stored annotations.
#[derive(Debug, Clone)]
pub struct AnnotationFocus {
    camera: CameraLink,
    config: FocusConfig,
}

impl AnnotationFocus {
    /// Creates a focus command issuer over `camera`.
    pub fn new(camera: CameraLink, config: FocusConfig) -> Self {
        Self { camera, config }
    }

    /// Frames the annotation's region with the configured padding.
    ///
    /// The bounds are the minimal axis-aligned box over the region's
    /// vertices, widened to the configured minimum span when the region is
    /// collinear or a single point, so the fit command is always
    /// well-formed. Never fails.
    pub fn focus(&self, annotation: &Annotation) {
        let bounds = annotation
            .region
            .bounding_box()
            .padded_to_min_span(self.config.min_span);

        debug!(id = %annotation.id, "fitting camera to annotation bounds");
        self.camera.fit_bounds(bounds, self.config.padding);
    }
}

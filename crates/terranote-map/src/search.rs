//! Bridge from resolved geocoder results to camera navigation.

use crate::camera::CameraLink;
use terranote_core::config::SearchConfig;
use terranote_core::types::SearchHit;
use tracing::debug;

/// Turns a resolved search result into a single fly-to command.
///
/// The external search widget owns the query UX, including the empty-result
/// case; this bridge only ever sees coordinates that resolved. Commands are
/// not queued: when results arrive in quick succession the engine simply
/// retargets, so the most recent command is the one that matters.
#[derive(Debug, Clone)]
pub struct SearchBridge {
    camera: CameraLink,
    config: SearchConfig,
}

impl SearchBridge {
    /// Creates a bridge issuing commands over `camera`.
    pub fn new(camera: CameraLink, config: SearchConfig) -> Self {
        Self { camera, config }
    }

    /// Flies the camera to a resolved search result.
    pub fn on_search_result(&self, hit: &SearchHit) {
        debug!(
            place = hit.place_name.as_deref().unwrap_or("<unnamed>"),
            "search resolved, flying to result"
        );
        self.camera
            .fly_to(hit.center, self.config.fly_zoom, self.config.skippable_motion);
    }

    /// Flies to the first of a result set; an empty set is a no-op.
    pub fn on_search_results(&self, hits: &[SearchHit]) {
        match hits.first() {
            Some(hit) => self.on_search_result(hit),
            None => debug!("search returned no results"),
        }
    }
}

//! Live mirror of the engine camera position.

use terranote_core::types::Viewport;
use tracing::trace;

/// Tracks the camera position reported by the map engine.
///
/// The engine is the sole producer; updates are synchronous and
/// last-write-wins. No validation happens here (engine values are trusted),
/// and reads always see the most recent move.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    current: Viewport,
}

impl ViewportTracker {
    /// Creates a tracker starting at the given position.
    pub fn new(initial: Viewport) -> Self {
        Self { current: initial }
    }

    /// Records a camera move reported by the engine.
    pub fn on_camera_moved(&mut self, position: Viewport) {
        trace!(%position, "camera moved");
        self.current = position;
    }

    /// Returns the latest tracked position.
    pub fn current(&self) -> Viewport {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terranote_core::types::LngLat;

    #[test]
    fn test_last_write_wins() {
        let mut tracker = ViewportTracker::new(Viewport::new(LngLat::new(-106.4798, 39.468), 13.0));

        let moves = [
            Viewport::new(LngLat::new(-106.5, 39.5), 12.0),
            Viewport::new(LngLat::new(-106.6, 39.6), 11.5),
            Viewport::new(LngLat::new(-106.7, 39.7), 10.0),
        ];
        for position in moves {
            tracker.on_camera_moved(position);
        }

        assert_eq!(tracker.current(), moves[2]);
    }

    #[test]
    fn test_initial_position_visible_before_any_move() {
        let initial = Viewport::new(LngLat::new(-106.4798, 39.468), 13.0);
        let tracker = ViewportTracker::new(initial);
        assert_eq!(tracker.current(), initial);
    }
}

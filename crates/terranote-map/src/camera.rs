//! Camera commands and the fire-and-forget link to the map engine.
//!
//! The engine owns the camera; this module only issues commands. A new
//! command supersedes any in-flight animation at the engine, so nothing here
//! queues, awaits, or cancels.

use flume::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use terranote_core::types::{BoundingBox, LngLat};
use tracing::{debug, warn};

/// A camera steering command for the external map engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CameraCommand {
    /// Animated recenter to a point at a target zoom
    FlyTo {
        /// Target center
        center: LngLat,
        /// Target zoom level
        zoom: f64,
        /// Whether the animation may be shortened for reduced-motion users
        skippable: bool,
    },
    /// Animated adjustment to frame a bounding box
    FitBounds {
        /// Box to frame
        bounds: BoundingBox,
        /// Visual padding in pixel-equivalent units
        padding: f64,
    },
}

impl CameraCommand {
    /// Check if this is a fly-to command.
    pub fn is_fly_to(&self) -> bool {
        matches!(self, CameraCommand::FlyTo { .. })
    }

    /// Check if this is a fit-bounds command.
    pub fn is_fit_bounds(&self) -> bool {
        matches!(self, CameraCommand::FitBounds { .. })
    }
}

/// Sending half of the camera command channel.
///
/// Cloned into every component that steers the camera. Sends are
/// fire-and-forget: a closed receiver (engine gone) drops the command with
/// a warning rather than failing the caller.
#[derive(Debug, Clone)]
pub struct CameraLink {
    tx: Sender<CameraCommand>,
}

impl CameraLink {
    /// Creates a link plus the receiver the engine adapter drains.
    pub fn channel() -> (Self, Receiver<CameraCommand>) {
        let (tx, rx) = flume::unbounded();
        (Self { tx }, rx)
    }

    /// Issues an animated recenter to `center` at `zoom`.
    pub fn fly_to(&self, center: LngLat, zoom: f64, skippable: bool) {
        self.send(CameraCommand::FlyTo {
            center,
            zoom,
            skippable,
        });
    }

    /// Issues an animated fit of `bounds` with `padding`.
    pub fn fit_bounds(&self, bounds: BoundingBox, padding: f64) {
        self.send(CameraCommand::FitBounds { bounds, padding });
    }

    fn send(&self, command: CameraCommand) {
        debug!(?command, "issuing camera command");
        if self.tx.send(command).is_err() {
            warn!("camera command channel closed; command dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fly_to_reaches_receiver() {
        let (link, rx) = CameraLink::channel();
        link.fly_to(LngLat::new(-106.8175, 39.1911), 12.0, true);

        let command = rx.try_recv().unwrap();
        assert_eq!(
            command,
            CameraCommand::FlyTo {
                center: LngLat::new(-106.8175, 39.1911),
                zoom: 12.0,
                skippable: true,
            }
        );
        assert!(command.is_fly_to());
    }

    #[test]
    fn test_send_after_receiver_dropped_is_silent() {
        let (link, rx) = CameraLink::channel();
        drop(rx);
        // Must not panic or block.
        link.fly_to(LngLat::new(0.0, 0.0), 1.0, true);
    }

    #[test]
    fn test_command_serialization() {
        let command = CameraCommand::FitBounds {
            bounds: BoundingBox {
                min: LngLat::new(-106.5, 39.4),
                max: LngLat::new(-106.4, 39.5),
            },
            padding: 10.0,
        };
        let json = serde_json::to_string(&command).unwrap();
        assert!(json.contains("fit_bounds"));
        assert!(json.contains("padding"));
    }
}

//! # Terranote Map
//!
//! Bridge between the annotation core and the external map engine.
//!
//! The engine (tile rendering, terrain shading, camera animation) is a black
//! box on the far side of two channels:
//!
//! - **Outbound**: [`camera::CameraLink`] issues fire-and-forget
//!   [`camera::CameraCommand`]s (fly-to, fit-bounds). The engine interrupts
//!   its own animations when a new command lands.
//! - **Inbound**: the engine's move events feed
//!   [`viewport::ViewportTracker`], a synchronous last-write-wins mirror of
//!   the camera.
//!
//! [`search::SearchBridge`] converts resolved geocoder hits into fly-to
//! commands, and [`bootstrap::EngineBootstrap`] is the startup document the
//! embedder hands the engine (the one place a missing credential is fatal).

pub mod bootstrap;
pub mod camera;
pub mod search;
pub mod viewport;

// Re-export commonly used types for convenience
pub use bootstrap::EngineBootstrap;
pub use camera::{CameraCommand, CameraLink};
pub use search::SearchBridge;
pub use viewport::ViewportTracker;

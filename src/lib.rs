//! # Terranote
//!
//! Annotation core for a 3D terrain map: browse, search a place by name,
//! draw a closed region, attach a note, and fly back to any saved note.
//!
//! The map engine, geocoder widget, and draw tool are external black boxes;
//! this workspace owns the state and sequencing between them:
//!
//! ```text
//!   engine `move` ──────────┐
//!   geocoder `result` ──────┤                       ┌──> CameraCommand ──> engine
//!   draw tool `create` ─────┼──> EngineEvent ──┐    │
//!                           │                  ├──> MapSession ──> SessionSignal ──> UI
//!   note editor submit ─────┤                  │    │
//!   annotation list click ──┴──> UiCommand ────┘    └──> AnnotationStore
//! ```
//!
//! Each message is routed to exactly one component handler
//! ([`terranote_map::ViewportTracker`], [`terranote_map::SearchBridge`],
//! [`terranote_annotate::NoteFlow`], [`terranote_annotate::AnnotationFocus`])
//! on one logical task; outbound camera commands and UI signals are
//! fire-and-forget channel sends.
//!
//! ## Example
//!
//! ```
//! use terranote::session::{EngineEvent, MapSession};
//! use terranote_core::config::AppConfig;
//! use terranote_core::types::{LngLat, SearchHit};
//! use terranote_map::camera::CameraLink;
//!
//! let config = AppConfig::default();
//! let (camera, camera_rx) = CameraLink::channel();
//! let (mut session, _signals) = MapSession::new(&config, camera);
//!
//! session.handle_event(EngineEvent::SearchResolved(SearchHit::named(
//!     "Aspen, CO",
//!     LngLat::new(-106.8175, 39.1911),
//! )));
//!
//! assert!(camera_rx.try_recv().unwrap().is_fly_to());
//! ```

pub mod session;
pub mod telemetry;

// Re-export the component crates' common types at the workspace surface
pub use session::{EngineEvent, MapSession, SessionMessage, SessionSignal, UiCommand};
pub use terranote_annotate::{
    AnnotationFocus, AnnotationStore, DrawControls, NoteFlow, ShapeFeature,
};
pub use terranote_core::{
    Annotation, AnnotationId, AppConfig, DraftRegion, LngLat, Region, Result, SearchHit,
    TerranoteError, Viewport,
};
pub use terranote_map::{CameraCommand, CameraLink, EngineBootstrap, SearchBridge, ViewportTracker};

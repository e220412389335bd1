//! # Terranote Annotate
//!
//! The annotation subsystem: from a drawn polygon to a persisted,
//! re-navigable note.
//!
//! - [`draw`]: adapter for the external polygon tool; validates its
//!   untyped create-event payloads into draft regions.
//! - [`flow`]: the `Idle`/`AwaitingText` state machine gating text entry
//!   for a draft and committing it.
//! - [`store`]: append-only, insertion-ordered store of committed
//!   annotations.
//! - [`focus`]: fit-bounds issuance to re-center the camera on a stored
//!   annotation.
//!
//! ## Example
//!
//! ```
//! use terranote_annotate::flow::NoteFlow;
//! use terranote_annotate::store::AnnotationStore;
//! use terranote_core::types::{AnnotationId, DraftRegion, LngLat, Region};
//!
//! let mut flow = NoteFlow::new();
//! let mut store = AnnotationStore::new();
//!
//! let region = Region::from_vertices(vec![
//!     LngLat::new(-106.5, 39.5),
//!     LngLat::new(-106.4, 39.5),
//!     LngLat::new(-106.4, 39.4),
//! ])
//! .unwrap();
//! flow.on_shape_created(DraftRegion {
//!     id: AnnotationId::new("draw-1"),
//!     region,
//! });
//!
//! assert!(flow.submit("lunch spot", &mut store).is_committed());
//! assert_eq!(store.len(), 1);
//! ```

pub mod draw;
pub mod flow;
pub mod focus;
pub mod store;

// Re-export commonly used types for convenience
pub use draw::{DrawControls, ShapeFeature};
pub use flow::{DraftOutcome, FlowState, NoteFlow, SubmitOutcome};
pub use focus::AnnotationFocus;
pub use store::AnnotationStore;

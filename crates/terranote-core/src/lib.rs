//! # Terranote Core
//!
//! Core types, error handling, and configuration for the terranote
//! annotation system.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Types**: Geographic primitives (`LngLat`, `Viewport`, `BoundingBox`)
//!   and the annotation data model (`Region`, `DraftRegion`, `Annotation`).
//! - **Errors**: `thiserror`-based taxonomy covering the configuration and
//!   geometry-ingestion boundaries; everything else is total.
//! - **Configuration**: YAML files with `TERRANOTE__` environment variable
//!   overrides and validation.
//!
//! ## Example
//!
//! ```
//! use terranote_core::types::{AnnotationId, Annotation, LngLat, Region};
//!
//! let region = Region::from_vertices(vec![
//!     LngLat::new(-106.5, 39.5),
//!     LngLat::new(-106.4, 39.5),
//!     LngLat::new(-106.4, 39.4),
//! ])
//! .unwrap();
//!
//! let note = Annotation::new(AnnotationId::new("bowl-1"), "great powder bowl", region);
//! assert_eq!(note.text, "great powder bowl");
//! ```

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{Result, TerranoteError};
pub use types::{Annotation, AnnotationId, DraftRegion, LngLat, Region, SearchHit, Viewport};

//! # barprint Silhouette
//!
//! Computes the single outer boundary of a cluster of axis-aligned
//! rectangles lying on one plane, such as the combined footprint of a set of
//! parallel bars, and returns it as one closed rectilinear polygon.
//!
//! ## Pipeline
//!
//! ```text
//! Rectangles
//!   ├── Row sweep (grouping) ──> Left / right staircase chains
//!   ├── Selector (first / last row windows)
//!   ├── Column sweeps (grouping) ──> Bottom / top staircase chains
//!   └── Stitcher ──> Outline
//! ```
//!
//! The input is expected to form a connected footprint. Each row is closed
//! from the side, so gaps between bars are bridged: notches opening up or
//! down (U shapes, the arms of a plus) end up inside the outline.
//!
//! ## Usage
//!
//! ```rust
//! use barprint_core::{Rect, Tolerance};
//! use barprint_silhouette::rectangle_outline;
//!
//! let rects = [Rect::new(0.0, 0.0, 10.0, 5.0), Rect::new(2.0, 5.0, 8.0, 10.0)];
//! let outline = rectangle_outline(&rects, Tolerance::MERGE).unwrap();
//! assert_eq!(outline.len(), 8);
//! ```

pub mod builder;
pub mod error;
pub mod grouping;
pub mod outline;
pub mod selector;
pub mod staircase;
pub mod stitch;

pub use builder::{rectangle_outline, OutlineParams, SilhouetteBuilder, DEFAULT_MAX_RECTANGLES};
pub use error::{OutlineError, OutlineResult};
pub use grouping::{group_segments, segments_for, Band, BoundarySegment, Side, Sweep};
pub use outline::Outline;
pub use selector::{select_within, ColumnWindow, ColumnWindows};
pub use staircase::{choose_corner, classify_step, trace_chain, Chain, StepKind};
pub use stitch::{stitch, SideChains};

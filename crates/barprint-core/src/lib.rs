//! # barprint Core
//!
//! Core types and utilities shared by the barprint crates.
//! Provides the geometric primitives the silhouette pipeline works on
//! and the error types used across the workspace.
//!
//! ## Primitives
//!
//! - **Point**: 3D point with tolerance-aware comparison
//! - **Tolerance**: validated epsilon threaded through every comparison
//! - **Interval**: closed range on one axis
//! - **Rect**: axis-aligned rectangle normalized from two corners

pub mod error;
pub mod geometry;

pub use error::{Error, GeometryError, Result};
pub use geometry::{Interval, Point, Rect, Tolerance};

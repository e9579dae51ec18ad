//! Error types for the silhouette crate.
//!
//! Every variant means "no outline could be computed". Callers that only
//! need an optional outline can use [`rectangle_outline`](crate::rectangle_outline),
//! which maps all of them to `None`.

use thiserror::Error;

/// Errors that stop an outline from being computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OutlineError {
    /// The rectangle list was empty.
    #[error("No rectangles to outline")]
    EmptyInput,

    /// Every entry was malformed or collapsed to zero area.
    #[error("None of the {count} rectangle entries are usable")]
    NoUsableRectangles { count: usize },

    /// Input exceeds the configured size guard.
    #[error("Too many rectangles: {count} (limit {limit})")]
    TooManyRectangles { count: usize, limit: usize },
}

/// Result type alias for outline operations.
pub type OutlineResult<T> = Result<T, OutlineError>;

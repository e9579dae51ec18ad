//! Error handling for barprint
//!
//! Provides the error types shared by the workspace crates:
//! - Geometry errors (invalid tolerances, malformed rectangles)
//! - Configuration errors (settings files)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents invalid geometric input handed to the primitive constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Tolerance must be a positive, finite number
    #[error("Invalid tolerance {value}: must be positive and finite")]
    InvalidTolerance {
        /// The rejected tolerance value.
        value: f64,
    },

    /// A rectangle entry did not carry exactly two corner points
    #[error("Rectangle needs exactly 2 corner points, got {count}")]
    WrongCornerCount {
        /// The number of corners that were supplied.
        count: usize,
    },

    /// A coordinate was NaN or infinite
    #[error("Non-finite coordinate in point ({x}, {y}, {z})")]
    NonFiniteCoordinate {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// Z coordinate.
        z: f64,
    },
}

/// Main error type for barprint
///
/// A unified error type used by the settings layer and the binary.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// The error message.
        message: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error from a string message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config {
            message: msg.into(),
        }
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

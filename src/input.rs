//! Rectangle input files.
//!
//! A file holds a `rectangles` list where every entry is a list of corner
//! points. Well-formed entries carry exactly two corners; anything else is
//! skipped by the outline builder.

use barprint_core::{Error, Point, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Rectangles as read from an input file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RectangleSet {
    pub rectangles: Vec<Vec<Point>>,
}

impl RectangleSet {
    /// Load from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let set = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML input: {}", e)))?,
            _ => return Err(Error::other("Input file must be .json or .toml")),
        };

        debug!(
            "Loaded {} rectangle entries from {}",
            set.rectangles.len(),
            path.display()
        );
        Ok(set)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::other(format!("Invalid JSON input: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }
}

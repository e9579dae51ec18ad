//! Configuration and settings management for barprint
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default file lives in the
//! platform-specific configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Outline settings (tolerance, size guard, simplification)
//! - Output settings (format, precision)

use barprint_core::{Error, Result, Tolerance};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Largest number of decimal places accepted for output.
const MAX_PRECISION: usize = 12;

/// Output format for a computed outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON object with a `points` array
    #[default]
    Json,
    /// SVG path data
    Svg,
    /// One `x y z` line per vertex
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Svg => write!(f, "svg"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "svg" => Ok(Self::Svg),
            "text" | "txt" => Ok(Self::Text),
            other => Err(Error::config(format!("Unknown output format: {}", other))),
        }
    }
}

/// Outline computation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSettings {
    /// Coordinate comparison tolerance
    pub tolerance: f64,
    /// Maximum number of rectangles per outline
    pub max_rectangles: usize,
    /// Remove vertices in the middle of straight runs
    pub remove_collinear: bool,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::MERGE.value(),
            max_rectangles: 10_000,
            remove_collinear: false,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format
    pub format: OutputFormat,
    /// Decimal places for SVG and text output
    pub precision: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            precision: 3,
        }
    }
}

/// Complete configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Outline settings
    pub outline: OutlineSettings,
    /// Output settings
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        let config: Self = if has_extension(path, "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?
        } else if has_extension(path, "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if has_extension(path, "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?
        } else if has_extension(path, "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// A missing default file yields the defaults; an explicit path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match default_config_path() {
                Some(default) if default.exists() => Self::load_from_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.tolerance()?;

        if self.outline.max_rectangles == 0 {
            return Err(Error::config("Max rectangles must be > 0"));
        }

        if self.output.precision > MAX_PRECISION {
            return Err(Error::config(format!(
                "Output precision must be <= {}",
                MAX_PRECISION
            )));
        }

        Ok(())
    }

    /// Validated tolerance value
    pub fn tolerance(&self) -> Result<Tolerance> {
        Ok(Tolerance::new(self.outline.tolerance)?)
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

/// Default config file: `<config dir>/barprint/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("barprint").join("config.toml"))
}

//! # barprint
//!
//! Computes the outer silhouette of a cluster of axis-aligned rectangles,
//! such as the footprint of a group of parallel bars, and prints it as a
//! single closed rectilinear polygon.
//!
//! ## Architecture
//!
//! barprint is organized as a workspace with multiple crates:
//!
//! 1. **barprint-core** - Geometric primitives, tolerance, error types
//! 2. **barprint-silhouette** - Grouping, staircase tracing, stitching, pipeline
//! 3. **barprint-settings** - Configuration files (JSON/TOML)
//! 4. **barprint** - Main binary: logging, input loading, output rendering

pub mod input;
pub mod output;

pub use barprint_core::{Error, GeometryError, Interval, Point, Rect, Result, Tolerance};
pub use barprint_settings::{Config, OutlineSettings, OutputFormat, OutputSettings};
pub use barprint_silhouette::{
    rectangle_outline, Outline, OutlineError, OutlineParams, SilhouetteBuilder,
};
pub use input::RectangleSet;
pub use output::render;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so stdout carries only the outline
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Outline parameters from a validated configuration
pub fn params_from_config(config: &Config) -> Result<OutlineParams> {
    config.validate()?;
    Ok(OutlineParams::new(config.tolerance()?)
        .with_max_rectangles(config.outline.max_rectangles)
        .with_remove_collinear(config.outline.remove_collinear))
}

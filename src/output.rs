//! Outline rendering for stdout.

use barprint_core::{Error, Result};
use barprint_settings::{OutputFormat, OutputSettings};
use barprint_silhouette::Outline;
use std::fmt::Write;

/// Render an outline in the configured format
pub fn render(outline: &Outline, settings: &OutputSettings) -> Result<String> {
    match settings.format {
        OutputFormat::Json => serde_json::to_string_pretty(outline)
            .map_err(|e| Error::other(format!("Failed to serialize outline: {}", e))),
        OutputFormat::Svg => Ok(render_svg(outline, settings.precision)),
        OutputFormat::Text => Ok(render_text(outline, settings.precision)),
    }
}

fn render_svg(outline: &Outline, precision: usize) -> String {
    let (min, max) = match outline.bounds() {
        Some(bounds) => bounds,
        None => return String::from("<svg xmlns=\"http://www.w3.org/2000/svg\"/>"),
    };

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.p$} {:.p$} {:.p$} {:.p$}\">\n  <path d=\"{}\" fill=\"none\" stroke=\"black\"/>\n</svg>",
        min.x,
        min.y,
        max.x - min.x,
        max.y - min.y,
        outline.to_svg_path(precision),
        p = precision
    )
}

fn render_text(outline: &Outline, precision: usize) -> String {
    let mut out = String::new();
    for p in outline.points() {
        let _ = writeln!(out, "{:.p$} {:.p$} {:.p$}", p.x, p.y, p.z, p = precision);
    }
    out
}

//! Silhouette pipeline.
//!
//! Rectangles go through a row sweep (left and right chains), the row/column
//! selector, two column sweeps (bottom and top chains) and finally the
//! stitcher. All output points lie on the plane of the highest input Z.

use barprint_core::{Point, Rect, Tolerance};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{OutlineError, OutlineResult};
use crate::grouping::{group_segments, segments_for, Side, Sweep};
use crate::outline::Outline;
use crate::selector::{select_within, ColumnWindow, ColumnWindows};
use crate::staircase::{trace_chain, Chain};
use crate::stitch::{stitch, SideChains};

/// Default size guard for a single call.
pub const DEFAULT_MAX_RECTANGLES: usize = 10_000;

/// Parameters for outline computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineParams {
    /// Tolerance for every coordinate comparison
    pub tolerance: Tolerance,
    /// Maximum number of rectangles accepted in one call
    pub max_rectangles: usize,
    /// Drop vertices in the middle of straight runs after stitching
    pub remove_collinear: bool,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::MERGE,
            max_rectangles: DEFAULT_MAX_RECTANGLES,
            remove_collinear: false,
        }
    }
}

impl OutlineParams {
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    pub fn with_max_rectangles(mut self, limit: usize) -> Self {
        self.max_rectangles = limit;
        self
    }

    pub fn with_remove_collinear(mut self, remove: bool) -> Self {
        self.remove_collinear = remove;
        self
    }
}

/// Computes the outline of a cluster of rectangles.
#[derive(Debug, Clone, Default)]
pub struct SilhouetteBuilder {
    params: OutlineParams,
}

impl SilhouetteBuilder {
    pub fn new(params: OutlineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OutlineParams {
        &self.params
    }

    /// Builds the outline from raw corner lists as handed over by a host
    /// application. Entries without exactly two finite corners are skipped.
    pub fn build_from_corners(&self, entries: &[Vec<Point>]) -> OutlineResult<Outline> {
        if entries.is_empty() {
            return Err(OutlineError::EmptyInput);
        }

        let rects: Vec<Rect> = entries
            .iter()
            .enumerate()
            .filter_map(|(idx, corners)| match Rect::from_corner_list(corners) {
                Ok(rect) => Some(rect),
                Err(e) => {
                    warn!("Skipping rectangle entry {}: {}", idx, e);
                    None
                }
            })
            .collect();

        if rects.is_empty() {
            return Err(OutlineError::NoUsableRectangles {
                count: entries.len(),
            });
        }
        self.build(&rects)
    }

    /// Builds the closed outline of `rects`.
    pub fn build(&self, rects: &[Rect]) -> OutlineResult<Outline> {
        let tol = self.params.tolerance;
        let chains = self.trace(rects)?;
        let outline = Outline::new(stitch(&chains, tol));

        let outline = if self.params.remove_collinear {
            outline.without_collinear(tol)
        } else {
            outline
        };

        debug!(
            "Outline of {} rectangles has {} vertices",
            rects.len(),
            outline.len()
        );
        Ok(outline)
    }

    /// Runs the sweeps and returns the four side chains without stitching.
    pub fn trace(&self, rects: &[Rect]) -> OutlineResult<SideChains> {
        let tol = self.params.tolerance;
        let rects = self.usable_rectangles(rects)?;
        let z = rects
            .iter()
            .map(Rect::plane_z)
            .fold(f64::NEG_INFINITY, f64::max);

        let rows = group_segments(&segments_for(&rects, Sweep::Rows), tol);
        debug!(
            "{} sweep merged {} rectangles into {} bands",
            Sweep::Rows,
            rects.len(),
            rows.len()
        );

        let left = trace_chain(&rows, Sweep::Rows, Side::Low, z, tol);
        let right = trace_chain(&rows, Sweep::Rows, Side::High, z, tol);
        let (bottom, top) = match ColumnWindows::from_rows(&rows) {
            Some(windows) => (
                self.column_chain(&rects, &windows.bottom, Side::Low, z),
                self.column_chain(&rects, &windows.top, Side::High, z),
            ),
            None => (Chain::new(), Chain::new()),
        };

        Ok(SideChains {
            left,
            right,
            bottom,
            top,
        })
    }

    fn column_chain(&self, rects: &[Rect], window: &ColumnWindow, side: Side, z: f64) -> Chain {
        let tol = self.params.tolerance;
        let selected = select_within(rects, window, side, tol);
        let columns = group_segments(&segments_for(&selected, Sweep::Columns), tol);
        debug!(
            "{} sweep ({:?}) selected {} rectangles, {} bands",
            Sweep::Columns,
            side,
            selected.len(),
            columns.len()
        );
        trace_chain(&columns, Sweep::Columns, side, z, tol)
    }

    fn usable_rectangles(&self, rects: &[Rect]) -> OutlineResult<Vec<Rect>> {
        if rects.is_empty() {
            return Err(OutlineError::EmptyInput);
        }
        if rects.len() > self.params.max_rectangles {
            return Err(OutlineError::TooManyRectangles {
                count: rects.len(),
                limit: self.params.max_rectangles,
            });
        }

        let tol = self.params.tolerance;
        let usable: Vec<Rect> = rects
            .iter()
            .enumerate()
            .filter_map(|(idx, rect)| {
                if rect.is_degenerate(tol) {
                    warn!(
                        "Skipping degenerate rectangle {} ({} x {})",
                        idx,
                        rect.width(),
                        rect.height()
                    );
                    None
                } else {
                    Some(*rect)
                }
            })
            .collect();

        if usable.is_empty() {
            return Err(OutlineError::NoUsableRectangles { count: rects.len() });
        }
        Ok(usable)
    }
}

/// Outline of `rects`, or `None` when it cannot be computed.
///
/// Callers are expected to fall back to their own handling (for instance the
/// individual rectangle boundaries) on `None`.
pub fn rectangle_outline(rects: &[Rect], tolerance: Tolerance) -> Option<Outline> {
    match SilhouetteBuilder::new(OutlineParams::new(tolerance)).build(rects) {
        Ok(outline) => Some(outline),
        Err(e) => {
            debug!("No outline computed: {}", e);
            None
        }
    }
}

//! Row/column selection for the bottom and top traces.
//!
//! The left and right chains bound every row from the side, including the
//! steps between members of one row. What is left to close is the lowest and
//! the highest edge of the footprint, so the bottom trace only sees the
//! rectangles of the first row that rest on its lower edge, and the top trace
//! only those of the last row that reach its upper edge. Both column chains
//! then start and end exactly where the left and right chains do.
//!
//! Gaps between the bars of a row are bridged, not carved: a notch opening up
//! or down (a U shape, the arms of a plus) ends up inside the outline.

use barprint_core::{Interval, Rect, Tolerance};

use crate::grouping::{Band, Side};

/// Row edge feeding one column sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWindow {
    /// X extent of the row.
    pub extent: Interval,
    /// Y coordinate of the row's outer edge.
    pub edge: f64,
}

/// Windows used to pick the rectangles feeding the column sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWindows {
    pub bottom: ColumnWindow,
    pub top: ColumnWindow,
}

impl ColumnWindows {
    /// Windows taken from the first and last row band, or `None` without rows.
    pub fn from_rows(rows: &[Band]) -> Option<Self> {
        let first = rows.first()?;
        let last = rows.last()?;
        Some(Self {
            bottom: ColumnWindow {
                extent: first.extent,
                edge: first.span.min,
            },
            top: ColumnWindow {
                extent: last.extent,
                edge: last.span.max,
            },
        })
    }
}

/// Rectangles whose X span lies inside the window (with `tol` slack) and
/// whose `side` edge lies on the window's edge.
pub fn select_within(
    rects: &[Rect],
    window: &ColumnWindow,
    side: Side,
    tol: Tolerance,
) -> Vec<Rect> {
    rects
        .iter()
        .filter(|r| {
            r.x_span().within(&window.extent, tol)
                && tol.coincident(side.pick(&r.y_span()), window.edge)
        })
        .copied()
        .collect()
}

//! Outline stitching.
//!
//! Joins the four side chains into one closed point sequence, walking
//! counter-clockwise: left chain downwards, bottom chain to the right, right
//! chain upwards, top chain back to the left. Seam points shared by two
//! chains (within tolerance) are emitted once.

use barprint_core::{Point, Tolerance};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::staircase::Chain;

/// The four side chains of an outline.
///
/// Left and right ascend in Y, bottom and top ascend in X.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideChains {
    pub left: Chain,
    pub right: Chain,
    pub bottom: Chain,
    pub top: Chain,
}

impl SideChains {
    /// Bottom and top both have at least one segment.
    pub fn has_columns(&self) -> bool {
        self.bottom.len() >= 2 && self.top.len() >= 2
    }
}

/// Appends `chain`, dropping its first point if it repeats the outline's
/// current last point and its last point if it repeats `next_start`.
fn append_trimmed(
    outline: &mut Vec<Point>,
    chain: &[Point],
    next_start: Option<Point>,
    tol: Tolerance,
) {
    let mut slice = chain;
    if let (Some(first), Some(tail)) = (slice.first(), outline.last()) {
        if first.approx_eq(tail, tol) {
            slice = &slice[1..];
        }
    }
    if let (Some(last), Some(next)) = (slice.last(), next_start.as_ref()) {
        if last.approx_eq(next, tol) {
            slice = &slice[..slice.len() - 1];
        }
    }
    outline.extend_from_slice(slice);
}

/// Stitches the side chains into a closed outline.
///
/// When bottom or top has fewer than two points the column chains are
/// skipped and the outline is the reversed left chain followed by the right
/// chain.
pub fn stitch(chains: &SideChains, tol: Tolerance) -> Vec<Point> {
    let mut outline = chains.left.reversed().into_points();

    if chains.has_columns() {
        append_trimmed(
            &mut outline,
            chains.bottom.points(),
            chains.right.first().copied(),
            tol,
        );
        outline.extend_from_slice(chains.right.points());

        let closing = outline.first().copied();
        append_trimmed(&mut outline, chains.top.reversed().points(), closing, tol);
    } else {
        debug!(
            "Column chains incomplete (bottom {}, top {}), stitching left and right only",
            chains.bottom.len(),
            chains.top.len()
        );
        outline.extend_from_slice(chains.right.points());
    }

    outline
}

//! Staircase chain tracing.
//!
//! Walks the bands of one sweep in span order and joins the anchor points of
//! their side runs into a rectilinear polyline. Whenever two consecutive
//! anchors differ on both axes a single corner is inserted, picked by
//! [`choose_corner`] so the chain stays on the outward envelope.

use barprint_core::{Point, Tolerance};
use serde::{Deserialize, Serialize};

use crate::grouping::{Band, Side, Sweep};

/// Ordered rectilinear polyline forming one side of an outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    points: Vec<Point>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Same chain walked from the other end.
    pub fn reversed(&self) -> Chain {
        let mut points = self.points.clone();
        points.reverse();
        Chain { points }
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// How the next anchor relates to the chain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Both coordinates move: a corner is needed.
    Diagonal,
    /// Only the primary coordinate moves (bands abut on the sweep axis).
    PrimaryShift,
    /// Only the orthogonal coordinate moves (bands share the primary coordinate).
    OrthogonalRun,
    /// The anchor sits on the cursor.
    Coincident,
}

pub fn classify_step(cursor: &Point, next: &Point, sweep: Sweep, tol: Tolerance) -> StepKind {
    let primary_moves = !tol.coincident(sweep.primary(cursor), sweep.primary(next));
    let orthogonal_moves = !tol.coincident(sweep.orthogonal(cursor), sweep.orthogonal(next));
    match (primary_moves, orthogonal_moves) {
        (true, true) => StepKind::Diagonal,
        (true, false) => StepKind::PrimaryShift,
        (false, true) => StepKind::OrthogonalRun,
        (false, false) => StepKind::Coincident,
    }
}

/// Corner joining `cursor` to `next` when they differ on both axes.
///
/// If `next` lies further outward on the primary axis the chain steps out
/// first (corner at next's primary, cursor's orthogonal); otherwise it keeps
/// the cursor's primary coordinate and advances along the sweep first.
pub fn choose_corner(cursor: &Point, next: &Point, sweep: Sweep, side: Side) -> Point {
    let cursor_primary = sweep.primary(cursor);
    let next_primary = sweep.primary(next);
    if side.is_more_extreme(next_primary, cursor_primary) {
        sweep.point(next_primary, sweep.orthogonal(cursor), cursor.z)
    } else {
        sweep.point(cursor_primary, sweep.orthogonal(next), cursor.z)
    }
}

/// Traces one side of the bands into a chain ascending along the sweep axis.
///
/// `bands` must be sorted by span, as returned by
/// [`group_segments`](crate::grouping::group_segments). Returns an empty
/// chain when there are no bands.
pub fn trace_chain(bands: &[Band], sweep: Sweep, side: Side, z: f64, tol: Tolerance) -> Chain {
    let mut anchors = bands
        .iter()
        .flat_map(|band| band.runs(sweep, side, z, tol));
    let Some((near, far)) = anchors.next() else {
        return Chain::new();
    };

    let mut points = vec![near, far];
    let mut cursor = far;
    for (near, far) in anchors {
        match classify_step(&cursor, &near, sweep, tol) {
            StepKind::Diagonal => {
                points.push(choose_corner(&cursor, &near, sweep, side));
                points.push(near);
                points.push(far);
            }
            StepKind::PrimaryShift => {
                points.push(near);
                points.push(far);
            }
            StepKind::OrthogonalRun => points.push(far),
            StepKind::Coincident => {
                // The near point is redundant, but the far point still
                // carries the run's extent along the sweep.
                if !far.approx_eq(&cursor, tol) {
                    points.push(far);
                }
            }
        }
        cursor = far;
    }
    Chain::from_points(points)
}

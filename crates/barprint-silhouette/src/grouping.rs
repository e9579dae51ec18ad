//! Interval grouping and band merging.
//!
//! Every rectangle contributes one [`BoundarySegment`] per sweep. Segments are
//! first grouped by the exact coordinate of the rectangle's leading edge, then
//! groups whose orthogonal spans overlap are merged into [`Band`]s. A row sweep
//! yields the rows that feed the left and right chains; a column sweep yields
//! the columns that feed the bottom and top chains.

use std::collections::HashMap;
use std::fmt;

use barprint_core::{Interval, Point, Rect, Tolerance};

/// Orientation of a sweep.
///
/// `Rows` sweeps along Y and measures extents on X (left/right chains).
/// `Columns` sweeps along X and measures extents on Y (bottom/top chains).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Rows,
    Columns,
}

impl Sweep {
    /// Coordinate fixed along the boundary edges of this sweep.
    pub fn primary(self, p: &Point) -> f64 {
        match self {
            Self::Rows => p.x,
            Self::Columns => p.y,
        }
    }

    /// Coordinate the sweep advances along.
    pub fn orthogonal(self, p: &Point) -> f64 {
        match self {
            Self::Rows => p.y,
            Self::Columns => p.x,
        }
    }

    /// Builds a point from sweep-relative coordinates.
    pub fn point(self, primary: f64, orthogonal: f64, z: f64) -> Point {
        match self {
            Self::Rows => Point::new_3d(primary, orthogonal, z),
            Self::Columns => Point::new_3d(orthogonal, primary, z),
        }
    }

    fn grouping_key(self, rect: &Rect) -> f64 {
        match self {
            Self::Rows => rect.min.y,
            Self::Columns => rect.min.x,
        }
    }

    fn extent(self, rect: &Rect) -> Interval {
        match self {
            Self::Rows => rect.x_span(),
            Self::Columns => rect.y_span(),
        }
    }

    fn span(self, rect: &Rect) -> Interval {
        match self {
            Self::Rows => rect.y_span(),
            Self::Columns => rect.x_span(),
        }
    }
}

impl fmt::Display for Sweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => write!(f, "rows"),
            Self::Columns => write!(f, "columns"),
        }
    }
}

/// Which end of a band's primary extent a chain follows.
///
/// `Low` is the left side for rows and the bottom side for columns; moving
/// outward means decreasing the primary coordinate. `High` is right/top and
/// moves outward by increasing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Low,
    High,
}

impl Side {
    pub fn pick(self, extent: &Interval) -> f64 {
        match self {
            Self::Low => extent.min,
            Self::High => extent.max,
        }
    }

    /// True when `candidate` lies further outward than `reference`.
    pub fn is_more_extreme(self, candidate: f64, reference: f64) -> bool {
        match self {
            Self::Low => candidate < reference,
            Self::High => candidate > reference,
        }
    }
}

/// One rectangle's contribution to a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySegment {
    /// Exact coordinate of the rectangle's leading edge, used for grouping.
    pub key: f64,
    /// Extent on the primary axis.
    pub extent: Interval,
    /// Span on the orthogonal (sweep) axis.
    pub span: Interval,
}

impl BoundarySegment {
    pub fn from_rect(rect: &Rect, sweep: Sweep) -> Self {
        Self {
            key: sweep.grouping_key(rect),
            extent: sweep.extent(rect),
            span: sweep.span(rect),
        }
    }
}

/// Merged group of segments whose spans transitively overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub extent: Interval,
    pub span: Interval,
    pub segments: Vec<BoundarySegment>,
}

impl Band {
    fn seed(segment: BoundarySegment) -> Self {
        Self {
            extent: segment.extent,
            span: segment.span,
            segments: vec![segment],
        }
    }

    fn push(&mut self, segment: BoundarySegment) {
        self.extent = self.extent.union(&segment.extent);
        self.span = self.span.union(&segment.span);
        self.segments.push(segment);
    }

    fn absorb(&mut self, other: Band) {
        self.extent = self.extent.union(&other.extent);
        self.span = self.span.union(&other.span);
        self.segments.extend(other.segments);
        sort_by_span(&mut self.segments);
    }

    /// Outline of this band on one side, as `(near, far)` anchor pairs
    /// ascending along the span.
    ///
    /// Each pair covers a stretch of the span over which the outermost member
    /// segment on `side` stays the same, so a short segment never stretches
    /// past its own span. Consecutive pairs abut: one far point and the next
    /// near point share the orthogonal coordinate.
    pub fn runs(&self, sweep: Sweep, side: Side, z: f64, tol: Tolerance) -> Vec<(Point, Point)> {
        let mut cuts: Vec<f64> = self
            .segments
            .iter()
            .flat_map(|s| [s.span.min, s.span.max])
            .collect();
        cuts.sort_by(f64::total_cmp);
        cuts.dedup_by(|next, kept| tol.coincident(*next, *kept));

        let mut runs: Vec<Run> = Vec::with_capacity(cuts.len());
        for pair in cuts.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let mid = (from + to) / 2.0;
            let outermost = self
                .segments
                .iter()
                .filter(|s| s.span.min <= mid && s.span.max >= mid)
                .map(|s| side.pick(&s.extent))
                .reduce(|a, b| if side.is_more_extreme(b, a) { b } else { a });
            let Some(primary) = outermost else {
                continue;
            };

            if let Some(run) = runs
                .last_mut()
                .filter(|run| tol.coincident(run.primary, primary) && tol.coincident(run.to, from))
            {
                run.to = to;
            } else {
                runs.push(Run { primary, from, to });
            }
        }

        runs.into_iter()
            .map(|run| {
                (
                    sweep.point(run.primary, run.from, z),
                    sweep.point(run.primary, run.to, z),
                )
            })
            .collect()
    }
}

/// Stretch of a band's span with a constant outermost primary coordinate.
#[derive(Debug, Clone, Copy)]
struct Run {
    primary: f64,
    from: f64,
    to: f64,
}

fn sort_by_span(segments: &mut [BoundarySegment]) {
    segments.sort_by(|a, b| {
        a.span
            .min
            .total_cmp(&b.span.min)
            .then(a.span.max.total_cmp(&b.span.max))
    });
}

/// Segments of every rectangle for one sweep, in input order.
pub fn segments_for(rects: &[Rect], sweep: Sweep) -> Vec<BoundarySegment> {
    rects
        .iter()
        .map(|r| BoundarySegment::from_rect(r, sweep))
        .collect()
}

/// Groups segments by exact key and merges groups with overlapping spans.
///
/// The returned bands are sorted by span and their spans never overlap by
/// more than `tol`.
pub fn group_segments(segments: &[BoundarySegment], tol: Tolerance) -> Vec<Band> {
    let mut groups: Vec<Band> = Vec::new();
    let mut by_key: HashMap<u64, usize> = HashMap::new();

    for segment in segments {
        // Adding zero folds -0.0 into 0.0 so both land in the same group.
        let bits = (segment.key + 0.0).to_bits();
        match by_key.get(&bits) {
            Some(&idx) => groups[idx].push(*segment),
            None => {
                by_key.insert(bits, groups.len());
                groups.push(Band::seed(*segment));
            }
        }
    }

    for group in &mut groups {
        sort_by_span(&mut group.segments);
    }
    groups.sort_by(|a, b| {
        a.span
            .min
            .total_cmp(&b.span.min)
            .then(a.span.max.total_cmp(&b.span.max))
    });

    // Spans are sorted by lower bound, so a group either overlaps the band
    // being built or starts a new one.
    let mut bands: Vec<Band> = Vec::with_capacity(groups.len());
    for group in groups {
        if let Some(band) = bands
            .last_mut()
            .filter(|band| band.span.overlaps(&group.span, tol))
        {
            band.absorb(group);
        } else {
            bands.push(group);
        }
    }
    bands
}

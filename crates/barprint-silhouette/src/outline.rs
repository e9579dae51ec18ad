//! Closed outline produced by the silhouette pipeline.

use std::fmt::Write as _;

use barprint_core::{Point, Tolerance};
use serde::{Deserialize, Serialize};

/// Closed rectilinear polygon. The last point connects back to the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    pub fn new(points: Vec<Point>) -> Self {
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

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Edges in traversal order, including the closing edge back to the
    /// first point.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let next = self.points.iter().cycle().skip(1);
        self.points.iter().zip(next).map(|(a, b)| (*a, *b))
    }

    /// Enclosed area (shoelace formula, always non-negative).
    pub fn area(&self) -> f64 {
        let twice: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
        twice.abs() / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance_to(&b)).sum()
    }

    /// Lower-left and upper-right corners of the bounding box.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.points.first()?;
        let (min, max) = self.points.iter().fold((*first, *first), |(min, max), p| {
            (
                Point::new_3d(min.x.min(p.x), min.y.min(p.y), first.z),
                Point::new_3d(max.x.max(p.x), max.y.max(p.y), first.z),
            )
        });
        Some((min, max))
    }

    /// Every edge, the closing one included, is horizontal or vertical.
    pub fn is_rectilinear(&self, tol: Tolerance) -> bool {
        self.points.len() >= 4
            && self
                .edges()
                .all(|(a, b)| tol.coincident(a.x, b.x) || tol.coincident(a.y, b.y))
    }

    /// No edge folds back onto the one before it, and edges that are not
    /// neighbours never touch. Edges are compared by their bounding boxes,
    /// which is exact for rectilinear outlines.
    pub fn is_simple(&self, tol: Tolerance) -> bool {
        let edges: Vec<(Point, Point)> = self
            .edges()
            .filter(|(a, b)| !a.approx_eq(b, tol))
            .collect();
        let n = edges.len();
        if n < 3 {
            return false;
        }

        for i in 0..n {
            let (a, b) = edges[i];
            let (_, c) = edges[(i + 1) % n];
            if folds_back(&a, &b, &c, tol) {
                return false;
            }
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if boxes_touch(&edges[i], &edges[j], tol) {
                    return false;
                }
            }
        }
        true
    }

    /// Copy without repeated vertices and without vertices sitting in the
    /// middle of a straight horizontal or vertical run.
    pub fn without_collinear(&self, tol: Tolerance) -> Outline {
        let mut points: Vec<Point> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if points.last().map_or(true, |last| !last.approx_eq(p, tol)) {
                points.push(*p);
            }
        }
        while points.len() > 1 && points[0].approx_eq(&points[points.len() - 1], tol) {
            points.pop();
        }

        loop {
            let n = points.len();
            if n < 3 {
                break;
            }
            let kept: Vec<Point> = (0..n)
                .filter(|&i| {
                    let prev = &points[(i + n - 1) % n];
                    let next = &points[(i + 1) % n];
                    !is_collinear(prev, &points[i], next, tol)
                })
                .map(|i| points[i])
                .collect();
            if kept.len() == n {
                break;
            }
            points = kept;
        }
        Outline::new(points)
    }

    /// Same polygon regardless of starting vertex, direction, or redundant
    /// collinear vertices.
    pub fn same_shape(&self, other: &Outline, tol: Tolerance) -> bool {
        let a = self.without_collinear(tol).points;
        let b = other.without_collinear(tol).points;
        if a.len() != b.len() {
            return false;
        }
        let n = a.len();
        if n == 0 {
            return true;
        }
        (0..n)
            .filter(|&start| b[start].approx_eq(&a[0], tol))
            .any(|start| {
                let forward = (0..n).all(|i| a[i].approx_eq(&b[(start + i) % n], tol));
                let backward = (0..n).all(|i| a[i].approx_eq(&b[(start + n - i) % n], tol));
                forward || backward
            })
    }

    /// SVG path data (`M ... L ... Z`) with `precision` decimal places.
    pub fn to_svg_path(&self, precision: usize) -> String {
        let mut path = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                path.push(' ');
            }
            let _ = write!(path, "{} {:.*} {:.*}", cmd, precision, p.x, precision, p.y);
        }
        if !self.points.is_empty() {
            path.push_str(" Z");
        }
        path
    }
}

fn is_collinear(prev: &Point, cur: &Point, next: &Point, tol: Tolerance) -> bool {
    let vertical = tol.coincident(prev.x, cur.x) && tol.coincident(cur.x, next.x);
    let horizontal = tol.coincident(prev.y, cur.y) && tol.coincident(cur.y, next.y);
    vertical || horizontal
}

/// `b -> c` runs back along `a -> b`.
fn folds_back(a: &Point, b: &Point, c: &Point, tol: Tolerance) -> bool {
    let (dx1, dy1) = (b.x - a.x, b.y - a.y);
    let (dx2, dy2) = (c.x - b.x, c.y - b.y);
    let cross = dx1 * dy2 - dy1 * dx2;
    let dot = dx1 * dx2 + dy1 * dy2;
    let scale = dx1.hypot(dy1) * dx2.hypot(dy2);
    dot < 0.0 && cross.abs() <= tol.value() * scale
}

fn boxes_touch(e: &(Point, Point), f: &(Point, Point), tol: Tolerance) -> bool {
    let apart = |a0: f64, a1: f64, b0: f64, b1: f64| {
        a0.max(a1) < b0.min(b1) - tol.value() || b0.max(b1) < a0.min(a1) - tol.value()
    };
    !apart(e.0.x, e.1.x, f.0.x, f.1.x) && !apart(e.0.y, e.1.y, f.0.y, f.1.y)
}

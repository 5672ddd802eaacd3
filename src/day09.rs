//! Day 9: the red tile floor.
//!
//! The red tiles are the corners of a closed rectilinear polygon. Part one
//! looks for the largest rectangle spanned by two red tiles, part two for the
//! largest one that stays inside the polygon.

use std::io::Write;
use std::str::FromStr;

use anyhow::{ensure, Context, Error, Result};
use itertools::Itertools;
use tracing::debug;

use crate::answer::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let (x, y) = line.split_once(',')
            .with_context(|| format!("point {:?} is not of the form x,y", line))?;
        let x = x.trim().parse().with_context(|| format!("bad x in point {:?}", line))?;
        let y = y.trim().parse().with_context(|| format!("bad y in point {:?}", line))?;
        Ok(Point { x, y })
    }
}

/// Tiles covered by the rectangle with opposite corners `a` and `b`, edges included.
pub fn tile_area(a: Point, b: Point) -> Result<u64> {
    let side = |d: u64| d.checked_add(1);
    side(a.x.abs_diff(b.x))
        .zip(side(a.y.abs_diff(b.y)))
        .and_then(|(w, h)| w.checked_mul(h))
        .with_context(|| format!("area between {:?} and {:?} overflows", a, b))
}

/// `(b - a) × (c - a)`; positive when `c` is left of the ray `a → b`.
/// Computed in `i128`; exact while coordinates stay within half the `i64` range.
fn cross(a: Point, b: Point, c: Point) -> i128 {
    let d = |p: i64, q: i64| i128::from(p) - i128::from(q);
    d(b.x, a.x) * d(c.y, a.y) - d(b.y, a.y) * d(c.x, a.x)
}

/// Whether segments `ab` and `cd` cross at a single point strictly inside both.
/// Touching endpoints and collinear overlaps do not count.
fn crosses(a: Point, b: Point, c: Point, d: Point) -> bool {
    let opposite = |p: i128, q: i128| (p < 0 && q > 0) || (p > 0 && q < 0);
    opposite(cross(a, b, c), cross(a, b, d)) && opposite(cross(c, d, a), cross(c, d, b))
}

#[derive(Debug, Clone)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        ensure!(points.len() >= 3, "a polygon needs at least 3 points, got {}", points.len());
        Ok(Polygon { points })
    }

    pub fn parse(input: &str) -> Result<Self> {
        let points = input.trim().lines()
            .map(|line| line.trim().parse())
            .collect::<Result<Vec<Point>>>()?;
        Polygon::new(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Each edge as `(a, b)`, starting with the closing edge from the last point.
    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let last = self.points[self.points.len() - 1];
        std::iter::once(last).chain(self.points.iter().copied())
            .tuple_windows()
            .map(|(b, a)| (a, b))
    }

    /// Ray casting to the right over half-open edges, so a ray through a
    /// vertex is counted once. A point on a vertex counts as inside.
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if a == p {
                return true;
            }
            if (a.y <= p.y && p.y < b.y) || (b.y <= p.y && p.y < a.y) {
                // is p left of the edge's x at height p.y?
                let d = |p: i64, q: i64| i128::from(p) - i128::from(q);
                let dy = d(b.y, a.y);
                let lhs = d(p.x, a.x) * dy;
                let rhs = d(p.y, a.y) * d(b.x, a.x);
                let left_of_edge = if dy > 0 {lhs < rhs} else {lhs > rhs};
                if left_of_edge {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn crossed_by(&self, c: Point, d: Point) -> bool {
        self.edges().any(|(a, b)| crosses(a, b, c, d))
    }

    /// Whether the rectangle with opposite corners `p` and `q` fits: the other
    /// two corners are inside and no side crosses the boundary.
    pub fn fits_rect(&self, p: Point, q: Point) -> bool {
        let corners = [p, Point::new(q.x, p.y), q, Point::new(p.x, q.y)];
        if !self.contains(corners[1]) || !self.contains(corners[3]) {
            return false;
        }
        corners.iter().circular_tuple_windows().all(|(&c, &d)| !self.crossed_by(c, d))
    }
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let polygon = Polygon::parse(input)?;
    debug!(points = polygon.points().len(), "parsed polygon");

    let mut largest = 0;
    let mut largest_inside = 0;
    for (&a, &b) in polygon.points().iter().tuple_combinations() {
        let area = tile_area(a, b)?;
        largest = largest.max(area);
        if area > largest_inside && polygon.fits_rect(a, b) {
            largest_inside = area;
            writeln!(trace, "best: ({},{}) ({},{}) area={}", a.x, a.y, b.x, b.y, area)?;
        }
    }

    Ok(Answer::both(largest.into(), largest_inside.into()))
}

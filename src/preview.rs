//! SVG preview of the day 9 tile polygon, optionally with a candidate
//! rectangle drawn on top.

use std::fmt::Write;

use anyhow::{bail, ensure, Result};
use arrayvec::ArrayVec;
use regex::Regex;

use crate::day09::Point;

/// Input coordinates are divided by this before drawing.
pub const DEFAULT_SCALE: f64 = 200.0;
const MARGIN: f64 = 5.0;

/// Pull the two opposite corners of a rectangle out of free text such as
/// `best: (9,5) (2,3) area=24`.
pub fn parse_solution(text: &str) -> Result<[Point; 2]> {
    let pair = Regex::new(r"(\d+),\s*(\d+)")?;
    let mut corners = ArrayVec::<Point, 2>::new();
    for m in pair.captures_iter(text) {
        let point = Point::new(m[1].parse()?, m[2].parse()?);
        if corners.try_push(point).is_err() {
            bail!("solution {:?} names more than two points", text);
        }
    }
    match corners.into_inner() {
        Ok(corners) => Ok(corners),
        Err(corners) => bail!("solution {:?} names {} points, expected two", text, corners.len()),
    }
}

/// Render the polygon through `points` (closed) as a standalone SVG document.
pub fn render(points: &[Point], solution: Option<[Point; 2]>, scale: f64) -> Result<String> {
    ensure!(!points.is_empty(), "nothing to draw");
    ensure!(scale > 0.0, "scale must be positive, got {}", scale);

    let scaled = |p: Point| (p.x as f64 / scale, p.y as f64 / scale);
    let (mut min_x, mut min_y) = scaled(points[0]);
    let (mut max_x, mut max_y) = (min_x, min_y);
    for &p in points {
        let (x, y) = scaled(p);
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let place = |p: Point| {
        let (x, y) = scaled(p);
        (x - min_x + MARGIN, y - min_y + MARGIN)
    };

    let (x0, y0) = place(points[0]);
    let mut path = format!("M {:.2} {:.2}", x0, y0);
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (x, y) = place(to);
        match (from.x == to.x, from.y == to.y) {
            (true, _) => write!(path, " V {:.2}", y)?,
            (false, true) => write!(path, " H {:.2}", x)?,
            (false, false) => write!(path, " L {:.2} {:.2}", x, y)?,
        }
    }
    path.push_str(" Z");

    let rect = solution.map(|[a, b]| {
        let (x1, y1) = place(a);
        let (x2, y2) = place(b);
        format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
             fill=\"#0000ff33\" stroke=\"#0000ffaa\" stroke-width=\"1\" />\n",
            x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs(),
        )
    }).unwrap_or_default();

    Ok(format!(
        "<?xml version=\"1.0\" standalone=\"no\"?>\n\
         <svg width=\"{:.2}\" height=\"{:.2}\" xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
         \x20 <path d=\"{}\" fill=\"white\" stroke=\"#00cc00\" />\n\
         {}\
         </svg>\n",
        max_x - min_x + 2.0 * MARGIN, max_y - min_y + 2.0 * MARGIN, path, rect,
    ))
}

//! Filled polygon rasterization via scanline intersection.
//!
//! The intersection sort reuses [`crate::array::quick_sort`] — the same
//! explicit stack-based quicksort used elsewhere in this codebase for
//! exact, allocation-free ordering of small scratch arrays.

use crate::array::quick_sort;
use crate::basics::Point;
use crate::color::Rgba8;
use crate::dirty_rect::{Accumulator, DirtyRect};
use crate::line::draw_line;
use crate::pixel_writer::set_at;
use crate::surface::Surface;

/// Fill the polygon described by `points` (implicitly closed: the edge
/// from the last point back to the first is always included).
///
/// Returns an empty rect anchored at the first point if `points` has
/// fewer than 3 vertices.
pub fn draw_fillpoly(surface: &mut Surface, color: Rgba8, points: &[Point]) -> DirtyRect {
    let mut acc = Accumulator::new();
    if points.len() < 3 {
        let anchor = points.first().copied().unwrap_or_default();
        return acc.finish(anchor.x, anchor.y);
    }

    let miny = points.iter().map(|p| p.y).min().unwrap();
    let maxy = points.iter().map(|p| p.y).max().unwrap();

    if miny == maxy {
        let minx = points.iter().map(|p| p.x).min().unwrap();
        let maxx = points.iter().map(|p| p.x).max().unwrap();
        draw_line(surface, color, Point::new(minx, miny), Point::new(maxx, miny));
        for x in minx..=maxx {
            set_at(surface, &mut acc, x, miny, color);
        }
        return acc.finish(minx, miny);
    }

    let n = points.len();
    let mut xs: Vec<i32> = Vec::new();

    for y in miny..=maxy {
        xs.clear();
        for i in 0..n {
            let a = points[i];
            let b = points[(i + 1) % n];
            if a.y == b.y {
                continue;
            }
            let (p1, p2) = if a.y < b.y { (a, b) } else { (b, a) };
            if (y >= p1.y && y < p2.y) || (y == maxy && p2.y == maxy) {
                let x = (y - p1.y) as i64 * (p2.x - p1.x) as i64 / (p2.y - p1.y) as i64 + p1.x as i64;
                xs.push(x as i32);
            }
        }
        quick_sort(&mut xs, &|a: &i32, b: &i32| a < b);
        let mut pair = xs.chunks_exact(2);
        for chunk in &mut pair {
            draw_line(surface, color, Point::new(chunk[0], y), Point::new(chunk[1], y));
            for x in chunk[0]..=chunk[1] {
                set_at(surface, &mut acc, x, y, color);
            }
        }
    }

    // Horizontal edges strictly between miny and maxy are local extrema the
    // scan step above skips outright; paint them directly so the interior
    // boundary stays closed.
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if a.y == b.y && a.y > miny && a.y < maxy {
            let (lo, hi) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
            for x in lo..=hi {
                set_at(surface, &mut acc, x, a.y, color);
            }
        }
    }

    acc.finish(points[0].x, points[0].y)
}

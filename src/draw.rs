//! Public dispatch layer: validates arguments, normalizes width/closure/
//! quadrant conventions, and maps each public operation onto the
//! primitive rasterizers in [`crate::line`], [`crate::circle`],
//! [`crate::ellipse`], [`crate::arc`], [`crate::polygon`], and
//! [`crate::rounded_rect`].
//!
//! Every function here returns `Result<DirtyRect, RasterError>`. The
//! primitives themselves are total; only argument validation at this
//! boundary can fail.

use crate::arc::{draw_arc, draw_arc_width};
use crate::basics::Point;
use crate::circle::{draw_circle_bresenham, draw_circle_filled, draw_circle_quadrant, QuadrantFlags};
use crate::color::Rgba8;
use crate::dirty_rect::{Accumulator, DirtyRect};
use crate::ellipse::draw_ellipse;
use crate::error::{RasterError, RasterResult};
use crate::line::{draw_aaline, draw_line, draw_line_width};
use crate::polygon::draw_fillpoly;
use crate::rounded_rect::{draw_round_rect, CornerRadii};
use crate::surface::{LockGuard, Surface};

fn merge_into(acc: &mut Accumulator, r: DirtyRect) {
    if r.w > 0 && r.h > 0 {
        acc.add(r.x, r.y);
        acc.add(r.x + r.w as i32 - 1, r.y + r.h as i32 - 1);
    }
}

/// Draw a single antialiased line segment. `start`/`end` are `(x, y)`
/// pairs in floating point, permitting subpixel placement.
pub fn aaline(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    start: (f64, f64),
    end: (f64, f64),
    blend: bool,
) -> RasterResult<DirtyRect> {
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    Ok(draw_aaline(guard.surface(), color, start.into(), end.into(), blend))
}

/// Draw a single line segment, optionally with `width > 1` thickness.
/// `width < 0` draws nothing.
pub fn line(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    start: (i32, i32),
    end: (i32, i32),
    width: i32,
) -> RasterResult<DirtyRect> {
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    let (p1, p2): (Point, Point) = (start.into(), end.into());
    if width < 0 {
        return Ok(DirtyRect::empty_at(p1.x, p1.y));
    }
    let s = guard.surface();
    Ok(if width <= 1 {
        draw_line(s, color, p1, p2)
    } else {
        draw_line_width(s, color, p1, p2, width as u32)
    })
}

/// Draw an antialiased polyline through `points`. `closed` appends a
/// closing segment from the last point back to the first when there are
/// more than two points.
pub fn aalines(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    points: &[(f64, f64)],
    closed: bool,
    blend: bool,
) -> RasterResult<DirtyRect> {
    if points.len() < 2 {
        return Err(RasterError::InvalidPointCount { min: 2, got: points.len() });
    }
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    let mut acc = Accumulator::new();
    let s = guard.surface();
    for w in points.windows(2) {
        merge_into(&mut acc, draw_aaline(s, color, w[0].into(), w[1].into(), blend));
    }
    if closed && points.len() > 2 {
        merge_into(&mut acc, draw_aaline(s, color, points[points.len() - 1].into(), points[0].into(), blend));
    }
    Ok(acc.finish(points[0].0 as i32, points[0].1 as i32))
}

/// Draw a polyline through `points`, optionally closed and/or with
/// `width > 1` thickness.
pub fn lines(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    points: &[(i32, i32)],
    closed: bool,
    width: i32,
) -> RasterResult<DirtyRect> {
    if points.len() < 2 {
        return Err(RasterError::InvalidPointCount { min: 2, got: points.len() });
    }
    let anchor = Point::from(points[0]);
    if width < 0 {
        return Ok(DirtyRect::empty_at(anchor.x, anchor.y));
    }
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    let mut acc = Accumulator::new();
    let s = guard.surface();
    let draw_segment = |s: &mut Surface, a: Point, b: Point| {
        if width <= 1 {
            draw_line(s, color, a, b)
        } else {
            draw_line_width(s, color, a, b, width as u32)
        }
    };
    for w in points.windows(2) {
        merge_into(&mut acc, draw_segment(s, w[0].into(), w[1].into()));
    }
    if closed && points.len() > 2 {
        merge_into(&mut acc, draw_segment(s, Point::from(points[points.len() - 1]), anchor));
    }
    Ok(acc.finish(anchor.x, anchor.y))
}

/// Draw an arc of the ellipse inscribed in `rect` (x, y, w, h), from
/// `start_angle` to `stop_angle` radians, with the given border `width`
/// (clamped to `min(w, h) / 2`; `width < 0` draws nothing).
pub fn arc(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    rect: (i32, i32, i32, i32),
    start_angle: f64,
    stop_angle: f64,
    width: i32,
) -> RasterResult<DirtyRect> {
    let (x, y, w, h) = rect;
    let center = Point::new(x + w / 2, y + h / 2);
    if width < 0 {
        return Ok(DirtyRect::empty_at(center.x, center.y));
    }
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    let rx = (w / 2) as f64;
    let ry = (h / 2) as f64;
    let width = width.clamp(0, (w.min(h)) / 2).max(1) as u32;
    let s = guard.surface();
    Ok(draw_arc_width(s, color, center, rx, ry, start_angle, stop_angle, width))
}

/// Draw the ellipse inscribed in `rect`. `width == 0` fills it;
/// otherwise the outline is drawn at `width` thickness (clamped to
/// `min(w, h) / 2`). `width < 0` draws nothing.
pub fn ellipse(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    rect: (i32, i32, i32, i32),
    width: i32,
) -> RasterResult<DirtyRect> {
    let (x, y, w, h) = rect;
    let center = Point::new(x + w / 2, y + h / 2);
    if width < 0 {
        return Ok(DirtyRect::empty_at(center.x, center.y));
    }
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    let width = width.clamp(0, w.min(h) / 2);
    let s = guard.surface();
    if width == 0 {
        Ok(draw_ellipse(s, color, center, w as u32, h as u32, true))
    } else {
        let mut acc = Accumulator::new();
        for k in 0..width {
            let ww = (w - 2 * k).max(0) as u32;
            let hh = (h - 2 * k).max(0) as u32;
            merge_into(&mut acc, draw_ellipse(s, color, center, ww, hh, false));
        }
        Ok(acc.finish(center.x, center.y))
    }
}

/// Draw a circle of `radius` centered at `center`. `width == 0` fills it;
/// `width == radius` also fills it (degenerate ring that is the whole
/// disk); otherwise an outline ring of `width` thickness is drawn. If any
/// of `quadrants`'s flags are set, only those quadrants are drawn instead
/// of the full circle.
pub fn circle(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    center: (i32, i32),
    radius: i32,
    width: i32,
    quadrants: QuadrantFlags,
) -> RasterResult<DirtyRect> {
    let center = Point::from(center);
    if width < 0 || radius < 1 {
        return Ok(DirtyRect::empty_at(center.x, center.y));
    }
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    let width = width.clamp(0, radius);
    let s = guard.surface();

    Ok(if quadrants.any() {
        draw_circle_quadrant(s, color, center, radius, width, quadrants)
    } else if width == 0 || width == radius {
        draw_circle_filled(s, color, center, radius)
    } else {
        draw_circle_bresenham(s, color, center, radius, width)
    })
}

/// Fill (`width == 0`) or outline (`width > 0`, equivalent to
/// `lines(closed=true, width)`) the polygon described by `points`.
pub fn polygon(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    points: &[(i32, i32)],
    width: i32,
) -> RasterResult<DirtyRect> {
    if points.len() < 3 {
        return Err(RasterError::InvalidPointCount { min: 3, got: points.len() });
    }
    if width < 0 {
        let anchor = Point::from(points[0]);
        return Ok(DirtyRect::empty_at(anchor.x, anchor.y));
    }
    if width > 0 {
        return lines(surface, color, points, true, width);
    }
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    let pts: Vec<Point> = points.iter().map(|&p| Point::from(p)).collect();
    Ok(draw_fillpoly(guard.surface(), color, &pts))
}

/// Draw a rectangle, optionally rounded. Equivalent to a 4-vertex
/// [`polygon`] when `border_radius <= 0` and all `corners` are `<= 0`.
pub fn rect(
    surface: &mut Surface,
    color: (u8, u8, u8, u8),
    rect: (i32, i32, i32, i32),
    width: i32,
    border_radius: i32,
    corners: CornerRadii,
) -> RasterResult<DirtyRect> {
    let (x, y, w, h) = rect;
    if width < 0 {
        return Ok(DirtyRect::empty_at(x, y));
    }
    let no_rounding = border_radius <= 0
        && corners.top_left <= 0
        && corners.top_right <= 0
        && corners.bottom_left <= 0
        && corners.bottom_right <= 0;
    if no_rounding {
        let pts = [(x, y), (x + w - 1, y), (x + w - 1, y + h - 1), (x, y + h - 1)];
        return polygon(surface, color, &pts, width);
    }
    let mut guard = LockGuard::acquire(surface)?;
    let color = Rgba8::new(color.0 as u32, color.1 as u32, color.2 as u32, color.3 as u32);
    let width = width.clamp(0, w.min(h) / 2) as u32;
    Ok(draw_round_rect(guard.surface(), color, x, y, w, h, width, border_radius, corners))
}

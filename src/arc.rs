//! Elliptical arcs, drawn as a chain of aliased line segments between
//! angle-stepped samples.

use crate::basics::{iround, Point};
use crate::color::Rgba8;
use crate::dirty_rect::{Accumulator, DirtyRect};
use crate::line::draw_line_into;
use crate::surface::Surface;

/// Draw an arc of an ellipse with radii `(rx, ry)` centered at `center`,
/// from `angle_start` to `angle_stop` (radians, screen convention: angle 0
/// points right, increasing angle sweeps clockwise on screen since the
/// sample's y term is negated to account for y growing downward).
///
/// The step angle is derived from the radii so that consecutive samples
/// are never more than about two pixels apart on the larger radius; very
/// small radii fall back to a single one-radian step to avoid a runaway
/// sample count.
pub fn draw_arc(
    surface: &mut Surface,
    color: Rgba8,
    center: Point,
    rx: f64,
    ry: f64,
    angle_start: f64,
    angle_stop: f64,
) -> DirtyRect {
    let mut acc = Accumulator::new();

    let mut stop = angle_stop;
    if stop < angle_start {
        stop += std::f64::consts::TAU;
    }

    let step = if rx < 1e-4 || ry < 1e-4 {
        1.0
    } else {
        (2.0 / rx.max(ry)).asin().max(0.05)
    };

    let sample = |a: f64| -> Point {
        Point::new(
            center.x + iround(a.cos() * rx),
            center.y - iround(a.sin() * ry),
        )
    };

    // Feed each segment's actual written pixels into the shared accumulator
    // rather than folding in its collapsed dirty-rect corners: a diagonal
    // segment's bounding-box corners aren't necessarily pixels it wrote, so
    // going through a sub-call's DirtyRect would loosen the tight bound.
    let mut prev = sample(angle_start);
    let mut a = angle_start + step;
    while a < stop {
        let cur = sample(a);
        draw_line_into(surface, &mut acc, color, prev, cur);
        prev = cur;
        a += step;
    }
    let last = sample(stop);
    draw_line_into(surface, &mut acc, color, prev, last);

    acc.finish(sample(angle_start).x, sample(angle_start).y)
}

/// Draw `width` concentric arcs with radii decreasing by one per
/// concentric ring, the outermost using `(rx, ry)`.
pub fn draw_arc_width(
    surface: &mut Surface,
    color: Rgba8,
    center: Point,
    rx: f64,
    ry: f64,
    angle_start: f64,
    angle_stop: f64,
    width: u32,
) -> DirtyRect {
    let mut acc = Accumulator::new();
    let width = width.max(1);
    for k in 0..width {
        let r = draw_arc(surface, color, center, rx - k as f64, ry - k as f64, angle_start, angle_stop);
        if r.w > 0 || r.h > 0 {
            acc.add(r.x, r.y);
            acc.add(r.x + r.w as i32 - 1, r.y + r.h as i32 - 1);
        }
    }
    acc.finish(center.x, center.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormatKind;

    fn white_surface(w: u32, h: u32) -> Surface {
        Surface::new(w, h, PixelFormatKind::Rgba32).unwrap()
    }

    #[test]
    fn test_quarter_arc_touches_endpoints() {
        let mut s = white_surface(40, 40);
        let color = Rgba8::new_opaque(255, 255, 255);
        draw_arc(&mut s, color, Point::new(20, 20), 10.0, 10.0, 0.0, std::f64::consts::FRAC_PI_2);
        assert_eq!(s.get_pixel_rgba(30, 20), Some((255, 255, 255, 255)));
        assert_eq!(s.get_pixel_rgba(20, 10), Some((255, 255, 255, 255)));
    }

    #[test]
    fn test_wraparound_when_stop_before_start() {
        let mut s = white_surface(40, 40);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_arc(&mut s, color, Point::new(20, 20), 10.0, 10.0, 1.0, 0.5);
        assert!(r.w > 0 && r.h > 0);
    }

    #[test]
    fn test_tiny_radius_uses_fallback_step() {
        let mut s = white_surface(10, 10);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_arc(&mut s, color, Point::new(5, 5), 1e-5, 1e-5, 0.0, 1.0);
        assert!(r.w >= 1 && r.h >= 1);
    }

    #[test]
    fn test_width_draws_concentric_rings() {
        let mut s = white_surface(40, 40);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_arc_width(&mut s, color, Point::new(20, 20), 10.0, 10.0, 0.0, std::f64::consts::PI, 3);
        assert!(r.h >= 3);
    }
}

//! Rounded rectangles: composed from a filled octagon plus four corner
//! quadrants (filled), or four thick border lines plus four thick corner
//! quadrant arcs (outlined).
//!
//! Reuses [`crate::polygon::draw_fillpoly`], [`crate::line::draw_line_width`],
//! and [`crate::circle::draw_circle_quadrant`] rather than rasterizing the
//! corners from scratch.

use crate::basics::Point;
use crate::circle::{draw_circle_quadrant, QuadrantFlags};
use crate::color::Rgba8;
use crate::dirty_rect::{Accumulator, DirtyRect};
use crate::line::draw_line_width;
use crate::polygon::draw_fillpoly;
use crate::surface::Surface;

/// Per-corner radii. A negative value means "use the rectangle's global
/// `radius`".
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerRadii {
    pub top_left: i32,
    pub top_right: i32,
    pub bottom_left: i32,
    pub bottom_right: i32,
}

fn resolve_radii(w: i32, h: i32, radius: i32, corners: CornerRadii) -> (i32, i32, i32, i32) {
    let default = radius.max(0);
    let mut tl = if corners.top_left < 0 { default } else { corners.top_left };
    let mut tr = if corners.top_right < 0 { default } else { corners.top_right };
    let mut bl = if corners.bottom_left < 0 { default } else { corners.bottom_left };
    let mut br = if corners.bottom_right < 0 { default } else { corners.bottom_right };

    let mut ratio = 1.0f64;
    let top = tl + tr;
    let bottom = bl + br;
    let left = tl + bl;
    let right = tr + br;
    if top > w && top > 0 {
        ratio = ratio.min(w as f64 / top as f64);
    }
    if bottom > w && bottom > 0 {
        ratio = ratio.min(w as f64 / bottom as f64);
    }
    if left > h && left > 0 {
        ratio = ratio.min(h as f64 / left as f64);
    }
    if right > h && right > 0 {
        ratio = ratio.min(h as f64 / right as f64);
    }
    if ratio < 1.0 {
        tl = (tl as f64 * ratio) as i32;
        tr = (tr as f64 * ratio) as i32;
        bl = (bl as f64 * ratio) as i32;
        br = (br as f64 * ratio) as i32;
    }
    (tl, tr, bl, br)
}

/// Draw one straight border segment between two adjacent corner arcs.
///
/// When the corner radii on this side are large enough that the two
/// endpoints coincide or cross, there is no straight run left to draw
/// between the arcs; bridge the gap with a `width`-thick stroke
/// perpendicular to the side, centered where the segment would have run.
fn draw_border_segment(
    surface: &mut Surface,
    color: Rgba8,
    p1: Point,
    p2: Point,
    width: u32,
    horizontal: bool,
) -> DirtyRect {
    let degenerate = if horizontal { p1.x >= p2.x } else { p1.y >= p2.y };
    if !degenerate {
        return draw_line_width(surface, color, p1, p2, width);
    }
    let w = width as i32;
    let half = w / 2;
    if horizontal {
        let mid_x = (p1.x + p2.x) / 2;
        draw_line_width(surface, color, Point::new(mid_x, p1.y - half), Point::new(mid_x, p1.y - half + w - 1), width)
    } else {
        let mid_y = (p1.y + p2.y) / 2;
        draw_line_width(surface, color, Point::new(p1.x - half, mid_y), Point::new(p1.x - half + w - 1, mid_y), width)
    }
}

/// Draw a rounded rectangle at `(x, y)` sized `w` x `h`. `width == 0` fills
/// the rectangle; otherwise an outline of that border thickness is drawn.
/// `radius` is the default corner radius; `corners` overrides individual
/// corners (negative entries fall back to `radius`).
pub fn draw_round_rect(
    surface: &mut Surface,
    color: Rgba8,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    width: u32,
    radius: i32,
    corners: CornerRadii,
) -> DirtyRect {
    let mut acc = Accumulator::new();
    if w <= 0 || h <= 0 {
        return acc.finish(x, y);
    }
    let (tl, tr, bl, br) = resolve_radii(w, h, radius, corners);
    let x2 = x + w - 1;
    let y2 = y + h - 1;

    let mut merge = |r: DirtyRect| {
        if r.w > 0 && r.h > 0 {
            acc.add(r.x, r.y);
            acc.add(r.x + r.w as i32 - 1, r.y + r.h as i32 - 1);
        }
    };

    if width == 0 {
        let pts = [
            Point::new(x + tl, y),
            Point::new(x2 - tr, y),
            Point::new(x2, y + tr),
            Point::new(x2, y2 - br),
            Point::new(x2 - br, y2),
            Point::new(x + bl, y2),
            Point::new(x, y2 - bl),
            Point::new(x, y + tl),
        ];
        merge(draw_fillpoly(surface, color, &pts));

        if tl > 0 {
            merge(draw_circle_quadrant(
                surface,
                color,
                Point::new(x + tl, y + tl),
                tl,
                0,
                QuadrantFlags { top_left: true, ..Default::default() },
            ));
        }
        if tr > 0 {
            merge(draw_circle_quadrant(
                surface,
                color,
                Point::new(x2 - tr, y + tr),
                tr,
                0,
                QuadrantFlags { top_right: true, ..Default::default() },
            ));
        }
        if bl > 0 {
            merge(draw_circle_quadrant(
                surface,
                color,
                Point::new(x + bl, y2 - bl),
                bl,
                0,
                QuadrantFlags { bottom_left: true, ..Default::default() },
            ));
        }
        if br > 0 {
            merge(draw_circle_quadrant(
                surface,
                color,
                Point::new(x2 - br, y2 - br),
                br,
                0,
                QuadrantFlags { bottom_right: true, ..Default::default() },
            ));
        }
    } else {
        let offset = (width as i32) / 2 - 1 + (width as i32 % 2);

        merge(draw_border_segment(
            surface,
            color,
            Point::new(x + tl, y + offset),
            Point::new(x2 - tr, y + offset),
            width,
            true,
        ));
        merge(draw_border_segment(
            surface,
            color,
            Point::new(x + offset, y + tl),
            Point::new(x + offset, y2 - bl),
            width,
            false,
        ));
        merge(draw_border_segment(
            surface,
            color,
            Point::new(x + bl, y2 - offset),
            Point::new(x2 - br, y2 - offset),
            width,
            true,
        ));
        merge(draw_border_segment(
            surface,
            color,
            Point::new(x2 - offset, y + tr),
            Point::new(x2 - offset, y2 - br),
            width,
            false,
        ));

        let width_i = width as i32;
        if tl > 0 {
            merge(draw_circle_quadrant(
                surface,
                color,
                Point::new(x + tl, y + tl),
                tl,
                width_i,
                QuadrantFlags { top_left: true, ..Default::default() },
            ));
        }
        if tr > 0 {
            merge(draw_circle_quadrant(
                surface,
                color,
                Point::new(x2 - tr, y + tr),
                tr,
                width_i,
                QuadrantFlags { top_right: true, ..Default::default() },
            ));
        }
        if bl > 0 {
            merge(draw_circle_quadrant(
                surface,
                color,
                Point::new(x + bl, y2 - bl),
                bl,
                width_i,
                QuadrantFlags { bottom_left: true, ..Default::default() },
            ));
        }
        if br > 0 {
            merge(draw_circle_quadrant(
                surface,
                color,
                Point::new(x2 - br, y2 - br),
                br,
                width_i,
                QuadrantFlags { bottom_right: true, ..Default::default() },
            ));
        }
    }

    acc.finish(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormatKind;

    fn white_surface(w: u32, h: u32) -> Surface {
        Surface::new(w, h, PixelFormatKind::Rgba32).unwrap()
    }

    #[test]
    fn test_zero_radius_corners_black_filled_white() {
        let mut s = white_surface(30, 30);
        let color = Rgba8::new_opaque(255, 255, 255);
        draw_round_rect(&mut s, color, 0, 0, 20, 20, 0, 5, CornerRadii::default());
        assert_eq!(s.get_pixel_rgba(0, 0), Some((0, 0, 0, 0)));
        assert_eq!(s.get_pixel_rgba(5, 0), Some((255, 255, 255, 255)));
        assert_eq!(s.get_pixel_rgba(10, 10), Some((255, 255, 255, 255)));
    }

    #[test]
    fn test_radii_rescaled_when_too_large() {
        let mut s = white_surface(30, 30);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_round_rect(&mut s, color, 0, 0, 10, 10, 0, 100, CornerRadii::default());
        assert!(r.w <= 10 && r.h <= 10);
    }

    #[test]
    fn test_outlined_round_rect_interior_untouched() {
        let mut s = white_surface(40, 40);
        let color = Rgba8::new_opaque(255, 255, 255);
        draw_round_rect(&mut s, color, 5, 5, 20, 20, 2, 4, CornerRadii::default());
        assert_eq!(s.get_pixel_rgba(15, 15), Some((0, 0, 0, 0)));
    }

    #[test]
    fn test_degenerate_dimensions_empty() {
        let mut s = white_surface(10, 10);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_round_rect(&mut s, color, 2, 2, 0, 5, 0, 1, CornerRadii::default());
        assert_eq!(r, DirtyRect::empty_at(2, 2));
    }
}

//! Ellipses: solid fill and outline, sharing one boundary walk.
//!
//! Reuses [`crate::ellipse_bresenham::EllipseBresenhamInterpolator`] (the
//! quarter-ellipse discrete stepper) to find, for each row offset from the
//! vertical center, the rightmost boundary column — then mirrors that
//! column into all four quadrants, either as a filled span or as the two
//! boundary pixels of an outline.

use crate::basics::Point;
use crate::color::Rgba8;
use crate::dirty_rect::{Accumulator, DirtyRect};
use crate::ellipse_bresenham::EllipseBresenhamInterpolator;
use crate::pixel_writer::set_at;
use crate::surface::Surface;

/// Draw an ellipse whose bounding box is `width` x `height`, centered at
/// `center`. `solid` selects a filled disk; otherwise only the boundary is
/// drawn. Even dimensions shift the far (right/bottom) edge in by one
/// pixel relative to the near edge, so the total pixel extent matches
/// `width`/`height` exactly with no single center column/row to mirror
/// around.
pub fn draw_ellipse(
    surface: &mut Surface,
    color: Rgba8,
    center: Point,
    width: u32,
    height: u32,
    solid: bool,
) -> DirtyRect {
    let mut acc = Accumulator::new();
    let rx = (width / 2) as i32;
    let ry = (height / 2) as i32;
    let cx = center.x;
    let cy = center.y;
    let xoff = i32::from(width % 2 == 0);
    let yoff = i32::from(height % 2 == 0);

    if rx == 0 && ry == 0 {
        set_at(surface, &mut acc, cx, cy, color);
        return acc.finish(cx, cy);
    }
    if rx == 0 {
        for y in (cy - ry)..=(cy + ry - yoff) {
            set_at(surface, &mut acc, cx, y, color);
        }
        return acc.finish(cx, cy);
    }
    if ry == 0 {
        for x in (cx - rx)..=(cx + rx - xoff) {
            set_at(surface, &mut acc, x, cy, color);
        }
        return acc.finish(cx, cy);
    }

    // max_x_at[d] is the rightmost boundary column at vertical distance d
    // from the center row, measured from the interpolator's own origin.
    let mut max_x_at = vec![0i32; (ry + 1) as usize];
    let mut interp = EllipseBresenhamInterpolator::new(rx, ry);
    let mut dx = 0i32;
    let mut dy = -ry;
    loop {
        let idx = (dy + ry) as usize;
        if dx > max_x_at[idx] {
            max_x_at[idx] = dx;
        }
        if dy >= 0 {
            break;
        }
        interp.next();
        dx += interp.dx();
        dy += interp.dy();
    }

    let mut paint_row = |acc: &mut Accumulator, y: i32, extent: i32| {
        if solid {
            for x in (cx - extent)..=(cx + extent - xoff) {
                set_at(surface, acc, x, y, color);
            }
        } else {
            set_at(surface, acc, cx - extent, y, color);
            set_at(surface, acc, cx + extent - xoff, y, color);
        }
    };

    for d in 0..=ry {
        let extent = max_x_at[(ry - d) as usize];
        paint_row(&mut acc, cy - d, extent);
    }
    for d in 1..=(ry - yoff) {
        let extent = max_x_at[(ry - d) as usize];
        paint_row(&mut acc, cy + d, extent);
    }

    acc.finish(cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormatKind;

    fn white_surface(w: u32, h: u32) -> Surface {
        Surface::new(w, h, PixelFormatKind::Rgba32).unwrap()
    }

    #[test]
    fn test_degenerate_single_pixel() {
        let mut s = white_surface(10, 10);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_ellipse(&mut s, color, Point::new(5, 5), 0, 0, true);
        assert_eq!(r, DirtyRect { x: 5, y: 5, w: 1, h: 1 });
    }

    #[test]
    fn test_degenerate_vertical_line() {
        let mut s = white_surface(10, 10);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_ellipse(&mut s, color, Point::new(5, 5), 0, 6, true);
        assert_eq!(r.w, 1);
        assert_eq!(r.h, 6);
    }

    #[test]
    fn test_degenerate_horizontal_line() {
        let mut s = white_surface(10, 10);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_ellipse(&mut s, color, Point::new(5, 5), 7, 0, true);
        assert_eq!(r.h, 1);
        assert_eq!(r.w, 7);
    }

    #[test]
    fn test_solid_ellipse_dirty_rect_matches_bounding_box() {
        let mut s = white_surface(40, 40);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_ellipse(&mut s, color, Point::new(20, 20), 16, 10, true);
        assert_eq!(r.w, 16);
        assert_eq!(r.h, 10);
    }

    #[test]
    fn test_solid_ellipse_center_filled() {
        let mut s = white_surface(40, 40);
        let color = Rgba8::new_opaque(255, 255, 255);
        draw_ellipse(&mut s, color, Point::new(20, 20), 16, 10, true);
        assert_eq!(s.get_pixel_rgba(20, 20), Some((255, 255, 255, 255)));
    }

    #[test]
    fn test_outline_ellipse_center_empty() {
        let mut s = white_surface(40, 40);
        let color = Rgba8::new_opaque(255, 255, 255);
        draw_ellipse(&mut s, color, Point::new(20, 20), 16, 10, false);
        assert_eq!(s.get_pixel_rgba(20, 20), Some((0, 0, 0, 0)));
    }

    #[test]
    fn test_odd_dimensions_dirty_rect() {
        let mut s = white_surface(40, 40);
        let color = Rgba8::new_opaque(255, 255, 255);
        let r = draw_ellipse(&mut s, color, Point::new(20, 20), 15, 9, true);
        assert_eq!(r.w, 15);
        assert_eq!(r.h, 9);
    }
}

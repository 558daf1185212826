//! Straight lines: aliased (integer Bresenham), antialiased (Wu), and
//! fixed-width (parallel offset copies of the aliased line).

use crate::basics::{ifloor, Point, PointF};
use crate::color::Rgba8;
use crate::dirty_rect::{Accumulator, DirtyRect};
use crate::pixel_writer::{blended, set_at};
use crate::surface::Surface;

/// Draw an aliased line from `p1` to `p2`, both endpoints inclusive.
///
/// Fast paths for a single point, a horizontal run, and a vertical run are
/// really just specializations of the general Bresenham loop below (a zero
/// minor-axis delta never flips the error sign), but are worth naming since
/// they are the common case in practice.
pub fn draw_line(surface: &mut Surface, color: Rgba8, p1: Point, p2: Point) -> DirtyRect {
    let mut acc = Accumulator::new();
    draw_line_into(surface, &mut acc, color, p1, p2);
    acc.finish(p1.x, p1.y)
}

pub(crate) fn draw_line_into(surface: &mut Surface, acc: &mut Accumulator, color: Rgba8, p1: Point, p2: Point) {
    if p1.x == p2.x && p1.y == p2.y {
        set_at(surface, acc, p1.x, p1.y, color);
        return;
    }
    if p1.y == p2.y {
        let (lo, hi) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
        for x in lo..=hi {
            set_at(surface, acc, x, p1.y, color);
        }
        return;
    }
    if p1.x == p2.x {
        let (lo, hi) = if p1.y <= p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
        for y in lo..=hi {
            set_at(surface, acc, p1.x, y, color);
        }
        return;
    }

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let adx = dx.abs();
    let ady = dy.abs();
    let sx = if dx >= 0 { 1 } else { -1 };
    let sy = if dy >= 0 { 1 } else { -1 };

    let (mut x, mut y) = (p1.x, p1.y);
    if adx >= ady {
        let mut err = adx / 2;
        loop {
            set_at(surface, acc, x, y, color);
            if x == p2.x {
                break;
            }
            x += sx;
            err -= ady;
            if err < 0 {
                y += sy;
                err += adx;
            }
        }
    } else {
        let mut err = ady / 2;
        loop {
            set_at(surface, acc, x, y, color);
            if y == p2.y {
                break;
            }
            y += sy;
            err -= adx;
            if err < 0 {
                x += sx;
                err += ady;
            }
        }
    }
}

/// Draw an antialiased line from `p1` to `p2` using Wu's algorithm.
///
/// Endpoints are floating point so the line can be positioned at subpixel
/// precision. `blend` selects whether each of the two pixels per column (or
/// row, for steep lines) is alpha-blended against the existing background
/// (`true`) or written at full coverage scaled only by intensity (`false`,
/// i.e. composited over whatever is already in the surface using the
/// computed coverage as the sole alpha).
pub fn draw_aaline(surface: &mut Surface, color: Rgba8, p1: PointF, p2: PointF, blend: bool) -> DirtyRect {
    let mut acc = Accumulator::new();
    let anchor = Point::new(ifloor(p1.x), ifloor(p1.y));
    draw_aaline_into(surface, &mut acc, color, p1, p2, blend);
    acc.finish(anchor.x, anchor.y)
}

fn plot(surface: &mut Surface, acc: &mut Accumulator, x: i32, y: i32, color: Rgba8, intensity: f64, blend: bool) {
    let brightness = intensity.clamp(0.0, 1.0);
    if blend {
        // Read the background and mix it with the source by `brightness`,
        // then overwrite — the background contribution is already folded in,
        // so this is a full write rather than a second blend against itself.
        let cover = (brightness * 255.0 + 0.5) as u8;
        blended(surface, acc, x, y, color, cover);
    } else {
        // No background read: attenuate the source channels directly and
        // write the result at full coverage.
        let scaled = Rgba8::new(
            (color.r as f64 * brightness) as u32,
            (color.g as f64 * brightness) as u32,
            (color.b as f64 * brightness) as u32,
            color.a as u32,
        );
        set_at(surface, acc, x, y, scaled);
    }
}

fn draw_aaline_into(
    surface: &mut Surface,
    acc: &mut Accumulator,
    color: Rgba8,
    p1: PointF,
    p2: PointF,
    blend: bool,
) {
    let steep = (p2.y - p1.y).abs() > (p2.x - p1.x).abs();

    let (mut x0, mut y0, mut x1, mut y1) = if steep {
        (p1.y, p1.x, p2.y, p2.x)
    } else {
        (p1.x, p1.y, p2.x, p2.y)
    };
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let x_start = x0.floor();
    let x_end = x1.floor();
    let to_y = ifloor(y1);

    let mut intersect_y = y0 + gradient * (x_start + 0.5 - x0);

    let mut xi = x_start as i32;
    let x_end_i = x_end as i32;
    loop {
        let y_floor = ifloor(intersect_y);
        let frac = intersect_y - y_floor as f64;
        let (px0, py0, px1, py1) = if steep {
            (y_floor, xi, y_floor + 1, xi)
        } else {
            (xi, y_floor, xi, y_floor + 1)
        };
        plot(surface, acc, px0, py0, color, 1.0 - frac, blend);

        let is_last_column = xi == x_end_i;
        let suppress_fringe = y_floor >= to_y && !is_last_column;
        if !suppress_fringe {
            plot(surface, acc, px1, py1, color, frac, blend);
        }

        if xi == x_end_i {
            break;
        }
        xi += 1;
        intersect_y += gradient;
    }
}

/// Draw a line of fixed integer `width`, thickening perpendicular to the
/// dominant axis. `width == 0` or negative draws nothing; `width == 1` is
/// identical to [`draw_line`].
///
/// The offset schedule is deliberately asymmetric: for `loop_idx = 1, 3,
/// 5, ...` less than `width`, a copy is drawn shifted by `+(loop_idx/2+1)`,
/// and if `loop_idx + 1 < width` a second copy is drawn shifted by
/// `-(loop_idx/2+1)`. An even width therefore grows one pixel further on
/// the positive side than the negative side.
pub fn draw_line_width(surface: &mut Surface, color: Rgba8, p1: Point, p2: Point, width: u32) -> DirtyRect {
    let mut acc = Accumulator::new();
    if width == 0 {
        return acc.finish(p1.x, p1.y);
    }
    draw_line_into(surface, &mut acc, color, p1, p2);
    if width > 1 {
        let thicken_y = (p2.x - p1.x).abs() > (p2.y - p1.y).abs();
        let mut loop_idx: u32 = 1;
        while loop_idx < width {
            let shift = (loop_idx / 2 + 1) as i32;
            let (off1_a, off1_b) = if thicken_y {
                (Point::new(p1.x, p1.y + shift), Point::new(p2.x, p2.y + shift))
            } else {
                (Point::new(p1.x + shift, p1.y), Point::new(p2.x + shift, p2.y))
            };
            draw_line_into(surface, &mut acc, color, off1_a, off1_b);

            if loop_idx + 1 < width {
                let (off2_a, off2_b) = if thicken_y {
                    (Point::new(p1.x, p1.y - shift), Point::new(p2.x, p2.y - shift))
                } else {
                    (Point::new(p1.x - shift, p1.y), Point::new(p2.x - shift, p2.y))
                };
                draw_line_into(surface, &mut acc, color, off2_a, off2_b);
            }
            loop_idx += 2;
        }
    }
    acc.finish(p1.x, p1.y)
}

//! The single choke point every rasterizer writes through: clip-checked
//! pixel placement and alpha blending.
//!
//! Grounded on the inbox-then-blend idiom in `renderer_base.rs`
//! (`inbox` guards `copy_pixel`/`blend_pixel`), collapsed here to the two
//! operations the spec's primitives actually need and wired straight into
//! a [`Accumulator`] so every caller gets its dirty rect for free.

use crate::color::Rgba8;
use crate::dirty_rect::Accumulator;
use crate::surface::Surface;

/// Write `color` at `(x, y)` if it falls inside the surface's clip
/// rectangle, folding the write into `acc`. Returns `true` if the pixel
/// was written.
///
/// This is the only function in the crate that calls
/// [`Surface::write_pixel_unchecked`] directly for an opaque write.
pub fn set_at(surface: &mut Surface, acc: &mut Accumulator, x: i32, y: i32, color: Rgba8) -> bool {
    if !surface.in_clip(x, y) {
        return false;
    }
    let packed = surface.map_rgba(color.r, color.g, color.b, color.a);
    surface.write_pixel_unchecked(x, y, packed);
    acc.add(x, y);
    true
}

/// Blend `color` over the existing pixel at `(x, y)` scaled by `cover`
/// (0..=255), if it falls inside the clip rectangle. `cover` folds both
/// the antialiasing coverage and the color's own alpha: the effective
/// blend factor is `mult_cover(color.a, cover)`.
///
/// Returns `true` if the pixel was touched (even when `cover == 0`, since
/// the spec treats a zero-coverage write as a no-op that still lies
/// within the drawn region for dirty-rect purposes is left to the caller —
/// here a zero-cover blend is skipped entirely and does not count as
/// touched, matching `blend_pixel`'s behavior of not bothering to write
/// a fully transparent contribution).
pub fn blended(
    surface: &mut Surface,
    acc: &mut Accumulator,
    x: i32,
    y: i32,
    color: Rgba8,
    cover: u8,
) -> bool {
    if !surface.in_clip(x, y) {
        return false;
    }
    let alpha = Rgba8::mult_cover(color.a, cover);
    if alpha == 0 {
        return false;
    }
    if alpha == 255 {
        let packed = surface.map_rgba(color.r, color.g, color.b, 255);
        surface.write_pixel_unchecked(x, y, packed);
    } else {
        let existing = surface.read_pixel_unchecked(x, y);
        let (dr, dg, db, da) = surface.get_rgba(existing);
        let r = Rgba8::lerp(dr, color.r, alpha);
        let g = Rgba8::lerp(dg, color.g, alpha);
        let b = Rgba8::lerp(db, color.b, alpha);
        let a = da.saturating_add(Rgba8::mult_cover(255u8.saturating_sub(da), alpha));
        let packed = surface.map_rgba(r, g, b, a);
        surface.write_pixel_unchecked(x, y, packed);
    }
    acc.add(x, y);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormatKind;

    #[test]
    fn test_set_at_inside_clip() {
        let mut s = Surface::new(4, 4, PixelFormatKind::Rgba32).unwrap();
        let mut acc = Accumulator::new();
        assert!(set_at(&mut s, &mut acc, 1, 1, Rgba8::new_opaque(10, 20, 30)));
        assert_eq!(s.get_pixel_rgba(1, 1), Some((10, 20, 30, 255)));
        assert!(acc.touched());
    }

    #[test]
    fn test_set_at_outside_clip_noop() {
        let mut s = Surface::new(4, 4, PixelFormatKind::Rgba32).unwrap();
        s.set_clip_rect(0, 0, 2, 2);
        let mut acc = Accumulator::new();
        assert!(!set_at(&mut s, &mut acc, 3, 3, Rgba8::new_opaque(1, 2, 3)));
        assert!(!acc.touched());
        assert_eq!(s.get_pixel_rgba(3, 3), None);
    }

    #[test]
    fn test_blended_full_cover_overwrites() {
        let mut s = Surface::new(4, 4, PixelFormatKind::Rgba32).unwrap();
        let mut acc = Accumulator::new();
        assert!(blended(&mut s, &mut acc, 0, 0, Rgba8::new_opaque(200, 0, 0), 255));
        assert_eq!(s.get_pixel_rgba(0, 0), Some((200, 0, 0, 255)));
    }

    #[test]
    fn test_blended_zero_cover_is_noop() {
        let mut s = Surface::new(4, 4, PixelFormatKind::Rgba32).unwrap();
        let mut acc = Accumulator::new();
        assert!(!blended(&mut s, &mut acc, 0, 0, Rgba8::new_opaque(200, 0, 0), 0));
        assert!(!acc.touched());
        assert_eq!(s.get_pixel_rgba(0, 0), Some((0, 0, 0, 0)));
    }

    #[test]
    fn test_blended_partial_cover_mixes_with_background() {
        let mut s = Surface::new(4, 4, PixelFormatKind::Rgba32).unwrap();
        let mut acc = Accumulator::new();
        set_at(&mut s, &mut acc, 0, 0, Rgba8::new_opaque(0, 0, 0));
        blended(&mut s, &mut acc, 0, 0, Rgba8::new_opaque(255, 255, 255), 128);
        let (r, g, b, _a) = s.get_pixel_rgba(0, 0).unwrap();
        assert!(r > 100 && r < 160);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_blended_outside_clip_noop() {
        let mut s = Surface::new(4, 4, PixelFormatKind::Rgba32).unwrap();
        s.set_clip_rect(0, 0, 2, 2);
        let mut acc = Accumulator::new();
        assert!(!blended(&mut s, &mut acc, 3, 3, Rgba8::new_opaque(1, 2, 3), 200));
        assert!(!acc.touched());
    }
}

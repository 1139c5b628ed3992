//! Alpha-regulated blending and glyph colorization.

use crate::color::Rgba;
use crate::transform::gamma::to_linear;

/// Single-channel alpha-regulated multiply blend:
/// `src*dst + src*inv_dst_alpha + dst*inv_src_alpha`.
///
/// Inputs are unconstrained floats; callers pass channel values and the
/// precomputed alpha complements.
#[inline]
pub fn multiply_one(src: f32, dst: f32, inv_dst_alpha: f32, inv_src_alpha: f32) -> f32 {
    src * dst + src * inv_dst_alpha + dst * inv_src_alpha
}

/// Blend `src` into `dst` channel-wise with the multiply blend.
///
/// Source alpha is consumed into the blend rather than propagated: the
/// result always keeps `dst.a`. This is what tints a glyph bitmap toward
/// a target color.
pub fn multiply(src: Rgba, dst: Rgba) -> Rgba {
    let inv_src_alpha = 1.0 - src.a;
    let inv_dst_alpha = 1.0 - dst.a;
    Rgba {
        r: multiply_one(src.r, dst.r, inv_dst_alpha, inv_src_alpha),
        g: multiply_one(src.g, dst.g, inv_dst_alpha, inv_src_alpha),
        b: multiply_one(src.b, dst.b, inv_dst_alpha, inv_src_alpha),
        a: dst.a,
    }
}

/// Composite rasterized glyph coverage over a background in the desired
/// foreground color.
///
/// The glyph is run through [`to_linear`] first, then each of r,g,b
/// drives its own foreground/background lerp. In sub-pixel anti-aliasing
/// the three channels carry independent per-subpixel coverage, so no
/// single alpha could drive the blend; the output alpha is the
/// linearized glyph alpha, i.e. coverage rather than composited opacity.
pub fn colorize(glyph: Rgba, color: Rgba, background: Rgba) -> Rgba {
    let glyph = to_linear(glyph);
    Rgba {
        r: glyph.r * color.r + (1.0 - glyph.r) * background.r,
        g: glyph.g * color.g + (1.0 - glyph.g) * background.g,
        b: glyph.b * color.b + (1.0 - glyph.b) * background.b,
        a: glyph.a,
    }
}

//! Gamma transfer functions.
//!
//! Two families live here: the cheap power-law approximation used by the
//! per-fragment glyph path, and the exact IEC 61966-2-1 piecewise sRGB
//! transfer used when decoding 8-bit palette and config colors.

use crate::color::Rgba;

/// Exponent of the power-law gamma approximation.
pub const GAMMA: f32 = 2.2;

/// Raise each of the four channels to the power `1/2.2`.
///
/// NAMING: `to_linear`/`from_linear` are inverted relative to
/// conventional transfer-function terminology; this function applies the
/// *decoding* exponent `1/2.2`. The pair is a matched set
/// (`to_linear(from_linear(v)) == v`) and `colorize` depends on this
/// exact direction, so renaming one without the other changes rendering
/// output.
///
/// `powf` on a negative base yields NaN, which propagates instead of
/// being clamped; callers guarantee channels ≥ 0.
pub fn to_linear(v: Rgba) -> Rgba {
    v.map(|c| c.powf(1.0 / GAMMA))
}

/// Raise each of the four channels to the power `2.2`.
///
/// See [`to_linear`] for the naming caveat.
pub fn from_linear(v: Rgba) -> Rgba {
    v.map(|c| c.powf(GAMMA))
}

/// sRGB transfer per IEC 61966-2-1, encoded → linear.
///
/// ```text
/// V <= 0.04045 → V / 12.92
/// V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
/// ```
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer per IEC 61966-2-1, linear → encoded.
///
/// ```text
/// L <= 0.0031308 → L × 12.92
/// L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

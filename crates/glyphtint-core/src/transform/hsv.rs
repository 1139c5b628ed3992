//! RGB↔HSV conversion matching the fragment-shader contract, plus the
//! multiplicative HSV adjustment applied to foreground text.
//!
//! Hue is expressed in turns (`[0, 1]` is one trip around the wheel),
//! matching the shader rather than the usual 0–360 degrees.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Stabilizes the hue and saturation divisions when chroma is ~0.
const EPSILON: f32 = 1e-10;

/// GLSL `fract`: `x - floor(x)`, always in `[0, 1)`.
///
/// Not `f32::fract`, which truncates toward zero and goes negative for
/// negative input.
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Convert RGB to HSV, all components in `[0, 1]`.
///
/// This is the branchless shader formulation with the `step`/`mix`
/// predication rewritten as plain conditionals (no warp divergence to
/// avoid on a CPU). The conditional polarity replicates
/// `mix(a, b, step(edge, x))`: `b` is selected when `x >= edge`.
///
/// Achromatic input has chroma ~0; the epsilon keeps hue and saturation
/// finite instead of dividing by zero, so grays come back with a
/// degenerate but well-defined hue.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;

    // K = (0, -1/3, 2/3, -1)
    // p = mix((b, g, K.w, K.z), (g, b, K.x, K.y), step(b, g))
    let p = if g >= b {
        [g, b, 0.0, -1.0 / 3.0]
    } else {
        [b, g, -1.0, 2.0 / 3.0]
    };

    // q = mix((p.x, p.y, p.w, r), (r, p.y, p.z, p.x), step(p.x, r))
    let q = if r >= p[0] {
        [r, p[1], p[2], p[0]]
    } else {
        [p[0], p[1], p[3], r]
    };

    let d = q[0] - q[3].min(q[1]);
    let h = (q[2] + (q[3] - q[1]) / (6.0 * d + EPSILON)).abs();
    let s = d / (q[0] + EPSILON);
    [h, s, q[0]]
}

/// Convert HSV to RGB, hue in turns.
///
/// Out-of-range hue wraps via `fract`, so scaled hues from
/// [`HsvTransform::apply`] stay well-defined.
pub fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;

    // K = (1, 2/3, 1/3, 3); channel c is v * mix(1, clamp(|fract(h + K_c)*6 - 3| - 1, 0, 1), s)
    let channel = |offset: f32| {
        let p = (fract(h + offset) * 6.0 - 3.0).abs();
        let ramp = (p - 1.0).clamp(0.0, 1.0);
        v * (1.0 - s + ramp * s)
    };
    [channel(1.0), channel(2.0 / 3.0), channel(1.0 / 3.0)]
}

/// Multiplicative HSV adjustment broadcast to every fragment of a draw
/// call (the renderer's `foreground_text_hsb` setting).
///
/// Each factor scales the corresponding computed HSV component. All
/// fields default to 1.0 so a config can name any subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HsvTransform {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Default for HsvTransform {
    fn default() -> Self {
        Self {
            hue: 1.0,
            saturation: 1.0,
            brightness: 1.0,
        }
    }
}

impl HsvTransform {
    /// True when all three factors are exactly 1.0. Exact comparison, no
    /// epsilon: the short-circuit in [`HsvTransform::apply`] must return
    /// its input bit-for-bit.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Scale `color`'s HSV components by the transform's factors.
    ///
    /// The identity transform returns `color` unchanged without running
    /// the conversion roundtrip. Alpha is preserved.
    pub fn apply(&self, color: Rgba) -> Rgba {
        if self.is_identity() {
            return color;
        }
        let [h, s, v] = rgb_to_hsv(color.rgb());
        let [r, g, b] = hsv_to_rgb([h * self.hue, s * self.saturation, v * self.brightness]);
        Rgba {
            r,
            g,
            b,
            a: color.a,
        }
    }
}

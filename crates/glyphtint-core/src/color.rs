//! RGBA color value type shared by the transform functions.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::transform::gamma::srgb_to_linear;

/// A color with four `f32` channels, conventionally in `[0, 1]`.
///
/// Whether the channels are linear light or gamma-encoded depends on the
/// source: [`Rgba::from_srgb8`] and [`crate::palette::LinearPalette`]
/// produce linear values, string parsing produces encoded values as
/// written in the config. `a` is opacity, except on glyph values where it
/// carries coverage.
///
/// `#[repr(C)]` plus `Pod` so slices of colors can be uploaded to the GPU
/// byte-for-byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Decode 8-bit sRGB components into linear light.
    ///
    /// Alpha is already linear in sRGBA and is only rescaled.
    pub fn from_srgb8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: srgb_to_linear(r as f32 / 255.0),
            g: srgb_to_linear(g as f32 / 255.0),
            b: srgb_to_linear(b as f32 / 255.0),
            a: a as f32 / 255.0,
        }
    }

    /// Apply `f` to all four channels.
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: f(self.a),
        }
    }

    /// The r,g,b channels as a triplet for the HSV conversions.
    pub const fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_fully_transparent(self) -> bool {
        self.a == 0.0
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_layout_matches_gpu_expectations() {
        assert_eq!(std::mem::size_of::<Rgba>(), 16);
        assert_eq!(std::mem::align_of::<Rgba>(), 4);
    }

    #[test]
    fn test_from_srgb8_endpoints() {
        let black = Rgba::from_srgb8(0, 0, 0, 255);
        assert_eq!(black.rgb(), [0.0, 0.0, 0.0]);
        assert_eq!(black.a, 1.0);

        let white = Rgba::from_srgb8(255, 255, 255, 255);
        for c in white.rgb() {
            assert!((c - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_from_srgb8_mid_gray() {
        // sRGB 128 decodes to ~0.2158 linear
        let gray = Rgba::from_srgb8(128, 128, 128, 255);
        assert!((gray.r - 0.215861).abs() < 1e-4, "got {}", gray.r);
    }

    #[test]
    fn test_from_srgb8_alpha_is_not_gamma_decoded() {
        let c = Rgba::from_srgb8(0, 0, 0, 128);
        assert!((c.a - 128.0 / 255.0).abs() < EPSILON);
    }

    #[test]
    fn test_map_applies_to_all_channels() {
        let c = Rgba::new(0.1, 0.2, 0.3, 0.4).map(|v| v * 2.0);
        assert_eq!(c, Rgba::new(0.2, 0.4, 0.6, 0.8));
    }

    #[test]
    fn test_array_roundtrip() {
        let c = Rgba::new(0.1, 0.2, 0.3, 0.4);
        let back = Rgba::from(<[f32; 4]>::from(c));
        assert_eq!(back, c);
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = Rgba::new(0.25, 0.5, 0.75, 1.0);
        let json = serde_json::to_string(&c).expect("serialize");
        let back: Rgba = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, c);
    }
}

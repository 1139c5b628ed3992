//! Precomputed linear palette for GPU upload.
//!
//! The renderer looks cell colors up per glyph; running the piecewise
//! sRGB decode on that path would repeat it millions of times per frame,
//! so the whole table is converted once whenever the palette changes.

use tracing::trace;

use crate::color::Rgba;

/// 256 indexed colors plus the two default slots.
pub const PALETTE_SIZE: usize = 258;
/// Table slot holding the default foreground color.
pub const DEFAULT_FG_INDEX: usize = 256;
/// Table slot holding the default background color.
pub const DEFAULT_BG_INDEX: usize = 257;

/// Pre-computed linear RGBA palette, ready for buffer upload.
///
/// Index 0–255: indexed terminal colors; 256: default foreground;
/// 257: default background. Entries are linear light, alpha 1.0.
#[derive(Clone)]
pub struct LinearPalette {
    pub colors: [Rgba; PALETTE_SIZE],
}

impl LinearPalette {
    /// Decode an 8-bit sRGB palette into linear light.
    pub fn from_srgb8(
        indexed: &[[u8; 3]; 256],
        default_fg: [u8; 3],
        default_bg: [u8; 3],
    ) -> Self {
        let mut colors = [Rgba::TRANSPARENT; PALETTE_SIZE];
        for (slot, &[r, g, b]) in colors.iter_mut().zip(indexed.iter()) {
            *slot = Rgba::from_srgb8(r, g, b, 255);
        }
        colors[DEFAULT_FG_INDEX] =
            Rgba::from_srgb8(default_fg[0], default_fg[1], default_fg[2], 255);
        colors[DEFAULT_BG_INDEX] =
            Rgba::from_srgb8(default_bg[0], default_bg[1], default_bg[2], 255);
        trace!("rebuilt linear palette table ({PALETTE_SIZE} entries)");
        Self { colors }
    }

    pub fn default_fg(&self) -> Rgba {
        self.colors[DEFAULT_FG_INDEX]
    }

    pub fn default_bg(&self) -> Rgba {
        self.colors[DEFAULT_BG_INDEX]
    }

    /// Byte view of the table for direct buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

impl Default for LinearPalette {
    /// The standard xterm-256 layout with light-gray-on-black defaults.
    fn default() -> Self {
        Self::from_srgb8(&xterm_256(), [229, 229, 229], [0, 0, 0])
    }
}

/// The xterm-256 indexed palette: 16 ANSI colors, a 6×6×6 color cube,
/// and a 24-step gray ramp.
fn xterm_256() -> [[u8; 3]; 256] {
    let mut colors = [[0u8; 3]; 256];

    const ANSI: [[u8; 3]; 16] = [
        [0, 0, 0],       // black
        [204, 0, 0],     // red
        [0, 204, 0],     // green
        [204, 204, 0],   // yellow
        [0, 0, 204],     // blue
        [204, 0, 204],   // magenta
        [0, 204, 204],   // cyan
        [204, 204, 204], // white
        [102, 102, 102], // bright black
        [255, 0, 0],     // bright red
        [0, 255, 0],     // bright green
        [255, 255, 0],   // bright yellow
        [0, 0, 255],     // bright blue
        [255, 0, 255],   // bright magenta
        [0, 255, 255],   // bright cyan
        [255, 255, 255], // bright white
    ];
    colors[..16].copy_from_slice(&ANSI);

    // 216-entry color cube (16..232): levels 0, 95, 135, 175, 215, 255
    for r in 0..6 {
        for g in 0..6 {
            for b in 0..6 {
                let level = |c: usize| if c == 0 { 0 } else { (55 + c * 40) as u8 };
                colors[16 + r * 36 + g * 6 + b] = [level(r), level(g), level(b)];
            }
        }
    }

    // 24-step gray ramp (232..256): 8, 18, ..., 238
    for (i, slot) in colors[232..].iter_mut().enumerate() {
        let gray = (8 + i * 10) as u8;
        *slot = [gray; 3];
    }

    colors
}

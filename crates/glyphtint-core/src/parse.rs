//! Color-string parsing for renderer configuration.
//!
//! Accepts the `#RGB` / `#RRGGBB` / `#RRGGBBAA` hex forms and the X11
//! `rgb:RR/GG/BB` syntax with 1–4 hex digits per component. Parsed
//! channels are gamma-encoded exactly as written in the config; decode
//! with [`crate::transform::gamma::srgb_to_linear`] where linear light
//! is needed.

use std::str::FromStr;

use crate::color::Rgba;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex digit in `{0}`")]
    InvalidHex(String),
    #[error("hex color has {0} digits, expected 3, 6 or 8")]
    InvalidLength(usize),
    #[error("rgb: spec needs three components, `{0}` has {1}")]
    WrongComponentCount(String, usize),
    #[error("rgb: component `{0}` must be 1-4 hex digits")]
    InvalidComponent(String),
    #[error("unrecognized color format `{0}`")]
    UnrecognizedFormat(String),
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Result<Rgba, ParseColorError> {
    let digits: Vec<u8> = hex
        .bytes()
        .map(|c| nibble(c).ok_or_else(|| ParseColorError::InvalidHex(hex.to_string())))
        .collect::<Result<_, _>>()?;

    let byte = |hi: u8, lo: u8| (hi << 4 | lo) as f32 / 255.0;

    match digits.as_slice() {
        // #RGB: each nibble doubled, 0xf -> 0xff
        [r, g, b] => Ok(Rgba::new(
            byte(*r, *r),
            byte(*g, *g),
            byte(*b, *b),
            1.0,
        )),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba::new(
            byte(*r1, *r0),
            byte(*g1, *g0),
            byte(*b1, *b0),
            1.0,
        )),
        [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Rgba::new(
            byte(*r1, *r0),
            byte(*g1, *g0),
            byte(*b1, *b0),
            byte(*a1, *a0),
        )),
        _ => Err(ParseColorError::InvalidLength(digits.len())),
    }
}

/// Parse one X11 `rgb:` component of 1–4 hex digits.
///
/// XParseColor scales from the most significant bits: one digit is
/// duplicated, three or four digits are truncated down to eight bits.
fn x11_component(text: &str) -> Result<f32, ParseColorError> {
    let invalid = || ParseColorError::InvalidComponent(text.to_string());

    let mut component = 0u16;
    let mut num_digits = 0u32;
    for c in text.bytes() {
        let nybble = nibble(c).ok_or_else(invalid)?;
        component = component << 4 | nybble as u16;
        num_digits += 1;
    }

    let scaled = match num_digits {
        1 => component | component << 4,
        2 => component,
        3 => component >> 4,
        4 => component >> 8,
        _ => return Err(invalid()),
    };
    Ok(scaled as f32 / 255.0)
}

fn parse_x11(spec: &str) -> Result<Rgba, ParseColorError> {
    let fields: Vec<&str> = spec.split('/').collect();
    if fields.len() != 3 {
        return Err(ParseColorError::WrongComponentCount(
            spec.to_string(),
            fields.len(),
        ));
    }
    Ok(Rgba::new(
        x11_component(fields[0])?,
        x11_component(fields[1])?,
        x11_component(fields[2])?,
        1.0,
    ))
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(spec) = s.strip_prefix("rgb:") {
            return parse_x11(spec);
        }
        Err(ParseColorError::UnrecognizedFormat(s.to_string()))
    }
}

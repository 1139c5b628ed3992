//! Reference tests pinning the exact floating-point contract of the
//! glyph colorization chain, so rendering output stays visually
//! identical across refactors.

use glyphtint_core::{
    HsvTransform, LinearPalette, Rgba, colorize, from_linear, multiply, to_linear,
};

const EPSILON: f32 = 1e-5;

fn assert_rgba_close(actual: Rgba, expected: Rgba) {
    let (a, e) = (actual.to_array(), expected.to_array());
    for c in 0..4 {
        assert!(
            (a[c] - e[c]).abs() < EPSILON,
            "channel {c}: {:.7} vs {:.7} (actual {actual:?}, expected {expected:?})",
            a[c],
            e[c],
        );
    }
}

#[test]
fn test_colorize_golden_reference() {
    // Half-coverage gray glyph, red foreground over blue background.
    // 0.5^(1/2.2) = 0.7297401, so the documented formula gives:
    //   r = 0.7297401*1 + 0.2702599*0 = 0.7297401
    //   g = 0
    //   b = 0.7297401*0 + 0.2702599*1 = 0.2702599
    //   a = 0.7297401 (linearized coverage)
    let result = colorize(
        Rgba::new(0.5, 0.5, 0.5, 0.5),
        Rgba::new(1.0, 0.0, 0.0, 1.0),
        Rgba::new(0.0, 0.0, 1.0, 1.0),
    );
    assert_rgba_close(result, Rgba::new(0.729_740_1, 0.0, 0.270_259_9, 0.729_740_1));
}

#[test]
fn test_colorize_coverage_extremes() {
    let fg = Rgba::new(0.8, 0.3, 0.1, 1.0);
    let bg = Rgba::new(0.05, 0.05, 0.2, 1.0);

    let full = colorize(Rgba::new(1.0, 1.0, 1.0, 1.0), fg, bg);
    assert_rgba_close(full, Rgba::new(fg.r, fg.g, fg.b, 1.0));

    let none = colorize(Rgba::new(0.0, 0.0, 0.0, 0.0), fg, bg);
    assert_rgba_close(none, Rgba::new(bg.r, bg.g, bg.b, 0.0));
}

#[test]
fn test_gamma_pair_roundtrip() {
    let v = Rgba::new(0.1, 0.4, 0.9, 1.0);
    assert_rgba_close(to_linear(from_linear(v)), v);
    assert_rgba_close(from_linear(to_linear(v)), v);
}

#[test]
fn test_multiply_consumes_source_alpha() {
    let glyph = Rgba::new(0.6, 0.6, 0.6, 0.6);
    let tint = Rgba::new(0.9, 0.2, 0.4, 1.0);
    let out = multiply(glyph, tint);
    assert_eq!(out.a, tint.a);
    // inv_dst_alpha = 0, inv_src_alpha = 0.4:
    //   r = 0.6*0.9 + 0.9*0.4 = 0.9
    assert!((out.r - 0.9).abs() < EPSILON);
}

#[test]
fn test_configured_hsb_shifts_palette_foreground() {
    // The path the renderer takes: deserialize foreground_text_hsb from
    // config, apply it to the palette's default foreground.
    let hsb: HsvTransform =
        serde_json::from_str(r#"{"hue": 1.0, "saturation": 1.0, "brightness": 0.5}"#)
            .expect("config parse");
    let palette = LinearPalette::default();
    let fg = palette.default_fg();
    let dimmed = hsb.apply(fg);

    assert!((dimmed.r - fg.r * 0.5).abs() < 1e-4);
    assert!((dimmed.g - fg.g * 0.5).abs() < 1e-4);
    assert!((dimmed.b - fg.b * 0.5).abs() < 1e-4);
    assert_eq!(dimmed.a, fg.a);
}

#[test]
fn test_parsed_config_color_feeds_colorize() {
    let fg: Rgba = "#c00000".parse().expect("valid hex");
    let bg: Rgba = "rgb:00/00/00".parse().expect("valid x11 spec");
    let out = colorize(Rgba::new(1.0, 1.0, 1.0, 1.0), fg, bg);
    assert!((out.r - 192.0 / 255.0).abs() < EPSILON);
    assert_eq!(out.g, 0.0);
    assert_eq!(out.b, 0.0);
}

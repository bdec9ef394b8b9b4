//! Conversions between RGB, RGBA, HSV, HSVA and hex encodings
//!
//! Every function takes its input by value (or `&str`) and returns a new
//! value; nothing here mutates caller data.

use crate::error::{ColorError, ColorResult};
use crate::space::{Hsv, Hsva, Rgb, Rgba};

/// Scale a unit-range channel to a byte, truncating toward zero.
///
/// Values outside [0, 1] saturate at the `u8` bounds.
#[inline]
fn unit_to_byte(c: f64) -> u8 {
    (c * 255.0).floor() as u8
}

/// Convert HSV to RGB
///
/// Hue is a fraction of a full turn; `h = 1.0` wraps back to red.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector.rem_euclid(6.0) as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
}

/// Convert HSV to RGBA with alpha 1.0
pub fn hsv_to_rgba(hsv: Hsv) -> Rgba {
    rgb_to_rgba(hsv_to_rgb(hsv))
}

/// Convert HSVA to RGBA, keeping alpha
pub fn hsva_to_rgba(hsva: Hsva) -> Rgba {
    let rgb = hsv_to_rgb(hsva.hsv());
    Rgba::new(rgb.r, rgb.g, rgb.b, hsva.a)
}

/// Convert RGB to HSV
///
/// When two channels share the maximum, the first of r, g, b wins.
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let h = if max == min {
        0.0
    } else {
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h / 6.0
    };

    Hsv::new(h, s, max)
}

/// Convert RGBA to HSVA, keeping alpha
pub fn rgba_to_hsva(rgba: Rgba) -> Hsva {
    let hsv = rgb_to_hsv(rgba.rgb());
    Hsva::new(hsv.h, hsv.s, hsv.v, rgba.a)
}

/// Encode RGB as six lowercase hex digits, without a leading `#`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Normalize a hex color string to six lowercase digits
///
/// Accepts `"#abc"`, `"abc"`, `"#aabbcc"` and `"aabbcc"`. A three digit form is
/// expanded by doubling each digit.
pub fn normalize_hex(hex: &str) -> ColorResult<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(format!(
            "invalid hex digit '{}' in \"{}\"",
            bad, hex
        )));
    }

    match digits.len() {
        3 => Ok(digits
            .chars()
            .flat_map(|c| {
                let c = c.to_ascii_lowercase();
                [c, c]
            })
            .collect()),
        6 => Ok(digits.to_ascii_lowercase()),
        n => Err(ColorError::InvalidFormat(format!(
            "hex color must have 3 or 6 digits, got {} in \"{}\"",
            n, hex
        ))),
    }
}

/// Decode a hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> ColorResult<Rgb> {
    let hex = normalize_hex(hex)?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|e| ColorError::InvalidFormat(format!("\"{}\": {}", hex, e)))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Decode a hex color string to RGBA with alpha 1.0
pub fn hex_to_rgba(hex: &str) -> ColorResult<Rgba> {
    hex_to_rgb(hex).map(rgb_to_rgba)
}

/// Append an alpha of 1.0
pub fn rgb_to_rgba(rgb: Rgb) -> Rgba {
    Rgba::new(rgb.r, rgb.g, rgb.b, 1.0)
}

/// Drop the alpha channel
pub fn rgba_to_rgb(rgba: Rgba) -> Rgb {
    rgba.rgb()
}

/// Append an alpha of 1.0
pub fn hsv_to_hsva(hsv: Hsv) -> Hsva {
    Hsva::new(hsv.h, hsv.s, hsv.v, 1.0)
}

/// Drop the alpha channel
pub fn hsva_to_hsv(hsva: Hsva) -> Hsv {
    hsva.hsv()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_hsv_eq(actual: Hsv, expected: (f64, f64, f64)) {
        assert!(
            (actual.h - expected.0).abs() < EPS
                && (actual.s - expected.1).abs() < EPS
                && (actual.v - expected.2).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(1.0 / 3.0, 1.0, 1.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 1.0)), Rgb::WHITE);
        assert_eq!(hsv_to_rgb(Hsv::new(0.5, 0.0, 0.0)), Rgb::BLACK);
    }

    #[test]
    fn test_hsv_to_rgb_every_sector() {
        // Sector midpoints with s = 1, v = 1: f = 0.5, so t = q = 0.5.
        let expected: [(u8, u8, u8); 6] = [
            (255, 127, 0),
            (127, 255, 0),
            (0, 255, 127),
            (0, 127, 255),
            (127, 0, 255),
            (255, 0, 127),
        ];
        for (i, rgb) in expected.iter().enumerate() {
            let h = (i as f64 + 0.5) / 6.0;
            assert_eq!(hsv_to_rgb(Hsv::new(h, 1.0, 1.0)), Rgb::from(*rgb), "sector {i}");
        }
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert_eq!(hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(
            hsv_to_rgb(Hsv::new(-1.0 / 12.0, 1.0, 1.0)),
            hsv_to_rgb(Hsv::new(11.0 / 12.0, 1.0, 1.0))
        );
    }

    #[test]
    fn test_rgb_to_hsv() {
        assert_hsv_eq(rgb_to_hsv(Rgb::new(255, 0, 0)), (0.0, 1.0, 1.0));
        assert_hsv_eq(rgb_to_hsv(Rgb::new(0, 255, 0)), (1.0 / 3.0, 1.0, 1.0));
        assert_hsv_eq(rgb_to_hsv(Rgb::new(0, 0, 255)), (2.0 / 3.0, 1.0, 1.0));
        assert_hsv_eq(rgb_to_hsv(Rgb::WHITE), (0.0, 0.0, 1.0));
        assert_hsv_eq(rgb_to_hsv(Rgb::BLACK), (0.0, 0.0, 0.0));
        // Blue above green wraps the red sector: (g - b) / d + 6
        assert_hsv_eq(rgb_to_hsv(Rgb::new(255, 0, 51)), (1.0 - 0.2 / 6.0, 1.0, 1.0));
    }

    #[test]
    fn test_rgb_to_hsv_tie_break() {
        // r and g tie: red branch wins, h = (g - b) / d / 6 = 1/6
        assert_hsv_eq(rgb_to_hsv(Rgb::new(255, 255, 0)), (1.0 / 6.0, 1.0, 1.0));
        // g and b tie: green branch wins, h = ((b - r) / d + 2) / 6 = 1/2
        assert_hsv_eq(rgb_to_hsv(Rgb::new(0, 255, 255)), (0.5, 1.0, 1.0));
        // r and b tie: red branch wins, h = ((g - b) / d + 6) / 6 = 5/6
        assert_hsv_eq(rgb_to_hsv(Rgb::new(255, 0, 255)), (5.0 / 6.0, 1.0, 1.0));
    }

    #[test]
    fn test_hsv_round_trip_is_bounded() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let rgb = Rgb::new(r, g, b);
                    let back = hsv_to_rgb(rgb_to_hsv(rgb));
                    for (x, y) in rgb.to_array().iter().zip(back.to_array()) {
                        assert!(
                            (i16::from(*x) - i16::from(y)).abs() <= 1,
                            "{:?} -> {:?}",
                            rgb,
                            back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 0, 0)), "ff0000");
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 171)), "0102ab");
        assert_eq!(rgb_to_hex(Rgb::BLACK), "000000");
    }

    #[test]
    fn test_hex_round_trip() {
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(7) {
                for b in [0u8, 1, 15, 16, 127, 128, 254, 255] {
                    let rgb = Rgb::new(r, g, b);
                    assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
                }
            }
        }
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#fff").unwrap(), "ffffff");
        assert_eq!(normalize_hex("abc").unwrap(), "aabbcc");
        assert_eq!(normalize_hex("#A1B2C3").unwrap(), "a1b2c3");
        assert_eq!(normalize_hex("ff0000").unwrap(), "ff0000");
    }

    #[test]
    fn test_normalize_hex_rejects_bad_lengths() {
        for hex in ["", "#", "ff", "ffff", "#fffff", "fffffff", "##fff"] {
            assert!(
                matches!(normalize_hex(hex), Err(ColorError::InvalidFormat(_))),
                "{hex:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_rejects_bad_digits() {
        assert!(matches!(hex_to_rgb("ggg"), Err(ColorError::InvalidFormat(_))));
        assert!(matches!(hex_to_rgb("+fffff"), Err(ColorError::InvalidFormat(_))));
        assert!(matches!(hex_to_rgb("ééé"), Err(ColorError::InvalidFormat(_))));
    }

    #[test]
    fn test_alpha_defaulting() {
        let rgb = Rgb::new(1, 2, 3);
        let rgba = rgb_to_rgba(rgb);
        assert_eq!(rgba.a, 1.0);
        assert_eq!(rgba_to_rgb(rgba), rgb);
        // The input is untouched and still usable.
        assert_eq!(rgb, Rgb::new(1, 2, 3));

        assert_eq!(hex_to_rgba("#fff").unwrap(), Rgba::WHITE);
        assert_eq!(hsv_to_hsva(Hsv::new(0.1, 0.2, 0.3)).a, 1.0);
        assert_eq!(hsva_to_hsv(Hsva::new(0.1, 0.2, 0.3, 0.4)), Hsv::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_alpha_is_carried() {
        let rgba = hsva_to_rgba(Hsva::new(0.0, 1.0, 1.0, 0.5));
        assert_eq!(rgba, Rgba::new(255, 0, 0, 0.5));
        assert_eq!(rgba_to_hsva(rgba).a, 0.5);
        assert_eq!(hsv_to_rgba(Hsv::new(0.0, 0.0, 1.0)), Rgba::WHITE);
    }
}

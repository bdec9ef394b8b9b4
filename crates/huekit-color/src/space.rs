//! Channel value types for the supported color spaces

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};

/// An RGB color with integer channels in the range [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color from RGB bytes
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Convert to array
    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Rgb::new(arr[0], arr[1], arr[2])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

/// An RGB color with an alpha channel in the range [0.0, 1.0]
///
/// This is the canonical form stored by [`Color`](crate::Color).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Create a new color from RGB bytes and an alpha
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    /// The color channels without alpha
    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Return a copy of this color with the given alpha
    pub const fn with_alpha(self, a: f64) -> Self {
        Rgba { a, ..self }
    }

    /// Convert to array, channels widened to `f64`
    pub fn to_array(&self) -> [f64; 4] {
        [
            f64::from(self.r),
            f64::from(self.g),
            f64::from(self.b),
            self.a,
        ]
    }

    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
}

impl From<(u8, u8, u8, f64)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        Rgba::new(r, g, b, a)
    }
}

impl From<Rgba> for (u8, u8, u8, f64) {
    fn from(c: Rgba) -> Self {
        (c.r, c.g, c.b, c.a)
    }
}

/// Validate a numeric channel and round it to a byte
fn channel_from_f64(component: &'static str, value: f64) -> ColorResult<u8> {
    if value.is_finite() && (0.0..=255.0).contains(&value) {
        Ok(value.round() as u8)
    } else {
        Err(ColorError::out_of_range(component, value))
    }
}

/// Validate an alpha component
pub(crate) fn alpha_from_f64(value: f64) -> ColorResult<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::out_of_range("a", value))
    }
}

/// Build RGBA from three (alpha 1.0) or four numeric components
impl TryFrom<&[f64]> for Rgba {
    type Error = ColorError;

    fn try_from(components: &[f64]) -> ColorResult<Self> {
        let (rgb, alpha) = match components {
            [r, g, b] => ([*r, *g, *b], 1.0),
            [r, g, b, a] => ([*r, *g, *b], alpha_from_f64(*a)?),
            other => {
                return Err(ColorError::InvalidFormat(format!(
                    "expected 3 or 4 color components, got {}",
                    other.len()
                )))
            }
        };

        Ok(Rgba::new(
            channel_from_f64("r", rgb[0])?,
            channel_from_f64("g", rgb[1])?,
            channel_from_f64("b", rgb[2])?,
            alpha,
        ))
    }
}

/// An HSV color, each component fractional in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Hsv {
    /// Hue as a fraction of a full turn
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Hsv { h, s, v }
    }

    /// Convert to array
    pub fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}

impl From<[f64; 3]> for Hsv {
    fn from(arr: [f64; 3]) -> Self {
        Hsv::new(arr[0], arr[1], arr[2])
    }
}

impl From<(f64, f64, f64)> for Hsv {
    fn from((h, s, v): (f64, f64, f64)) -> Self {
        Hsv::new(h, s, v)
    }
}

impl From<Hsv> for [f64; 3] {
    fn from(c: Hsv) -> Self {
        c.to_array()
    }
}

impl From<Hsv> for (f64, f64, f64) {
    fn from(c: Hsv) -> Self {
        (c.h, c.s, c.v)
    }
}

/// An HSV color with alpha, each component fractional in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl Hsva {
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Hsva { h, s, v, a }
    }

    /// The HSV components without alpha
    pub const fn hsv(&self) -> Hsv {
        Hsv::new(self.h, self.s, self.v)
    }

    /// Convert to array
    pub fn to_array(&self) -> [f64; 4] {
        [self.h, self.s, self.v, self.a]
    }
}

impl From<[f64; 4]> for Hsva {
    fn from(arr: [f64; 4]) -> Self {
        Hsva::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<(f64, f64, f64, f64)> for Hsva {
    fn from((h, s, v, a): (f64, f64, f64, f64)) -> Self {
        Hsva::new(h, s, v, a)
    }
}

impl From<Hsva> for [f64; 4] {
    fn from(c: Hsva) -> Self {
        c.to_array()
    }
}

impl From<Hsva> for (f64, f64, f64, f64) {
    fn from(c: Hsva) -> Self {
        (c.h, c.s, c.v, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_splits_into_rgb() {
        let rgba = Rgba::new(10, 20, 30, 0.25);
        assert_eq!(rgba.rgb(), Rgb::new(10, 20, 30));
        assert_eq!(rgba.with_alpha(1.0).a, 1.0);
        assert_eq!(rgba.to_array(), [10.0, 20.0, 30.0, 0.25]);
    }

    #[test]
    fn test_rgba_from_components() {
        assert_eq!(
            Rgba::try_from([255.0, 0.0, 0.0].as_slice()).unwrap(),
            Rgba::new(255, 0, 0, 1.0)
        );
        assert_eq!(
            Rgba::try_from([0.0, 127.6, 0.0, 0.5].as_slice()).unwrap(),
            Rgba::new(0, 128, 0, 0.5)
        );
    }

    #[test]
    fn test_rgba_from_bad_components() {
        assert!(matches!(
            Rgba::try_from([1.0, 2.0].as_slice()),
            Err(ColorError::InvalidFormat(_))
        ));
        assert_eq!(
            Rgba::try_from([0.0, -1.0, 0.0].as_slice()),
            Err(ColorError::out_of_range("g", -1.0))
        );
        assert!(matches!(
            Rgba::try_from([0.0, 0.0, f64::NAN].as_slice()),
            Err(ColorError::OutOfRange { component: "b", .. })
        ));
        assert_eq!(
            Rgba::try_from([0.0, 0.0, 0.0, 2.0].as_slice()),
            Err(ColorError::out_of_range("a", 2.0))
        );
    }

    #[test]
    fn test_tuple_conversions() {
        let rgb: Rgb = (1, 2, 3).into();
        let tuple: (u8, u8, u8) = rgb.into();
        assert_eq!(tuple, (1, 2, 3));

        let hsva = Hsva::from([0.5, 0.25, 1.0, 0.75]);
        assert_eq!(hsva.hsv(), Hsv::new(0.5, 0.25, 1.0));
    }

    #[test]
    fn test_serialize_as_arrays() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 16)).unwrap();
        assert_eq!(json, "[255,0,16]");

        let hsv: Hsv = serde_json::from_str("[0.0, 1.0, 0.5]").unwrap();
        assert_eq!(hsv, Hsv::new(0.0, 1.0, 0.5));
    }
}

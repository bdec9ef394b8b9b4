//! The color value object
//!
//! A [`Color`] stores one canonical RGBA quadruple and derives every other
//! encoding from it on demand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{hex_to_rgba, hsv_to_rgba, rgb_to_hex, rgb_to_hsv, rgb_to_rgba, rgba_to_hsva};
use crate::error::{ColorError, ColorResult};
use crate::input::ColorInput;
use crate::named::NamedColors;
use crate::parse::{parse_css_function, CssFunction};
use crate::space::{alpha_from_f64, Hsv, Hsva, Rgb, Rgba};

/// A color normalized to RGBA
///
/// # Example
///
/// ```rust
/// use huekit_color::{Color, ColorInput, Rgb};
///
/// let mut color = Color::new(ColorInput::Hex("ff0000".into())).unwrap();
/// assert_eq!(color.rgb(), Some(Rgb::new(255, 0, 0)));
///
/// color.set("aliceblue").unwrap();
/// assert_eq!(color.hex(true).as_deref(), Some("#f0f8ff"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<Rgba>", into = "Option<Rgba>")]
pub struct Color {
    /// Canonical state; `None` until a color has been set
    rgba: Option<Rgba>,
}

impl Color {
    /// Color used when the input is absent: opaque white
    pub const FALLBACK: Rgba = Rgba::WHITE;

    /// Create a color from any accepted input
    pub fn new(input: impl Into<ColorInput>) -> ColorResult<Self> {
        let mut color = Color::empty();
        color.set(input)?;
        Ok(color)
    }

    /// Create a color with no state; every accessor returns `None`
    pub const fn empty() -> Self {
        Color { rgba: None }
    }

    /// Check whether a color has been set
    pub fn is_set(&self) -> bool {
        self.rgba.is_some()
    }

    /// Replace the color with a newly normalized input
    ///
    /// On error the previous color is kept.
    pub fn set(&mut self, input: impl Into<ColorInput>) -> ColorResult<&mut Self> {
        let rgba = normalize(input.into())?;
        self.rgba = Some(rgba);
        Ok(self)
    }

    /// Red, green, blue bytes
    pub fn rgb(&self) -> Option<Rgb> {
        self.rgba.map(|rgba| rgba.rgb())
    }

    /// Red, green, blue bytes with alpha
    pub fn rgba(&self) -> Option<Rgba> {
        self.rgba
    }

    /// Hue, saturation, value
    pub fn hsv(&self) -> Option<Hsv> {
        self.rgb().map(rgb_to_hsv)
    }

    /// Hue, saturation, value, alpha
    pub fn hsva(&self) -> Option<Hsva> {
        self.rgba.map(rgba_to_hsva)
    }

    /// Six lowercase hex digits, prefixed with `#` when `with_hash` is set
    pub fn hex(&self, with_hash: bool) -> Option<String> {
        self.rgb().map(|rgb| {
            let hex = rgb_to_hex(rgb);
            if with_hash {
                format!("#{}", hex)
            } else {
                hex
            }
        })
    }
}

/// Classify an input and convert it to the canonical form
fn normalize(input: ColorInput) -> ColorResult<Rgba> {
    log::debug!("normalizing {} color input", input.kind());

    match input {
        ColorInput::Hsv(hsv) => Ok(hsv_to_rgba(hsv)),
        ColorInput::Hsva(hsva) => {
            let alpha = alpha_from_f64(hsva.a)?;
            Ok(hsv_to_rgba(hsva.hsv()).with_alpha(alpha))
        }
        ColorInput::Rgb(rgb) => Ok(rgb_to_rgba(rgb)),
        ColorInput::Rgba(rgba) => {
            let alpha = alpha_from_f64(rgba.a)?;
            Ok(rgba.with_alpha(alpha))
        }
        ColorInput::Hex(hex) => hex_to_rgba(&hex),
        ColorInput::Named(name) => NamedColors::lookup(name.trim())
            .ok_or(ColorError::NotFound(name))
            .and_then(hex_to_rgba),
        ColorInput::Sequence(components) => Rgba::try_from(components.as_slice()),
        ColorInput::Text(text) => normalize_text(&text),
        ColorInput::Absent => {
            log::warn!("no color given, falling back to {:?}", Color::FALLBACK);
            Ok(Color::FALLBACK)
        }
    }
}

/// Text is a color name, an `rgb(...)`/`rgba(...)` function, or hex
fn normalize_text(text: &str) -> ColorResult<Rgba> {
    let text = text.trim();

    if let Some(hex) = NamedColors::lookup(text) {
        log::debug!("resolved named color '{}' to {}", text, hex);
        return hex_to_rgba(hex);
    }

    if let Some(function) = CssFunction::sniff(text) {
        log::debug!("parsing '{}' as {:?} function", text, function);
        return parse_css_function(text);
    }

    hex_to_rgba(text)
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::new(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::new(value)
    }
}

impl TryFrom<Rgba> for Color {
    type Error = ColorError;

    fn try_from(rgba: Rgba) -> Result<Self, Self::Error> {
        Color::new(rgba)
    }
}

/// Deserialized state is validated like any other RGBA input
impl TryFrom<Option<Rgba>> for Color {
    type Error = ColorError;

    fn try_from(rgba: Option<Rgba>) -> Result<Self, Self::Error> {
        match rgba {
            Some(rgba) => Color::new(rgba),
            None => Ok(Color::empty()),
        }
    }
}

impl From<Color> for Option<Rgba> {
    fn from(color: Color) -> Self {
        color.rgba
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hex(true) {
            Some(hex) => f.write_str(&hex),
            None => f.write_str("unset"),
        }
    }
}

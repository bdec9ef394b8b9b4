//! Color input values accepted by [`Color::new`](crate::Color::new) and
//! [`Color::set`](crate::Color::set)
//!
//! Inputs arriving from configuration documents decode loosely: a map with a
//! known tag, a numeric sequence, a string, or anything else (treated as absent).
//! A known tag whose payload has the wrong shape is a decoding error.

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::error::{ColorError, ColorResult};
use crate::space::{Hsv, Hsva, Rgb, Rgba};

/// A color in one of the accepted input encodings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "LooseInput")]
pub enum ColorInput {
    /// Hue, saturation, value
    Hsv(Hsv),
    /// Hue, saturation, value, alpha
    Hsva(Hsva),
    /// Red, green, blue bytes
    Rgb(Rgb),
    /// Red, green, blue bytes with alpha
    Rgba(Rgba),
    /// Hex string, 3 or 6 digits, optional leading `#`
    Hex(String),
    /// CSS color name; a name missing from the table is an error
    Named(String),
    /// Untyped components: 3 for RGB, 4 for RGBA
    Sequence(Vec<f64>),
    /// Untyped text: a color name, `rgb(...)`/`rgba(...)`, or hex
    Text(String),
    /// No color given
    #[default]
    Absent,
}

impl ColorInput {
    /// Check if this input is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, ColorInput::Absent)
    }

    /// Short label for the input kind, used in log messages
    pub fn kind(&self) -> &'static str {
        match self {
            ColorInput::Hsv(_) => "hsv",
            ColorInput::Hsva(_) => "hsva",
            ColorInput::Rgb(_) => "rgb",
            ColorInput::Rgba(_) => "rgba",
            ColorInput::Hex(_) => "hex",
            ColorInput::Named(_) => "named",
            ColorInput::Sequence(_) => "sequence",
            ColorInput::Text(_) => "text",
            ColorInput::Absent => "absent",
        }
    }
}

impl From<Hsv> for ColorInput {
    fn from(hsv: Hsv) -> Self {
        ColorInput::Hsv(hsv)
    }
}

impl From<Hsva> for ColorInput {
    fn from(hsva: Hsva) -> Self {
        ColorInput::Hsva(hsva)
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> Self {
        ColorInput::Rgb(rgb)
    }
}

impl From<Rgba> for ColorInput {
    fn from(rgba: Rgba) -> Self {
        ColorInput::Rgba(rgba)
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        ColorInput::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        ColorInput::Text(text)
    }
}

impl From<Vec<f64>> for ColorInput {
    fn from(components: Vec<f64>) -> Self {
        ColorInput::Sequence(components)
    }
}

impl From<&[f64]> for ColorInput {
    fn from(components: &[f64]) -> Self {
        ColorInput::Sequence(components.to_vec())
    }
}

impl From<[f64; 3]> for ColorInput {
    fn from(components: [f64; 3]) -> Self {
        ColorInput::Sequence(components.to_vec())
    }
}

impl From<[f64; 4]> for ColorInput {
    fn from(components: [f64; 4]) -> Self {
        ColorInput::Sequence(components.to_vec())
    }
}

impl From<()> for ColorInput {
    fn from(_: ()) -> Self {
        ColorInput::Absent
    }
}

impl<T: Into<ColorInput>> From<Option<T>> for ColorInput {
    fn from(input: Option<T>) -> Self {
        input.map_or(ColorInput::Absent, Into::into)
    }
}

/// Map form with the recognized color tags
///
/// Payloads decode loosely so that a known tag with a malformed payload is
/// reported instead of being mistaken for an unrecognized shape. Tagged
/// `rgb`/`rgba` numbers are range-checked when the color is normalized.
#[derive(Debug, Default, Deserialize)]
struct TaggedFields {
    hsv: Option<TagPayload>,
    hsva: Option<TagPayload>,
    rgb: Option<TagPayload>,
    rgba: Option<TagPayload>,
    hex: Option<TagPayload>,
}

/// Raw value under a color tag
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagPayload {
    Numbers(Vec<f64>),
    Text(String),
    Other(IgnoredAny),
}

impl TagPayload {
    fn into_numbers(self, tag: &str) -> ColorResult<Vec<f64>> {
        match self {
            TagPayload::Numbers(numbers) => Ok(numbers),
            _ => Err(ColorError::InvalidFormat(format!(
                "'{}' must be a list of numbers",
                tag
            ))),
        }
    }

    fn into_text(self, tag: &str) -> ColorResult<String> {
        match self {
            TagPayload::Text(text) => Ok(text),
            _ => Err(ColorError::InvalidFormat(format!("'{}' must be a string", tag))),
        }
    }
}

fn component_count_error(tag: &str, expected: usize, got: usize) -> ColorError {
    ColorError::InvalidFormat(format!(
        "'{}' needs {} components, got {}",
        tag, expected, got
    ))
}

impl TaggedFields {
    /// Pick the first present tag: hsv, hsva, rgb, rgba, hex
    fn into_input(self) -> ColorResult<ColorInput> {
        if let Some(hsv) = self.hsv {
            match hsv.into_numbers("hsv")?.as_slice() {
                [h, s, v] => Ok(ColorInput::Hsv(Hsv::new(*h, *s, *v))),
                other => Err(component_count_error("hsv", 3, other.len())),
            }
        } else if let Some(hsva) = self.hsva {
            match hsva.into_numbers("hsva")?.as_slice() {
                [h, s, v, a] => Ok(ColorInput::Hsva(Hsva::new(*h, *s, *v, *a))),
                other => Err(component_count_error("hsva", 4, other.len())),
            }
        } else if let Some(rgb) = self.rgb {
            rgb.into_numbers("rgb").map(ColorInput::Sequence)
        } else if let Some(rgba) = self.rgba {
            rgba.into_numbers("rgba").map(ColorInput::Sequence)
        } else if let Some(hex) = self.hex {
            hex.into_text("hex").map(ColorInput::Hex)
        } else {
            Ok(ColorInput::Absent)
        }
    }
}

/// Any shape a color may take in a document
///
/// Sequences and strings are tried before maps so a numeric list is never
/// read as a struct.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LooseInput {
    Sequence(Vec<f64>),
    Text(String),
    Tagged(TaggedFields),
    Other(IgnoredAny),
}

impl TryFrom<LooseInput> for ColorInput {
    type Error = ColorError;

    fn try_from(loose: LooseInput) -> ColorResult<Self> {
        match loose {
            LooseInput::Sequence(components) => Ok(ColorInput::Sequence(components)),
            LooseInput::Text(text) => Ok(ColorInput::Text(text)),
            LooseInput::Tagged(fields) => fields.into_input(),
            LooseInput::Other(_) => Ok(ColorInput::Absent),
        }
    }
}

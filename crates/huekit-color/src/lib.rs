//! huekit Color System
//!
//! This crate normalizes colors given in loosely-typed encodings and converts
//! them between color spaces:
//! - RGB / RGBA with byte channels
//! - HSV / HSVA with fractional components
//! - hex strings (`"#abc"`, `"aabbcc"`)
//! - CSS color names and `rgb(...)` / `rgba(...)` strings
//!
//! # Example
//!
//! ```rust
//! use huekit_color::{Color, Rgba};
//!
//! let mut color = Color::new("rgba(255, 0, 0, 0.5)").unwrap();
//! assert_eq!(color.rgba(), Some(Rgba::new(255, 0, 0, 0.5)));
//! assert_eq!(color.hex(false).as_deref(), Some("ff0000"));
//!
//! color.set([0.0, 0.0, 255.0]).unwrap();
//! assert_eq!(color.hex(true).as_deref(), Some("#0000ff"));
//! ```

mod color;
mod convert;
mod error;
mod input;
mod named;
mod parse;
mod space;

pub use color::Color;
pub use convert::{
    hex_to_rgb, hex_to_rgba, hsv_to_hsva, hsv_to_rgb, hsv_to_rgba, hsva_to_hsv, hsva_to_rgba,
    normalize_hex, rgb_to_hex, rgb_to_hsv, rgb_to_rgba, rgba_to_hsva, rgba_to_rgb,
};
pub use error::{ColorError, ColorResult};
pub use input::ColorInput;
pub use named::{named_to_hex, named_to_hsv, named_to_hsva, named_to_rgb, NamedColors, NAMED_COLORS};
pub use parse::{parse_css_function, CssFunction};
pub use space::{Hsv, Hsva, Rgb, Rgba};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Color, ColorError, ColorInput, ColorResult, Hsv, Hsva, NamedColors, Rgb, Rgba};
}

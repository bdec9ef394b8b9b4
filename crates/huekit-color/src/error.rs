//! Error types for color normalization and conversion

use thiserror::Error;

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors that can occur when normalizing or converting colors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Malformed textual or sequence input (hex length, hex digits, `rgb(...)` syntax)
    #[error("Invalid color format: {0}")]
    InvalidFormat(String),

    /// A numeric component lies outside its valid range
    #[error("Color component '{component}' out of range: {value}")]
    OutOfRange {
        /// Name of the offending component (`r`, `g`, `b` or `a`)
        component: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Explicitly named color is not in the named-color table
    #[error("Color not found: {0}")]
    NotFound(String),
}

impl ColorError {
    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        ColorError::InvalidFormat(msg.into())
    }

    /// Create an out of range error
    pub fn out_of_range(component: &'static str, value: f64) -> Self {
        ColorError::OutOfRange { component, value }
    }
}

impl From<nom::Err<nom::error::Error<&str>>> for ColorError {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => ColorError::invalid_format("unexpected end of input"),
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                let snippet: String = e.input.chars().take(20).collect();
                ColorError::InvalidFormat(format!("at '{}'", snippet))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColorError::invalid_format("hex must have 3 or 6 digits, got 4");
        assert_eq!(
            format!("{}", err),
            "Invalid color format: hex must have 3 or 6 digits, got 4"
        );

        let err = ColorError::out_of_range("a", 1.5);
        assert_eq!(format!("{}", err), "Color component 'a' out of range: 1.5");

        let err = ColorError::NotFound("blurple".to_string());
        assert_eq!(format!("{}", err), "Color not found: blurple");
    }
}

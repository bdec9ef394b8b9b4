//! Parser for CSS-style color functions using nom
//!
//! # Supported Syntax
//!
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)`
//! - either function name with three or four components; a missing alpha is 1.0
//! - whitespace around components: `rgb(255,0,0, 0.5)`

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map},
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, pair, terminated},
    IResult,
};

use crate::error::ColorResult;
use crate::space::Rgba;

/// Which color function a string used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssFunction {
    Rgb,
    Rgba,
}

impl CssFunction {
    /// Detect a color function from the leading characters of `text`
    pub fn sniff(text: &str) -> Option<Self> {
        if text.starts_with("rgba(") {
            Some(CssFunction::Rgba)
        } else if text.starts_with("rgb(") {
            Some(CssFunction::Rgb)
        } else {
            None
        }
    }
}

/// Parse an `rgb(...)` or `rgba(...)` string into RGBA
///
/// # Example
/// ```
/// use huekit_color::{parse_css_function, Rgba};
///
/// let rgba = parse_css_function("rgba(255, 0, 0, 0.5)").unwrap();
/// assert_eq!(rgba, Rgba::new(255, 0, 0, 0.5));
/// ```
pub fn parse_css_function(input: &str) -> ColorResult<Rgba> {
    let (_, (function, components)) = all_consuming(css_function)(input.trim())?;
    log::debug!(
        "parsed {:?} function with {} components",
        function,
        components.len()
    );
    Rgba::try_from(components.as_slice())
}

/// Parse a function name and its parenthesized component list
fn css_function(input: &str) -> IResult<&str, (CssFunction, Vec<f64>)> {
    pair(
        function_name,
        terminated(separated_list1(char(','), component), char(')')),
    )(input)
}

/// Parse `rgba(` or `rgb(`
fn function_name(input: &str) -> IResult<&str, CssFunction> {
    alt((
        map(tag("rgba("), |_| CssFunction::Rgba),
        map(tag("rgb("), |_| CssFunction::Rgb),
    ))(input)
}

/// Parse a single numeric component surrounded by optional whitespace
fn component(input: &str) -> IResult<&str, f64> {
    delimited(multispace0, double, multispace0)(input)
}

//! CSS Values & Units Level 3 — §9 Colors (computed-value subset)
//! Spec: <https://www.w3.org/TR/css-color-3/>
//!
//! Computed styles serialize every color as `rgb(...)`, `rgba(...)` or the
//! `transparent` keyword, so that is all this module understands.

use crate::ParseError;
use core::fmt::{Display, Formatter, Result as FmtResult};
use cssparser::{ParseError as CssParseError, Parser, Token};

/// A color as it appears in a computed style value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ComputedColor {
    /// Three components: red, green, blue.
    Rgb([f32; 3]),
    /// Four components: red, green, blue, alpha.
    Rgba([f32; 4]),
    /// The `transparent` keyword, kept as a keyword.
    Transparent,
}

impl Display for ComputedColor {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Self::Rgb([red, green, blue]) => write!(formatter, "rgb({red}, {green}, {blue})"),
            Self::Rgba([red, green, blue, alpha]) => {
                write!(formatter, "rgba({red}, {green}, {blue}, {alpha})")
            }
            Self::Transparent => formatter.write_str("transparent"),
        }
    }
}

/// Collect the numeric components of an `rgb()`/`rgba()` block.
///
/// The component count decides the form: 3 numbers is `rgb`, 4 is `rgba`,
/// whichever function name was written. Computed colors never use percentage
/// channels, so those are rejected.
fn parse_rgb_components(input: &mut Parser) -> Option<ComputedColor> {
    let mut comps: Vec<f32> = Vec::with_capacity(4);
    while let Ok(token) = input.next() {
        match token {
            Token::Number { value, .. } => comps.push(*value),
            Token::Comma | Token::Delim('/') => {}
            _ => return None,
        }
    }
    match comps.as_slice() {
        [red, green, blue] => Some(ComputedColor::Rgb([*red, *green, *blue])),
        [red, green, blue, alpha] => Some(ComputedColor::Rgba([*red, *green, *blue, *alpha])),
        _ => None,
    }
}

/// Parse a computed CSS <color>.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for anything other than `rgb()`,
/// `rgba()` or `transparent`.
pub fn parse_color(input: &mut Parser) -> Result<ComputedColor, ParseError> {
    let token_initial = match input.next() {
        Ok(initial) => initial.clone(),
        Err(_) => return Err(ParseError::UnexpectedToken),
    };
    match token_initial {
        Token::Ident(name) if name.eq_ignore_ascii_case("transparent") => {
            Ok(ComputedColor::Transparent)
        }
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            let result: Result<Option<ComputedColor>, CssParseError<'_, ()>> =
                input.parse_nested_block(|nested| Ok(parse_rgb_components(nested)));
            match result {
                Ok(Some(color)) => Ok(color),
                _ => Err(ParseError::UnexpectedToken),
            }
        }
        _ => Err(ParseError::UnexpectedToken),
    }
}

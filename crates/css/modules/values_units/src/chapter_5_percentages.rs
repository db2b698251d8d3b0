//! CSS Values & Units Level 3 — §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::ParseError;
use crate::chapter_4_numbers::written_value;
use cssparser::{Parser, Token};

/// A CSS <percentage>, stored as written (`80%` is `Percentage(80.0)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f64);

/// Parse a CSS <percentage> (§5.1).
///
/// The value is read from the source text; cssparser only exposes it as an
/// `f32` divided by 100.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser) -> Result<Percentage, ParseError> {
    let start = input.position();
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    if let Token::Percentage { unit_value, .. } = token {
        let value =
            written_value(input, start, 1).unwrap_or_else(|| f64::from(unit_value) * 100.0);
        return Ok(Percentage(value));
    }
    Err(ParseError::UnexpectedToken)
}

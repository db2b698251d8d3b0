//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numbers>
//!
//! cssparser hands numeric tokens over as `f32`. Values here are re-read from
//! the token's source text so `33.3` stays `33.3` as an `f64`.

use crate::ParseError;
use cssparser::{Parser, SourcePosition, Token};

/// Re-read the numeric part of the token that started at `start`.
///
/// `suffix_len` is the byte length of the unit (`%`, `px`, `deg`, ...) that
/// ends the token. Returns `None` when the text is not a plain number.
pub(crate) fn written_value(input: &Parser, start: SourcePosition, suffix_len: usize) -> Option<f64> {
    let text = input.slice_from(start).trim();
    let number = text.get(..text.len().checked_sub(suffix_len)?)?;
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse a CSS <number> (§4.3).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<f64, ParseError> {
    let start = input.position();
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    if let Token::Number { value, .. } = token {
        return Ok(written_value(input, start, 0).unwrap_or_else(|| f64::from(value)));
    }
    Err(ParseError::UnexpectedToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(text: &str) -> Result<f64, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_number(&mut parser)
    }

    #[test]
    fn keeps_the_written_digits() {
        assert_eq!(parse("33.3"), Ok(33.3));
        assert_eq!(parse(" -0.1"), Ok(-0.1));
        assert_eq!(parse("1e2"), Ok(100.0));
    }

    #[test]
    fn rejects_dimensions() {
        assert_eq!(parse("3px"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse("50%"), Err(ParseError::UnexpectedToken));
    }
}

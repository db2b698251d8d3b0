//! CSS Values & Units Level 3 — §6 Dimensions (pixel lengths and angles)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>
//! Spec: <https://www.w3.org/TR/css-values-3/#angles>

use crate::ParseError;
use crate::chapter_4_numbers::written_value;
use cssparser::{Parser, Token};

/// Degrees in one gradian (400grad = 360deg).
const DEGREES_PER_GRADIAN: f64 = 360.0 / 400.0;

/// Degrees in one full turn.
const DEGREES_PER_TURN: f64 = 360.0;

/// A CSS <length> in pixels. Computed values always serialize lengths as `px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length(pub f64);

/// Supported CSS <angle> units (§6.1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degrees,
    Radians,
    Gradians,
    Turns,
}

impl AngleUnit {
    /// Map a dimension unit (ASCII case-insensitive) to an angle unit.
    pub fn from_suffix(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "deg" => Some(Self::Degrees),
            "rad" => Some(Self::Radians),
            "grad" => Some(Self::Gradians),
            "turn" => Some(Self::Turns),
            _ => None,
        }
    }
}

/// A CSS <angle> value with unit. The sign is kept; no range is enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    #[inline]
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// The angle in degrees. `rad`, `grad` and `turn` are converted; `deg` passes through.
    pub fn to_degrees(self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Radians => self.value.to_degrees(),
            AngleUnit::Gradians => self.value * DEGREES_PER_GRADIAN,
            AngleUnit::Turns => self.value * DEGREES_PER_TURN,
        }
    }

    /// The angle in radians, always computed through the degree value.
    pub fn to_radians(self) -> f64 {
        self.to_degrees().to_radians()
    }
}

/// Parse a CSS <angle> (§6.1): a single dimension token with a `deg`, `rad`,
/// `grad` or `turn` unit.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an `<angle>`.
pub fn parse_angle(input: &mut Parser) -> Result<Angle, ParseError> {
    let start = input.position();
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    if let Token::Dimension { value, unit, .. } = token
        && let Some(angle_unit) = AngleUnit::from_suffix(unit.as_ref())
    {
        let written = written_value(input, start, unit.len()).unwrap_or_else(|| f64::from(value));
        return Ok(Angle::new(written, angle_unit));
    }
    Err(ParseError::UnexpectedToken)
}

/// Parse a pixel <length> (§6.2). Unitless zero is accepted.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `px` length.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    let start = input.position();
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    match token {
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => Ok(Length(
            written_value(input, start, unit.len()).unwrap_or_else(|| f64::from(value)),
        )),
        Token::Number { value: 0.0, .. } => Ok(Length(0.0)),
        _ => Err(ParseError::UnexpectedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use cssparser::ParserInput;

    const EPSILON: f64 = 1e-9;

    fn angle(text: &str) -> Result<Angle, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_angle(&mut parser)
    }

    fn radians(text: &str) -> f64 {
        angle(text).map_or(f64::NAN, Angle::to_radians)
    }

    #[test]
    fn converts_every_unit_through_degrees() {
        assert!((radians("45deg") - FRAC_PI_4).abs() < EPSILON);
        assert!((radians("0.5turn") - PI).abs() < EPSILON);
        assert!((radians("100grad") - FRAC_PI_2).abs() < EPSILON);
        assert!((radians("1rad") - 1.0).abs() < 1e-6);
    }

    #[test]
    fn fractional_values_keep_their_digits() {
        assert_eq!(angle("0.1rad"), Ok(Angle::new(0.1, AngleUnit::Radians)));
        assert_eq!(angle("12.3deg"), Ok(Angle::new(12.3, AngleUnit::Degrees)));
        assert!((radians("0.1rad") - 0.1).abs() < 1e-15);

        let mut input = ParserInput::new("33.3px");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parse_length(&mut parser), Ok(Length(33.3)));
    }

    #[test]
    fn keeps_sign() {
        assert!((radians("-90deg") + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn unit_is_case_insensitive() {
        assert_eq!(angle("90DEG"), Ok(Angle::new(90.0, AngleUnit::Degrees)));
    }

    #[test]
    fn rejects_non_angles() {
        assert_eq!(angle("90"), Err(ParseError::UnexpectedToken));
        assert_eq!(angle("90px"), Err(ParseError::UnexpectedToken));
        assert_eq!(angle("to top"), Err(ParseError::UnexpectedToken));
    }

    #[test]
    fn parses_pixel_lengths() {
        let mut input = ParserInput::new("100px");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parse_length(&mut parser), Ok(Length(100.0)));

        let mut zero_input = ParserInput::new("0");
        let mut zero_parser = Parser::new(&mut zero_input);
        assert_eq!(parse_length(&mut zero_parser), Ok(Length(0.0)));

        let mut em_input = ParserInput::new("2em");
        let mut em_parser = Parser::new(&mut em_input);
        assert_eq!(parse_length(&mut em_parser), Err(ParseError::UnexpectedToken));
    }
}

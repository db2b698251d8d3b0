//! Spec: CSS Images 3 §3.1.1 — `linear-gradient()` syntax, the gradient direction.
//! <https://www.w3.org/TR/css-images-3/#linear-gradient-syntax>
//!
//! Angles are measured clockwise from "up": `0` points to the top, `π/2` to
//! the right, `π` to the bottom and `3π/2` to the left. Values are not
//! wrapped into `[0, 2π)`; consumers take them modulo `2π` when they need to.

use crate::types::BoxBounds;
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
use css_values_units::{Angle, ParseError, parse_angle};
use cssparser::{Parser, ParserInput};

/// The direction of a linear gradient: one of the eight `to <side-or-corner>`
/// keywords, or an explicit `<angle>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineDirection {
    ToTop,
    ToTopRight,
    ToRight,
    ToBottomRight,
    ToBottom,
    ToBottomLeft,
    ToLeft,
    ToTopLeft,
    Angle(Angle),
}

/// A single side keyword following `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Parse one side keyword.
fn parse_side(input: &mut Parser) -> Result<Side, ParseError> {
    let ident = input
        .expect_ident()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    match ident.to_ascii_lowercase().as_str() {
        "top" => Ok(Side::Top),
        "right" => Ok(Side::Right),
        "bottom" => Ok(Side::Bottom),
        "left" => Ok(Side::Left),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Angle from "up" to the top-right corner, seen from the box center.
///
/// Depends on the box aspect ratio: `acos((width / 2) / (diagonal / 2))`.
/// A box with no diagonal is treated as square.
pub fn corner_angle(bounds: &BoxBounds) -> f64 {
    let diagonal = bounds.diagonal();
    if diagonal <= 0.0 {
        return FRAC_PI_4;
    }
    ((bounds.width / 2.0) / (diagonal / 2.0)).acos()
}

impl LineDirection {
    /// Combine one or two sides (in either order) into a direction.
    fn from_sides(first: Side, second: Option<Side>) -> Option<Self> {
        match (first, second) {
            (Side::Top, None) => Some(Self::ToTop),
            (Side::Right, None) => Some(Self::ToRight),
            (Side::Bottom, None) => Some(Self::ToBottom),
            (Side::Left, None) => Some(Self::ToLeft),
            (Side::Top, Some(Side::Right)) | (Side::Right, Some(Side::Top)) => {
                Some(Self::ToTopRight)
            }
            (Side::Bottom, Some(Side::Right)) | (Side::Right, Some(Side::Bottom)) => {
                Some(Self::ToBottomRight)
            }
            (Side::Bottom, Some(Side::Left)) | (Side::Left, Some(Side::Bottom)) => {
                Some(Self::ToBottomLeft)
            }
            (Side::Top, Some(Side::Left)) | (Side::Left, Some(Side::Top)) => {
                Some(Self::ToTopLeft)
            }
            _ => None,
        }
    }

    /// Parse `to <side-or-corner>` or an `<angle>`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` when the input is neither.
    pub fn parse(input: &mut Parser) -> Result<Self, ParseError> {
        if let Ok(angle) = input.try_parse(parse_angle) {
            return Ok(Self::Angle(angle));
        }
        input
            .expect_ident_matching("to")
            .map_err(|_| ParseError::UnexpectedToken)?;
        let first = parse_side(input)?;
        let second = input.try_parse(parse_side).ok();
        Self::from_sides(first, second).ok_or(ParseError::UnexpectedToken)
    }

    /// Parse a whole string as a direction; trailing tokens are an error.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` when `text` is not exactly one direction.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let direction = Self::parse(&mut parser)?;
        parser
            .expect_exhausted()
            .map_err(|_| ParseError::UnexpectedToken)?;
        Ok(direction)
    }

    /// Resolve the direction to radians. Corner keywords depend on `bounds`.
    pub fn resolve(self, bounds: &BoxBounds) -> f64 {
        match self {
            Self::ToTop => 0.0,
            Self::ToTopRight => corner_angle(bounds),
            Self::ToRight => FRAC_PI_2,
            Self::ToBottomRight => PI - corner_angle(bounds),
            Self::ToBottom => PI,
            Self::ToBottomLeft => PI + corner_angle(bounds),
            Self::ToLeft => 3.0 * FRAC_PI_2,
            Self::ToTopLeft => TAU - corner_angle(bounds),
            Self::Angle(angle) => angle.to_radians(),
        }
    }
}

/// Resolve a direction keyword or an angle with unit to radians.
///
/// Returns `None` when `text` is neither.
pub fn resolve_angle(text: &str, bounds: &BoxBounds) -> Option<f64> {
    LineDirection::from_text(text)
        .ok()
        .map(|direction| direction.resolve(bounds))
}

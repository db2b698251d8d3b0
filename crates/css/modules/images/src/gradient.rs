//! Linear gradient model built from a computed `background-image` layer.
//!
//! The argument list is split on top-level commas by cssparser's block-aware
//! parser, so the commas inside `rgb(...)` never separate arguments. Each
//! argument is then classified as a direction, a color stop, or an
//! interpolation hint.

use crate::chapter_3_1_linear_gradient_syntax::LineDirection;
use crate::chapter_3_4_color_stop_fixup::{StopPosition, normalize};
use crate::gradient_line::GradientLine;
use crate::types::BoxBounds;
use core::f64::consts::PI;
use css_backgrounds_borders::ParsedImage;
use css_values_units::{
    ComputedColor, ParseError, Percentage, parse_color, parse_length, parse_number,
    parse_percentage,
};
use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};
use log::{debug, warn};
use serde::Serialize;

/// Angle used when the gradient has no direction argument (`to bottom`).
pub const DEFAULT_ANGLE: f64 = PI;

/// One classified argument of a gradient's argument list.
#[derive(Clone, Debug, PartialEq)]
pub enum GradientPart {
    /// A direction, already resolved against the gradient box.
    Angle { radians: f64 },
    /// A color with an optional position.
    Stop {
        color: ComputedColor,
        position: Option<StopPosition>,
    },
    /// A lone position between two stops.
    Hint(StopPosition),
}

/// A stop with a definite position, in percent of the gradient line from `start`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorStop {
    /// Canonical `rgb(...)`, `rgba(...)` or `transparent`.
    pub color: String,
    pub position: f64,
}

/// Everything a renderer needs to draw the geometry of one linear gradient.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientModel {
    /// Radians, clockwise from up.
    pub angle: f64,
    pub gradient_line: GradientLine,
    pub stops: Vec<ColorStop>,
    /// Set for `repeating-linear-gradient`.
    pub repeating: bool,
    /// Interpolation hint positions, in percent of the gradient line.
    pub hints: Vec<f64>,
}

/// Parse a stop position: `N%`, `Npx`, or a bare number read as a percentage.
///
/// Other dimensions and math functions are consumed and yield `Ok(None)`: the
/// stop exists but its position is filled in later.
fn parse_position(input: &mut Parser) -> Result<Option<StopPosition>, ParseError> {
    if let Ok(percentage) = input.try_parse(parse_percentage) {
        return Ok(Some(StopPosition::Percentage(percentage)));
    }
    if let Ok(number) = input.try_parse(parse_number) {
        return Ok(Some(StopPosition::Percentage(Percentage(number))));
    }
    if let Ok(length) = input.try_parse(parse_length) {
        return Ok(Some(StopPosition::Length(length)));
    }
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    match token {
        Token::Dimension { .. } | Token::Function(_) => Ok(None),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a direction that makes up the whole argument.
fn parse_whole_direction(input: &mut Parser, bounds: &BoxBounds) -> Result<f64, ParseError> {
    let direction = LineDirection::parse(input)?;
    input
        .expect_exhausted()
        .map_err(|_| ParseError::UnexpectedToken)?;
    Ok(direction.resolve(bounds))
}

/// Classify one comma-separated argument into zero, one or two parts.
///
/// A stop with two positions becomes two stops of the same color.
fn classify_argument(input: &mut Parser, bounds: &BoxBounds) -> Vec<GradientPart> {
    let start = input.position();
    if let Ok(radians) = input.try_parse(|argument| parse_whole_direction(argument, bounds)) {
        return vec![GradientPart::Angle { radians }];
    }

    if let Ok(color) = input.try_parse(parse_color) {
        let mut positions = Vec::with_capacity(2);
        while positions.len() < 2 {
            match input.try_parse(parse_position) {
                Ok(position) => positions.push(position),
                Err(_) => break,
            }
        }
        if positions.is_empty() {
            positions.push(None);
        }
        return positions
            .into_iter()
            .map(|position| GradientPart::Stop { color, position })
            .collect();
    }

    if let Ok(Some(position)) = input.try_parse(|argument| {
        let hint = parse_position(argument)?;
        argument
            .expect_exhausted()
            .map_err(|_| ParseError::UnexpectedToken)?;
        Ok::<_, ParseError>(hint)
    }) {
        return vec![GradientPart::Hint(position)];
    }

    while input.next().is_ok() {}
    warn!(
        "[GRADIENT] skipping unrecognized argument {:?}",
        input.slice_from(start).trim()
    );
    Vec::new()
}

/// Split a gradient argument list into classified parts, in order.
pub fn parse_parts(arguments: &str, bounds: &BoxBounds) -> Vec<GradientPart> {
    let mut input = ParserInput::new(arguments);
    let mut parser = Parser::new(&mut input);
    let result: Result<Vec<Vec<GradientPart>>, CssParseError<'_, ()>> =
        parser.parse_comma_separated(|argument| {
            let parts = classify_argument(argument, bounds);
            // Leave nothing behind so the comma-separated parse never fails.
            while argument.next().is_ok() {}
            Ok(parts)
        });
    result
        .map(|groups| groups.into_iter().flatten().collect())
        .unwrap_or_default()
}

/// Build the [`GradientModel`] for one `background-image` layer.
///
/// Returns `None` for anything other than `linear-gradient` and
/// `repeating-linear-gradient`, and for a gradient without color stops.
pub fn parse_gradient(image: &ParsedImage<'_>, bounds: &BoxBounds) -> Option<GradientModel> {
    if !image.function.is_linear_gradient() {
        debug!(
            "[GRADIENT] {} is not visualized",
            image.function.name()
        );
        return None;
    }

    let mut parts = parse_parts(image.inner(), bounds).into_iter().peekable();
    let angle = match parts.peek() {
        Some(&GradientPart::Angle { radians }) => {
            parts.next();
            radians
        }
        _ => DEFAULT_ANGLE,
    };
    let gradient_line = GradientLine::compute(angle, bounds);

    let mut colors = Vec::new();
    let mut positions = Vec::new();
    let mut hints = Vec::new();
    for part in parts {
        match part {
            GradientPart::Stop { color, position } => {
                colors.push(color.to_string());
                positions.push(position.and_then(|stop| stop.resolve(gradient_line.length)));
            }
            GradientPart::Hint(position) => {
                hints.extend(position.resolve(gradient_line.length));
            }
            GradientPart::Angle { radians } => {
                warn!("[GRADIENT] ignoring direction {radians} after the first argument");
            }
        }
    }
    if colors.is_empty() {
        warn!("[GRADIENT] no color stops in {:?}", image.raw_value);
        return None;
    }

    normalize(&mut positions);
    let stops = colors
        .into_iter()
        .zip(positions)
        .map(|(color, position)| ColorStop {
            color,
            position: position.unwrap_or_default(),
        })
        .collect();

    Some(GradientModel {
        angle,
        gradient_line,
        stops,
        repeating: image.function.is_repeating(),
        hints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;
    use css_values_units::Length;

    const EPSILON: f64 = 1e-9;
    const BOUNDS: BoxBounds = BoxBounds::new(0.0, 0.0, 200.0, 100.0);

    fn stop(color: ComputedColor, position: Option<StopPosition>) -> GradientPart {
        GradientPart::Stop { color, position }
    }

    #[test]
    fn nested_commas_do_not_split_arguments() {
        let parts = parse_parts("rgba(0, 0, 0, 0.6), rgb(1, 2, 3) 40%", &BOUNDS);
        assert_eq!(
            parts,
            vec![
                stop(ComputedColor::Rgba([0.0, 0.0, 0.0, 0.6]), None),
                stop(
                    ComputedColor::Rgb([1.0, 2.0, 3.0]),
                    Some(StopPosition::Percentage(Percentage(40.0)))
                ),
            ]
        );
    }

    #[test]
    fn leading_direction_is_an_angle_part() {
        let parts = parse_parts("to right, transparent, rgb(0, 0, 0)", &BOUNDS);
        assert!(matches!(
            parts.first(),
            Some(GradientPart::Angle { radians }) if (radians - FRAC_PI_2).abs() < EPSILON
        ));
        assert_eq!(parts.get(1), Some(&stop(ComputedColor::Transparent, None)));
    }

    #[test]
    fn pixel_and_bare_number_positions() {
        let parts = parse_parts("rgb(0, 0, 0) 10px, rgb(9, 9, 9) 30", &BOUNDS);
        assert_eq!(
            parts,
            vec![
                stop(
                    ComputedColor::Rgb([0.0, 0.0, 0.0]),
                    Some(StopPosition::Length(Length(10.0)))
                ),
                stop(
                    ComputedColor::Rgb([9.0, 9.0, 9.0]),
                    Some(StopPosition::Percentage(Percentage(30.0)))
                ),
            ]
        );
    }

    #[test]
    fn double_position_stop_expands() {
        let parts = parse_parts("rgb(0, 0, 0) 10% 20%", &BOUNDS);
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts.get(1),
            Some(&stop(
                ComputedColor::Rgb([0.0, 0.0, 0.0]),
                Some(StopPosition::Percentage(Percentage(20.0)))
            ))
        );
    }

    #[test]
    fn fractional_positions_are_exact() {
        let parts = parse_parts("rgb(0, 0, 0) 33.3%, rgb(1, 1, 1) 12.5px, rgb(2, 2, 2) 66.7", &BOUNDS);
        assert_eq!(
            parts,
            vec![
                stop(
                    ComputedColor::Rgb([0.0, 0.0, 0.0]),
                    Some(StopPosition::Percentage(Percentage(33.3)))
                ),
                stop(
                    ComputedColor::Rgb([1.0, 1.0, 1.0]),
                    Some(StopPosition::Length(Length(12.5)))
                ),
                stop(
                    ComputedColor::Rgb([2.0, 2.0, 2.0]),
                    Some(StopPosition::Percentage(Percentage(66.7)))
                ),
            ]
        );
    }

    #[test]
    fn unresolvable_position_stays_undefined() {
        let parts = parse_parts("rgb(0, 0, 0) calc(10% + 5px), rgb(1, 1, 1) 3em", &BOUNDS);
        assert_eq!(
            parts,
            vec![
                stop(ComputedColor::Rgb([0.0, 0.0, 0.0]), None),
                stop(ComputedColor::Rgb([1.0, 1.0, 1.0]), None),
            ]
        );
    }

    #[test]
    fn lone_position_is_a_hint() {
        let parts = parse_parts("rgb(0, 0, 0), 30%, rgb(1, 1, 1)", &BOUNDS);
        assert_eq!(
            parts.get(1),
            Some(&GradientPart::Hint(StopPosition::Percentage(Percentage(30.0))))
        );
    }

    #[test]
    fn unknown_argument_is_skipped() {
        let parts = parse_parts("red, rgb(1, 1, 1)", &BOUNDS);
        assert_eq!(parts, vec![stop(ComputedColor::Rgb([1.0, 1.0, 1.0]), None)]);
    }
}

//! CSS Values and Units Module Level 3 — value primitives read from computed styles.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// One module per chapter of CSS Values 3.
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_9_colors;

use core::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error;

// Re-exports for ergonomic access from other crates.
pub use chapter_4_numbers::parse_number;
pub use chapter_5_percentages::{Percentage, parse_percentage};
pub use chapter_6_dimensions::{Angle, AngleUnit, Length, parse_angle, parse_length};
pub use chapter_9_colors::{ComputedColor, parse_color};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnexpectedToken => write!(formatter, "unexpected token"),
        }
    }
}

impl Error for ParseError {}

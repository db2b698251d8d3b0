//! CSS Backgrounds and Borders Module Level 3 — the `background-image` layer list.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/#background-image>
//!
//! Only computed (browser-serialized) values are supported. Author-written CSS
//! with arbitrary whitespace is out of scope; see [`MalformedInputError`].

#![forbid(unsafe_code)]

pub mod chapter_3_3_background_image;
pub mod tokenizer;

use core::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error;

pub use chapter_3_3_background_image::{ParsedImage, parse_background_image, split_images};
pub use tokenizer::{ImageFunction, Token, TokenKind, tokenize};

/// Raised when a `background-image` value is not in computed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedInputError {
    /// No known image function name starts at `offset`.
    UnknownFunction { offset: usize },
    /// A character that cannot appear at `offset` in the current tokenizer state.
    UnexpectedCharacter { offset: usize, found: char },
    /// The image argument list opened before `offset` is never closed.
    UnbalancedParenthesis { offset: usize },
}

impl Display for MalformedInputError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnknownFunction { offset } => {
                write!(formatter, "unknown image function at byte {offset}")
            }
            Self::UnexpectedCharacter { offset, found } => {
                write!(formatter, "unexpected character {found:?} at byte {offset}")
            }
            Self::UnbalancedParenthesis { offset } => {
                write!(formatter, "unbalanced parenthesis in value starting at byte {offset}")
            }
        }
    }
}

impl Error for MalformedInputError {}

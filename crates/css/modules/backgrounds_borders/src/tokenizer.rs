//! Tokenizer for computed `background-image` values.
//!
//! A computed value is a comma-separated list of `<image>` functions:
//! `linear-gradient(...), url("..."), ...`. Each image produces the fixed
//! token cycle `function ( value )`, and images are separated by a `,` token.
//! The tokenizer never looks inside the value beyond balancing parentheses.

use crate::MalformedInputError;
use log::trace;

/// The `<image>` functions a computed `background-image` may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFunction {
    RepeatingLinearGradient,
    LinearGradient,
    RepeatingRadialGradient,
    RadialGradient,
    Url,
    MozElement,
}

impl ImageFunction {
    /// Match order. A name must come before any other name it starts with.
    pub const PRIORITY: [Self; 6] = [
        Self::RepeatingLinearGradient,
        Self::LinearGradient,
        Self::RepeatingRadialGradient,
        Self::RadialGradient,
        Self::Url,
        Self::MozElement,
    ];

    /// The function name as serialized, without the opening parenthesis.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RepeatingLinearGradient => "repeating-linear-gradient",
            Self::LinearGradient => "linear-gradient",
            Self::RepeatingRadialGradient => "repeating-radial-gradient",
            Self::RadialGradient => "radial-gradient",
            Self::Url => "url",
            Self::MozElement => "-moz-element",
        }
    }

    /// The first function in [`Self::PRIORITY`] whose name starts `source`.
    pub fn match_prefix(source: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|function| source.starts_with(function.name()))
    }

    /// Look up a function by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|function| function.name() == name)
    }

    /// Whether this is `linear-gradient` or `repeating-linear-gradient`.
    pub const fn is_linear_gradient(self) -> bool {
        matches!(self, Self::LinearGradient | Self::RepeatingLinearGradient)
    }

    /// Whether this is one of the `repeating-*-gradient` functions.
    pub const fn is_repeating(self) -> bool {
        matches!(
            self,
            Self::RepeatingLinearGradient | Self::RepeatingRadialGradient
        )
    }
}

/// Token categories, in the order they cycle for one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Function,
    OpenParen,
    Value,
    CloseParen,
    Comma,
}

/// One token borrowed from the tokenized source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Source text of the token; always `&source[start..end]`.
    pub value: &'src str,
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
}

impl<'src> Token<'src> {
    fn new(kind: TokenKind, source: &'src str, start: usize, end: usize) -> Self {
        Self {
            kind,
            value: &source[start..end],
            start,
            end,
        }
    }
}

/// What the tokenizer expects at the current offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expect {
    Function,
    OpenParen,
    Value,
    Separator,
}

/// Skip ASCII whitespace from `offset` and require `wanted` at the first other character.
///
/// Returns `Ok(None)` when only whitespace remains.
fn expect_char(
    source: &str,
    offset: usize,
    wanted: char,
) -> Result<Option<usize>, MalformedInputError> {
    let rest = &source[offset..];
    let Some((skipped, found)) = rest
        .char_indices()
        .find(|&(_, character)| !character.is_ascii_whitespace())
    else {
        return Ok(None);
    };
    if found == wanted {
        Ok(Some(offset + skipped))
    } else {
        Err(MalformedInputError::UnexpectedCharacter {
            offset: offset + skipped,
            found,
        })
    }
}

/// Find the first `)` at or after `from` that closes the already consumed `(`.
///
/// Parentheses inside quoted strings (as in `url("a(1).png")`) are ignored.
fn find_unmatched_close(source: &str, from: usize) -> Option<usize> {
    let mut depth = 0_usize;
    let mut quote: Option<u8> = None;
    for (index, byte) in source.bytes().enumerate().skip(from) {
        match (quote, byte) {
            (Some(open), _) if byte == open => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'(') => depth += 1,
            (None, b')') if depth == 0 => return Some(index),
            (None, b')') => depth -= 1,
            (None, _) => {}
        }
    }
    None
}

/// Tokenize a computed `background-image` value.
///
/// After a `,` separator exactly one character (the serializer's space) is
/// skipped before the next function name.
///
/// # Errors
/// Returns [`MalformedInputError`] when the input is not a computed value:
/// an unknown function name, a stray character between tokens, or an argument
/// list that never closes.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, MalformedInputError> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut expect = Expect::Function;

    while offset < source.len() {
        match expect {
            Expect::Function => {
                let function = ImageFunction::match_prefix(&source[offset..])
                    .ok_or(MalformedInputError::UnknownFunction { offset })?;
                let end = offset + function.name().len();
                tokens.push(Token::new(TokenKind::Function, source, offset, end));
                offset = end;
                expect = Expect::OpenParen;
            }
            Expect::OpenParen => {
                let Some(open) = expect_char(source, offset, '(')? else {
                    break;
                };
                tokens.push(Token::new(TokenKind::OpenParen, source, open, open + 1));
                offset = open + 1;
                expect = Expect::Value;
            }
            Expect::Value => {
                let close = find_unmatched_close(source, offset)
                    .ok_or(MalformedInputError::UnbalancedParenthesis { offset })?;
                tokens.push(Token::new(TokenKind::Value, source, offset, close));
                tokens.push(Token::new(TokenKind::CloseParen, source, close, close + 1));
                offset = close + 1;
                expect = Expect::Separator;
            }
            Expect::Separator => {
                let Some(comma) = expect_char(source, offset, ',')? else {
                    break;
                };
                tokens.push(Token::new(TokenKind::Comma, source, comma, comma + 1));
                let after_comma = comma + 1;
                let skipped = source[after_comma..]
                    .chars()
                    .next()
                    .map_or(0, char::len_utf8);
                offset = after_comma + skipped;
                expect = Expect::Function;
            }
        }
    }

    if matches!(expect, Expect::OpenParen | Expect::Value) {
        return Err(MalformedInputError::UnbalancedParenthesis { offset });
    }
    trace!(
        "[BG-TOKENS] {} tokens from {} bytes",
        tokens.len(),
        source.len()
    );
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .map(|tokens| tokens.iter().map(|token| token.kind).collect())
            .unwrap_or_default()
    }

    #[test]
    fn single_image_cycle() {
        assert_eq!(
            kinds("linear-gradient(rgb(0, 0, 0), transparent)"),
            vec![
                TokenKind::Function,
                TokenKind::OpenParen,
                TokenKind::Value,
                TokenKind::CloseParen
            ]
        );
    }

    #[test]
    fn value_spans_nested_parentheses() {
        let source = "linear-gradient(45deg, rgba(0, 0, 0, 0.6), rgb(1, 2, 3) 50%)";
        let tokens = tokenize(source).unwrap_or_default();
        let value = tokens.get(2).map(|token| token.value);
        assert_eq!(value, Some("45deg, rgba(0, 0, 0, 0.6), rgb(1, 2, 3) 50%"));
        assert_eq!(tokens.get(2).map(|token| token.start), Some(16));
        assert_eq!(tokens.get(3).map(|token| token.end), Some(source.len()));
    }

    #[test]
    fn repeating_name_wins_over_plain_name() {
        let tokens = tokenize("repeating-linear-gradient(red, blue)").unwrap_or_default();
        assert_eq!(
            tokens.first().map(|token| token.value),
            Some("repeating-linear-gradient")
        );
    }

    #[test]
    fn function_families() {
        let repeating: Vec<ImageFunction> = ImageFunction::PRIORITY
            .into_iter()
            .filter(|function| function.is_repeating())
            .collect();
        assert_eq!(
            repeating,
            vec![
                ImageFunction::RepeatingLinearGradient,
                ImageFunction::RepeatingRadialGradient
            ]
        );
        assert!(ImageFunction::RepeatingLinearGradient.is_linear_gradient());
        assert!(!ImageFunction::RadialGradient.is_linear_gradient());
    }

    #[test]
    fn comma_separates_images() {
        assert_eq!(
            kinds("url(\"a.png\"), -moz-element(#box)"),
            vec![
                TokenKind::Function,
                TokenKind::OpenParen,
                TokenKind::Value,
                TokenKind::CloseParen,
                TokenKind::Comma,
                TokenKind::Function,
                TokenKind::OpenParen,
                TokenKind::Value,
                TokenKind::CloseParen
            ]
        );
    }

    #[test]
    fn quoted_parentheses_do_not_close_the_value() {
        let tokens = tokenize("url(\"odd).png\")").unwrap_or_default();
        assert_eq!(tokens.get(2).map(|token| token.value), Some("\"odd).png\""));
    }

    #[test]
    fn offsets_are_half_open_byte_ranges() {
        let source = "linear-gradient(rgb(0, 0, 0), rgb(9, 9, 9)), url(x)";
        for token in tokenize(source).unwrap_or_default() {
            assert_eq!(&source[token.start..token.end], token.value);
        }
    }

    #[test]
    fn unknown_function_is_reported() {
        assert_eq!(
            tokenize("conic-gradient(red, blue)"),
            Err(MalformedInputError::UnknownFunction { offset: 0 })
        );
    }

    #[test]
    fn unbalanced_value_is_reported() {
        assert_eq!(
            tokenize("linear-gradient(rgb(0, 0, 0)"),
            Err(MalformedInputError::UnbalancedParenthesis { offset: 16 })
        );
    }

    #[test]
    fn stray_character_after_image_is_reported() {
        assert_eq!(
            tokenize("url(a) url(b)"),
            Err(MalformedInputError::UnexpectedCharacter {
                offset: 7,
                found: 'u'
            })
        );
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert_eq!(tokenize(""), Ok(Vec::new()));
    }
}

//! Spec: CSS Backgrounds 3 §3.3 — `background-image` layers.
//! <https://www.w3.org/TR/css-backgrounds-3/#background-image>
//!
//! Layers are kept in declaration order: index 0 is the top-most painted layer.

use crate::MalformedInputError;
use crate::tokenizer::{ImageFunction, Token, TokenKind, tokenize};
use log::{debug, warn};

/// Tokens per image (`function ( value )`) plus the trailing separator slot.
const IMAGE_STRIDE: usize = 5;

/// One `<image>` layer of a `background-image` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedImage<'src> {
    /// The image function, e.g. `linear-gradient`.
    pub function: ImageFunction,
    /// The whole image text: the concatenation of its four tokens.
    pub raw_value: String,
    /// `function`, `(`, `value`, `)` in that order.
    pub tokens: [Token<'src>; 4],
}

impl<'src> ParsedImage<'src> {
    /// The argument list between the outer parentheses.
    pub const fn inner(&self) -> &'src str {
        self.tokens[2].value
    }
}

/// Group a well-formed token stream into one [`ParsedImage`] per layer.
///
/// Walks the tokens in strides of five and ignores the separator slot. A
/// stride that does not hold the `function ( value )` cycle is skipped.
pub fn split_images<'src>(tokens: &[Token<'src>]) -> Vec<ParsedImage<'src>> {
    let mut images = Vec::with_capacity(tokens.len().div_ceil(IMAGE_STRIDE));
    for group in tokens.chunks(IMAGE_STRIDE) {
        let [function, open, value, close, ..] = group else {
            warn!("[BG-SPLIT] truncated image group of {} tokens", group.len());
            continue;
        };
        let cycle = [function.kind, open.kind, value.kind, close.kind];
        let Some(image_function) = ImageFunction::from_name(function.value) else {
            warn!("[BG-SPLIT] unknown image function {:?}", function.value);
            continue;
        };
        if cycle
            != [
                TokenKind::Function,
                TokenKind::OpenParen,
                TokenKind::Value,
                TokenKind::CloseParen,
            ]
        {
            warn!("[BG-SPLIT] unexpected token cycle {cycle:?}");
            continue;
        }
        let group_tokens = [*function, *open, *value, *close];
        images.push(ParsedImage {
            function: image_function,
            raw_value: group_tokens.iter().map(|token| token.value).collect(),
            tokens: group_tokens,
        });
    }
    images
}

/// Tokenize and split a computed `background-image` value.
///
/// The keyword `none` (no layers) yields an empty list.
///
/// # Errors
/// Propagates [`MalformedInputError`] from [`tokenize`].
pub fn parse_background_image(value: &str) -> Result<Vec<ParsedImage<'_>>, MalformedInputError> {
    if value.trim() == "none" {
        return Ok(Vec::new());
    }
    let tokens = tokenize(value)?;
    let images = split_images(&tokens);
    debug!("[BG-SPLIT] {} image layer(s)", images.len());
    Ok(images)
}

//! CSS Images Module Level 3 — linear gradient geometry.
//! Spec: <https://www.w3.org/TR/css-images-3/#linear-gradients>
//!
//! Turns a computed `background-image` value into a resolved model: the
//! gradient angle, the gradient line through the element's box, and every
//! color stop with a definite position along that line.

#![forbid(unsafe_code)]

pub mod chapter_3_1_linear_gradient_syntax;
pub mod chapter_3_4_color_stop_fixup;
pub mod gradient;
pub mod gradient_line;
pub mod types;

use css_backgrounds_borders::{MalformedInputError, parse_background_image};
use log::debug;

pub use chapter_3_1_linear_gradient_syntax::{LineDirection, corner_angle, resolve_angle};
pub use chapter_3_4_color_stop_fixup::{StopPosition, fixup, normalize};
pub use gradient::{
    ColorStop, DEFAULT_ANGLE, GradientModel, GradientPart, parse_gradient, parse_parts,
};
pub use gradient_line::{GradientLine, compute_line};
pub use types::{BoxBounds, Point};

/// Parse a computed `background-image` value and build the model for layer `index`.
///
/// Returns `Ok(None)` when there is no such layer or it is not a linear gradient.
///
/// # Errors
/// Returns [`MalformedInputError`] when `background_image` is not a computed value.
pub fn inspect(
    background_image: &str,
    bounds: &BoxBounds,
    index: usize,
) -> Result<Option<GradientModel>, MalformedInputError> {
    let images = parse_background_image(background_image)?;
    let Some(image) = images.get(index) else {
        debug!(
            "[GRADIENT] layer {index} requested, {} available",
            images.len()
        );
        return Ok(None);
    };
    Ok(parse_gradient(image, bounds))
}

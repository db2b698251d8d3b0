//! Configuration for the gradient inspector.
//!
//! The box geometry and the image layer to inspect come from environment
//! variables, and command-line flags override them.

use anyhow::{Result, anyhow};
use css_images::BoxBounds;
use std::env;

/// Box used when no geometry is configured, matching a default `<canvas>`.
const DEFAULT_WIDTH: f64 = 300.0;
const DEFAULT_HEIGHT: f64 = 150.0;

/// Runtime configuration for one inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectorConfig {
    /// The element's gradient box.
    pub bounds: BoxBounds,
    /// Which `background-image` layer to model.
    pub image_index: usize,
    /// Pretty-print the JSON report.
    pub pretty: bool,
}

impl Default for InspectorConfig {
    #[inline]
    fn default() -> Self {
        Self::new(
            BoxBounds::new(0.0, 0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT),
            0,
            false,
        )
    }
}

impl InspectorConfig {
    /// Construct a config with explicit values. Negative sizes are clamped to zero.
    #[inline]
    #[must_use]
    pub fn new(bounds: BoxBounds, image_index: usize, pretty: bool) -> Self {
        Self {
            bounds: BoxBounds::new(
                bounds.x,
                bounds.y,
                bounds.width.max(0.0),
                bounds.height.max(0.0),
            ),
            image_index,
            pretty,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `GRADIENT_INSPECTOR_X`, `GRADIENT_INSPECTOR_Y`: box origin (default: 0)
    /// - `GRADIENT_INSPECTOR_WIDTH`, `GRADIENT_INSPECTOR_HEIGHT`: box size (default: 300x150)
    /// - `GRADIENT_INSPECTOR_IMAGE_INDEX`: layer to inspect (default: 0)
    /// - `GRADIENT_INSPECTOR_PRETTY`: set to "1" to pretty-print
    ///
    /// Unparsable values fall back to their defaults.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str, default: f64| {
            lookup(key)
                .and_then(|val| val.trim().parse::<f64>().ok())
                .filter(|val| val.is_finite())
                .unwrap_or(default)
        };
        let bounds = BoxBounds::new(
            number("GRADIENT_INSPECTOR_X", 0.0),
            number("GRADIENT_INSPECTOR_Y", 0.0),
            number("GRADIENT_INSPECTOR_WIDTH", DEFAULT_WIDTH),
            number("GRADIENT_INSPECTOR_HEIGHT", DEFAULT_HEIGHT),
        );
        let image_index = lookup("GRADIENT_INSPECTOR_IMAGE_INDEX")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(0);
        let pretty = lookup("GRADIENT_INSPECTOR_PRETTY").as_deref() == Some("1");
        Self::new(bounds, image_index, pretty)
    }

    /// Apply command-line flags on top of this config.
    ///
    /// Recognizes `--bounds=x,y,w,h`, `--index=N` and `--pretty`. Every other
    /// argument is part of the `background-image` value; they are joined with
    /// spaces so an unquoted value survives shell splitting.
    ///
    /// # Errors
    /// Returns an error for a malformed flag or when no value is given.
    pub fn apply_args<I>(self, args: I) -> Result<(Self, String)>
    where
        I: IntoIterator<Item = String>,
    {
        let mut bounds = self.bounds;
        let mut image_index = self.image_index;
        let mut pretty = self.pretty;
        let mut words = Vec::new();
        for arg in args {
            if let Some(rest) = arg.strip_prefix("--bounds=") {
                bounds = parse_bounds(rest)?;
            } else if let Some(rest) = arg.strip_prefix("--index=") {
                image_index = rest
                    .parse()
                    .map_err(|err| anyhow!("invalid --index {rest:?}: {err}"))?;
            } else if arg == "--pretty" {
                pretty = true;
            } else if arg.starts_with("--") {
                return Err(anyhow!("unknown flag {arg}"));
            } else {
                words.push(arg);
            }
        }
        if words.is_empty() {
            return Err(anyhow!(
                "usage: gradient-inspector [--bounds=x,y,w,h] [--index=N] [--pretty] <background-image>"
            ));
        }
        Ok((Self::new(bounds, image_index, pretty), words.join(" ")))
    }
}

/// Parse `x,y,w,h`.
fn parse_bounds(text: &str) -> Result<BoxBounds> {
    let values = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|err| anyhow!("invalid --bounds component {part:?}: {err}"))
        })
        .collect::<Result<Vec<_>>>()?;
    match values.as_slice() {
        &[x, y, width, height] => Ok(BoxBounds::new(x, y, width, height)),
        _ => Err(anyhow!(
            "--bounds takes four numbers, got {}",
            values.len()
        )),
    }
}

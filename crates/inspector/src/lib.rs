//! Gradient inspector: builds a JSON report of the linear gradient geometry
//! behind one `background-image` layer.

#![forbid(unsafe_code)]

pub mod config;

pub use config::InspectorConfig;

use anyhow::{Context as _, Result};
use css_backgrounds_borders::parse_background_image;
use css_images::{GradientModel, parse_gradient};
use gradient_overlay::{DisplayList, Quad, build_overlay};
use log::{debug, info};
use serde::Serialize;

/// Everything the inspector knows about the requested layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Number of layers in the value.
    pub image_count: usize,
    /// The layer this report describes.
    pub index: usize,
    /// Image function of the layer, `None` when there is no such layer.
    pub kind: Option<&'static str>,
    pub model: Option<GradientModel>,
    pub overlay: Option<DisplayList>,
}

/// Build the report for `config.image_index` of `background_image`.
///
/// # Errors
/// Returns an error when the value is not a computed `background-image`.
pub fn inspect_value(background_image: &str, config: &InspectorConfig) -> Result<Report> {
    let images = parse_background_image(background_image)
        .with_context(|| format!("not a computed background-image: {background_image:?}"))?;
    let image = images.get(config.image_index);
    let model = image.and_then(|layer| parse_gradient(layer, &config.bounds));
    let overlay = model
        .as_ref()
        .map(|gradient| build_overlay(&Quad::from_bounds(&config.bounds), gradient));

    if let Some(gradient) = &model {
        info!(
            "[INSPECTOR] layer {} of {}: {} stops, angle {:.4} rad",
            config.image_index,
            images.len(),
            gradient.stops.len(),
            gradient.angle
        );
    } else {
        debug!(
            "[INSPECTOR] layer {} of {} has no linear gradient model",
            config.image_index,
            images.len()
        );
    }

    Ok(Report {
        image_count: images.len(),
        index: config.image_index,
        kind: image.map(|layer| layer.function.name()),
        model,
        overlay,
    })
}

/// Serialize `report` as JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_report(report: &Report, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("serializing inspector report")
}

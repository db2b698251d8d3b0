//! Drawing surface abstraction for overlay display lists.
//!
//! A sink receives one call per item. Stroke widths, colors and dash patterns
//! are the sink's business; the list only carries geometry.

use crate::display_list::{DisplayList, OverlayItem, Quad};
use css_images::Point;

/// Something that can draw overlay items.
pub trait OverlaySink {
    fn box_outline(&mut self, quad: &Quad);

    fn gradient_line(&mut self, start: Point, end: Point);

    fn line_point(&mut self, at: Point);

    /// Drawn dashed.
    fn center_line(&mut self, from: Point, to: Point);

    fn angle_arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    /// Drawn dashed.
    fn perpendicular_line(&mut self, from: Point, to: Point);

    fn stop_marker(&mut self, color: &str, at: Point, rotation: f64, index: usize);

    /// Draw every item of `list` in order.
    fn draw(&mut self, list: &DisplayList) {
        for item in &list.items {
            match item {
                OverlayItem::BoxOutline { quad } => self.box_outline(quad),
                OverlayItem::GradientLine { start, end } => self.gradient_line(*start, *end),
                OverlayItem::LinePoint { at } => self.line_point(*at),
                OverlayItem::CenterLine { from, to } => self.center_line(*from, *to),
                OverlayItem::AngleArc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => self.angle_arc(*center, *radius, *start_angle, *end_angle),
                OverlayItem::PerpendicularLine { from, to } => {
                    self.perpendicular_line(*from, *to);
                }
                OverlayItem::StopMarker {
                    color,
                    at,
                    rotation,
                    index,
                } => self.stop_marker(color, *at, *rotation, *index),
            }
        }
    }
}

/// A sink that rebuilds the items it is asked to draw.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    pub items: Vec<OverlayItem>,
}

impl RecordingSink {
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl OverlaySink for RecordingSink {
    fn box_outline(&mut self, quad: &Quad) {
        self.items.push(OverlayItem::BoxOutline { quad: *quad });
    }

    fn gradient_line(&mut self, start: Point, end: Point) {
        self.items.push(OverlayItem::GradientLine { start, end });
    }

    fn line_point(&mut self, at: Point) {
        self.items.push(OverlayItem::LinePoint { at });
    }

    fn center_line(&mut self, from: Point, to: Point) {
        self.items.push(OverlayItem::CenterLine { from, to });
    }

    fn angle_arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.items.push(OverlayItem::AngleArc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn perpendicular_line(&mut self, from: Point, to: Point) {
        self.items.push(OverlayItem::PerpendicularLine { from, to });
    }

    fn stop_marker(&mut self, color: &str, at: Point, rotation: f64, index: usize) {
        self.items.push(OverlayItem::StopMarker {
            color: color.to_owned(),
            at,
            rotation,
            index,
        });
    }
}

//! Overlay display list primitives.
//!
//! Items are plain geometry in the same coordinate space as the element's
//! box. Styling (stroke colors, dash patterns, label shapes) belongs to the
//! sink that draws them.

use css_images::{BoxBounds, Point};

/// The four corners of an element's border box, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Quad {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub p4: Point,
}

impl Quad {
    /// Build the axis-aligned quad covering `bounds`.
    #[inline]
    pub fn from_bounds(bounds: &BoxBounds) -> Self {
        let right = bounds.x + bounds.width;
        let bottom = bounds.y + bounds.height;
        Self {
            p1: Point::new(bounds.x, bounds.y),
            p2: Point::new(right, bounds.y),
            p3: Point::new(right, bottom),
            p4: Point::new(bounds.x, bottom),
        }
    }

    /// Width and height of the quad's top-left to bottom-right extent.
    #[inline]
    pub fn bounds(&self) -> BoxBounds {
        BoxBounds::new(
            self.p1.x,
            self.p1.y,
            self.p3.x - self.p1.x,
            self.p3.y - self.p1.y,
        )
    }
}

/// A single overlay item, drawn in list order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayItem {
    /// Outline of the gradient box.
    BoxOutline { quad: Quad },
    /// The gradient line from start to end.
    GradientLine { start: Point, end: Point },
    /// A dot at the start, center or end of the gradient line.
    LinePoint { at: Point },
    /// Vertical reference line above the center, the zero of the angle arc.
    CenterLine { from: Point, to: Point },
    /// Arc from straight up to the gradient direction, in canvas radians.
    AngleArc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// Construction line from a gradient line end to the box corner it is perpendicular to.
    PerpendicularLine { from: Point, to: Point },
    /// A color stop label pinned to the gradient line.
    StopMarker {
        color: String,
        at: Point,
        /// Radians; labels alternate sides of the line.
        rotation: f64,
        index: usize,
    },
}

/// An ordered list of overlay items for one gradient.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct DisplayList {
    pub items: Vec<OverlayItem>,
}

impl DisplayList {
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end of the list.
    #[inline]
    pub fn push(&mut self, item: OverlayItem) {
        self.items.push(item);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stop markers only, in stop order.
    pub fn markers(&self) -> impl Iterator<Item = &OverlayItem> {
        self.items
            .iter()
            .filter(|item| matches!(item, OverlayItem::StopMarker { .. }))
    }
}

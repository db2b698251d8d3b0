//! Build the overlay display list for a resolved gradient model.

use crate::display_list::{DisplayList, OverlayItem, Quad};
use core::f64::consts::{FRAC_PI_2, PI, TAU};
use css_images::{GradientModel, Point};
use log::trace;

/// Radius of the angle arc drawn around the gradient line center.
pub const ARC_RADIUS: f64 = 50.0;

/// How far the center line reaches past the arc.
const CENTER_LINE_OVERSHOOT: f64 = 10.0;

/// The point `position` percent along the gradient line, from its start.
pub fn stop_point(model: &GradientModel, position: f64) -> Point {
    let heading = model.angle - FRAC_PI_2;
    let distance = model.gradient_line.length * position / 100.0;
    Point::new(
        heading.cos().mul_add(distance, model.gradient_line.start.x),
        heading.sin().mul_add(distance, model.gradient_line.start.y),
    )
}

/// Corners joined to the gradient line's start and end, in that order.
///
/// These are the two corners the perpendicular lines through the line ends
/// pass through, picked by the quadrant the angle points into.
pub fn perpendicular_corners(angle: f64, quad: &Quad) -> (Point, Point) {
    let angle = angle.rem_euclid(TAU);
    if angle <= FRAC_PI_2 {
        (quad.p4, quad.p2)
    } else if angle <= PI {
        (quad.p1, quad.p3)
    } else if angle <= 3.0 * FRAC_PI_2 {
        (quad.p2, quad.p4)
    } else {
        (quad.p3, quad.p1)
    }
}

/// Rotation of the label for the stop at `index`; labels alternate sides.
pub fn marker_rotation(angle: f64, index: usize) -> f64 {
    if index % 2 == 0 {
        angle - FRAC_PI_2
    } else {
        angle + FRAC_PI_2
    }
}

/// Build every overlay item for `model` over `quad`, in drawing order.
///
/// The box comes first, then the gradient line with its three points, the
/// angle construction and finally one marker per color stop.
pub fn build_overlay(quad: &Quad, model: &GradientModel) -> DisplayList {
    let line = &model.gradient_line;
    let mut list = DisplayList::new();

    list.push(OverlayItem::BoxOutline { quad: *quad });
    list.push(OverlayItem::GradientLine {
        start: line.start,
        end: line.end,
    });
    for at in [line.start, line.center, line.end] {
        list.push(OverlayItem::LinePoint { at });
    }

    list.push(OverlayItem::CenterLine {
        from: line.center,
        to: Point::new(
            line.center.x,
            line.center.y - ARC_RADIUS - CENTER_LINE_OVERSHOOT,
        ),
    });
    list.push(OverlayItem::AngleArc {
        center: line.center,
        radius: ARC_RADIUS,
        start_angle: 3.0 * FRAC_PI_2,
        end_angle: model.angle - FRAC_PI_2,
    });

    let (start_corner, end_corner) = perpendicular_corners(model.angle, quad);
    list.push(OverlayItem::PerpendicularLine {
        from: line.start,
        to: start_corner,
    });
    list.push(OverlayItem::PerpendicularLine {
        from: line.end,
        to: end_corner,
    });

    for (index, stop) in model.stops.iter().enumerate() {
        list.push(OverlayItem::StopMarker {
            color: stop.color.clone(),
            at: stop_point(model, stop.position),
            rotation: marker_rotation(model.angle, index),
            index,
        });
    }

    trace!("[OVERLAY] built {} items", list.len());
    list
}

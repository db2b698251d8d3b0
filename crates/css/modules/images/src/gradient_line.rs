//! Spec: CSS Images 3 §3.1 — the gradient line of a linear gradient.
//! <https://www.w3.org/TR/css-images-3/#linear-gradients>

use crate::types::{BoxBounds, Point};
use core::f64::consts::FRAC_PI_2;
use serde::Serialize;

/// The line color stops are placed on: centered in the gradient box, oriented
/// by the gradient angle, and as long as the box projected onto that axis.
///
/// `start` and `end` are symmetric about `center`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientLine {
    pub length: f64,
    pub center: Point,
    pub start: Point,
    pub end: Point,
}

impl GradientLine {
    /// Compute the gradient line for `angle` (radians, clockwise from up) over `bounds`.
    ///
    /// `length = |width·sin(angle)| + |height·cos(angle)|`.
    pub fn compute(angle: f64, bounds: &BoxBounds) -> Self {
        let length = (bounds.width * angle.sin()).abs() + (bounds.height * angle.cos()).abs();
        let center = bounds.center();
        // Screen y grows downward, so "up" is -π/2 in canvas terms.
        let heading = angle - FRAC_PI_2;
        let half = length / 2.0;
        let dx = heading.cos() * half;
        let dy = heading.sin() * half;
        Self {
            length,
            center,
            start: Point::new(center.x - dx, center.y - dy),
            end: Point::new(center.x + dx, center.y + dy),
        }
    }

    /// The point `percentage` percent of the way from `start` toward `end`.
    ///
    /// Values outside `0..=100` extrapolate past the ends.
    pub fn point_at(&self, percentage: f64) -> Point {
        let fraction = percentage / 100.0;
        Point::new(
            (self.end.x - self.start.x).mul_add(fraction, self.start.x),
            (self.end.y - self.start.y).mul_add(fraction, self.start.y),
        )
    }
}

/// Compute the [`GradientLine`] for a resolved angle and box.
pub fn compute_line(angle: f64, bounds: &BoxBounds) -> GradientLine {
    GradientLine::compute(angle, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_4, PI};

    const EPSILON: f64 = 1e-9;

    fn close(left: Point, right: Point) -> bool {
        (left.x - right.x).abs() < EPSILON && (left.y - right.y).abs() < EPSILON
    }

    #[test]
    fn to_bottom_spans_the_height() {
        let bounds = BoxBounds::new(0.0, 0.0, 100.0, 100.0);
        let line = compute_line(PI, &bounds);
        assert!((line.length - 100.0).abs() < EPSILON);
        assert!(close(line.center, Point::new(50.0, 50.0)));
        assert!(close(line.start, Point::new(50.0, 0.0)));
        assert!(close(line.end, Point::new(50.0, 100.0)));
    }

    #[test]
    fn to_right_spans_the_width_of_an_offset_box() {
        let bounds = BoxBounds::new(10.0, 20.0, 200.0, 100.0);
        let line = compute_line(FRAC_PI_2, &bounds);
        assert!((line.length - 200.0).abs() < EPSILON);
        assert!(close(line.start, Point::new(10.0, 70.0)));
        assert!(close(line.end, Point::new(210.0, 70.0)));
    }

    #[test]
    fn diagonal_length_is_the_projection() {
        let bounds = BoxBounds::new(0.0, 0.0, 200.0, 100.0);
        let line = compute_line(FRAC_PI_4, &bounds);
        let expected = (200.0 * FRAC_PI_4.sin()).abs() + (100.0 * FRAC_PI_4.cos()).abs();
        assert!((line.length - expected).abs() < EPSILON);
    }

    #[test]
    fn ends_are_symmetric_about_the_center() {
        let bounds = BoxBounds::new(5.0, 7.0, 130.0, 40.0);
        for step in 0..16 {
            let angle = f64::from(step) * 0.45 - 1.0;
            let line = compute_line(angle, &bounds);
            let mid = Point::new(
                (line.start.x + line.end.x) / 2.0,
                (line.start.y + line.end.y) / 2.0,
            );
            assert!(close(mid, line.center));
            let span = (line.end.x - line.start.x).hypot(line.end.y - line.start.y);
            assert!((span - line.length).abs() < 1e-6);
        }
    }

    #[test]
    fn point_at_interpolates_and_extrapolates() {
        let bounds = BoxBounds::new(0.0, 0.0, 100.0, 100.0);
        let line = compute_line(PI, &bounds);
        assert!(close(line.point_at(0.0), line.start));
        assert!(close(line.point_at(100.0), line.end));
        assert!(close(line.point_at(25.0), Point::new(50.0, 25.0)));
        assert!(close(line.point_at(150.0), Point::new(50.0, 150.0)));
    }
}

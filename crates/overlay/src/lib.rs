//! Gradient line overlay.
//!
//! Turns a resolved [`GradientModel`](css_images::GradientModel) and the
//! element's quad into an ordered [`DisplayList`] of construction geometry:
//! the box, the gradient line, the angle arc, the perpendicular lines through
//! the line ends and one marker per color stop. Drawing is left to an
//! [`OverlaySink`].

#![forbid(unsafe_code)]

pub mod builder;
pub mod display_list;
pub mod sink;

pub use builder::{ARC_RADIUS, build_overlay, marker_rotation, perpendicular_corners, stop_point};
pub use display_list::{DisplayList, OverlayItem, Quad};
pub use sink::{OverlaySink, RecordingSink};

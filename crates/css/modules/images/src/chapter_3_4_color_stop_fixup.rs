//! Spec: CSS Images 3 §3.4.3 — Color stop "fixup".
//! <https://www.w3.org/TR/css-images-3/#color-stop-fixup>
//!
//! Positions are percentages of the gradient line. `None` marks a stop whose
//! position was omitted (or could not be resolved) and must be filled in from
//! its defined neighbors.

use css_values_units::{Length, Percentage};
use log::trace;

/// A stop position as written in the computed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopPosition {
    Percentage(Percentage),
    Length(Length),
}

impl StopPosition {
    /// Resolve to a percentage of a gradient line `line_length` pixels long.
    ///
    /// Pixel positions on a zero-length line have no percentage and resolve to `None`.
    pub fn resolve(self, line_length: f64) -> Option<f64> {
        match self {
            Self::Percentage(Percentage(value)) => Some(value),
            Self::Length(Length(pixels)) => {
                let percentage = pixels * 100.0 / line_length;
                percentage.is_finite().then_some(percentage)
            }
        }
    }
}

/// Index of the first defined position at or after `from`.
fn next_defined(positions: &[Option<f64>], from: usize) -> Option<usize> {
    positions
        .iter()
        .skip(from)
        .position(Option::is_some)
        .map(|offset| from + offset)
}

/// Fill one range whose two ends are defined.
///
/// The end is first raised to the start if it is lower, then every index
/// strictly between the ends is spaced evenly.
fn fill_range(positions: &mut [Option<f64>], start: usize, end: usize) {
    let (Some(from), Some(defined_end)) = (positions[start], positions[end]) else {
        return;
    };
    let to = defined_end.max(from);
    positions[end] = Some(to);
    if end <= start + 1 {
        return;
    }
    let step = (to - from) / (end - start) as f64;
    for (offset, slot) in positions[start + 1..end].iter_mut().enumerate() {
        *slot = Some(step.mul_add((offset + 1) as f64, from));
    }
}

/// Give every stop a definite position, in place.
///
/// 1. An undefined first stop becomes `0`, or the first later defined
///    position when that one is `<= 0`.
/// 2. When no defined position follows a range start, the last stop becomes
///    `max(first, 100)`.
/// 3. Each range between two defined stops clamps its end to be no lower than
///    its start, then spaces the stops in between evenly.
///
/// Ranges chain: each range starts at the previous range's (possibly raised)
/// end, so a lower stop is raised to the largest position before it.
pub fn normalize(positions: &mut [Option<f64>]) {
    let Some(last) = positions.len().checked_sub(1) else {
        return;
    };

    if positions[0].is_none() {
        let leading = next_defined(positions, 1)
            .and_then(|index| positions[index])
            .filter(|position| *position <= 0.0)
            .unwrap_or(0.0);
        positions[0] = Some(leading);
    }

    let mut range_start = 0;
    loop {
        let range_end = if let Some(index) = next_defined(positions, range_start + 1) {
            index
        } else {
            let first = positions[0].unwrap_or(0.0);
            positions[last] = Some(first.max(100.0));
            last
        };
        fill_range(positions, range_start, range_end);
        trace!("[STOP-FIXUP] range {range_start}..={range_end} -> {positions:?}");

        range_start = range_end;
        if range_start == last {
            break;
        }
    }
}

/// Resolve optional positions into definite ones without touching the input.
pub fn fixup(positions: &[Option<f64>]) -> Vec<f64> {
    let mut resolved = positions.to_vec();
    normalize(&mut resolved);
    resolved
        .into_iter()
        .map(|position| position.unwrap_or_default())
        .collect()
}

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::AngleUnit;

/// Returns the direction of the vector `(dx, dy)` in radians, within `[0, 2π)`.
///
/// The quadrant is resolved from the component signs, and a zero `dx` is
/// handled without dividing: straight up is `π/2`, straight down is `3π/2`,
/// and the zero vector is `0`.
pub(crate) fn quadrant_angle(dx: f64, dy: f64) -> f64 {
    if dx.is_nan() || dy.is_nan() {
        return f64::NAN;
    }

    if dx > 0.0 {
        let angle = (dy / dx).atan();
        if dy >= 0.0 {
            angle
        } else {
            // A tiny negative angle can round up to a full turn.
            let wrapped = TAU + angle;
            if wrapped < TAU { wrapped } else { 0.0 }
        }
    } else if dx < 0.0 {
        PI + (dy / dx).atan()
    } else if dy > 0.0 {
        FRAC_PI_2
    } else if dy < 0.0 {
        3.0 * FRAC_PI_2
    } else {
        0.0
    }
}

/// Returns the orientation of the vector from `from` to `to`.
///
/// The angle is measured counterclockwise from the positive x-axis and lies
/// in `[0, 2π)` radians (or `[0, 360)` degrees). Coincident points give `0`.
#[must_use]
pub fn orientation(from: [f64; 2], to: [f64; 2], unit: AngleUnit) -> f64 {
    unit.from_radians(quadrant_angle(to[0] - from[0], to[1] - from[1]))
}

/// Maps an angle in degrees to its equivalent in `[0, 360)`.
///
/// For example `723.1` maps to `3.1` and `-1035.3` maps to `44.7`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round to exactly 360 for tiny negative inputs.
    if wrapped < 360.0 { wrapped } else { 0.0 }
}

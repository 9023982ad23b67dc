use std::f64::consts::{FRAC_PI_2, PI};

use crate::{angle::quadrant_angle, vector::norm};

/// A 3-D vector in spherical form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f64,

    /// Elevation out of the XZ plane toward +y, in `[-π/2, π/2]`.
    pub polar: f64,

    /// Angle from +x toward +z within the XZ plane, in `(-π/2, 3π/2)`.
    pub azimuth: f64,
}

/// Converts Cartesian `[x, y, z]` into [`Spherical`] coordinates.
///
/// The azimuth is `atan(z / x)`, shifted by `π` when `x < 0` so that the
/// -x half-plane is distinguished from the +x one. When `x` is zero of either
/// sign the azimuth is `π/2` or `-π/2` by the sign of `z`, and `0` on the
/// y-axis.
/// All angles are `0` for the zero vector.
#[must_use]
pub fn cartesian_to_spherical(v: [f64; 3]) -> Spherical {
    let [x, y, z] = v;

    let azimuth = if x > 0.0 {
        (z / x).atan()
    } else if x < 0.0 {
        (z / x).atan() + PI
    } else if z > 0.0 {
        FRAC_PI_2
    } else if z < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    };

    Spherical {
        radius: norm(&v),
        polar: y.atan2(x.hypot(z)),
        azimuth,
    }
}

/// Rotation angles of a 3-D vector in each coordinate plane.
///
/// Each angle lies in `[0, 2π)` and is resolved with the same quadrant rules
/// as [`orientation`](crate::orientation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAngles {
    /// Distance from the origin.
    pub radius: f64,

    /// Angle in the YZ plane, from +y toward +z.
    pub yz: f64,

    /// Angle in the ZX plane, from +z toward +x.
    pub zx: f64,

    /// Angle in the XY plane, from +x toward +y.
    pub xy: f64,
}

/// Decomposes `[x, y, z]` into its radius and three planar rotation angles.
///
/// Axis-aligned vectors are handled exactly: a component pair of `(0, 0)`
/// yields an angle of `0`.
#[must_use]
pub fn rotation_angles(v: [f64; 3]) -> RotationAngles {
    let [x, y, z] = v;

    RotationAngles {
        radius: norm(&v),
        yz: quadrant_angle(y, z),
        zx: quadrant_angle(z, x),
        xy: quadrant_angle(x, y),
    }
}

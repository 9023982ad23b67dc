//! Vector and geometry helpers for 2-D and 3-D points.
//!
//! Points and vectors are plain arrays `[f64; N]`, so operations on pairs of
//! vectors can only be called with matching dimensions.
//!
//! Angles are computed with explicit quadrant case analysis rather than a raw
//! arctangent, and can be reported in radians or degrees via [`AngleUnit`].

mod angle;
mod error;
mod polygon;
mod spherical;
mod unit;
mod vector;

pub use angle::{normalize_degrees, orientation};
pub use error::Error;
pub use polygon::polygon_area;
pub use spherical::{RotationAngles, Spherical, cartesian_to_spherical, rotation_angles};
pub use unit::AngleUnit;
pub use vector::{angle_between, are_opposite, distance, dot, norm, normalize};

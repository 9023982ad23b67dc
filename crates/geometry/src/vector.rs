use crate::{AngleUnit, Error};

/// Returns the dot product of two vectors.
#[must_use]
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Largest component magnitude, or zero for the zero vector.
fn max_magnitude<const N: usize>(components: &[f64; N]) -> f64 {
    components.iter().fold(0.0_f64, |max, c| max.max(c.abs()))
}

/// Euclidean length of `components`, scaled by the largest magnitude so that
/// squaring neither overflows nor underflows.
fn scaled_length<const N: usize>(components: &[f64; N]) -> f64 {
    if components.iter().any(|c| c.is_nan()) {
        return f64::NAN;
    }

    let scale = max_magnitude(components);

    #[allow(clippy::float_cmp)]
    if scale == 0.0 || scale.is_infinite() {
        return scale;
    }

    let sum: f64 = components.iter().map(|c| (c / scale).powi(2)).sum();
    scale * sum.sqrt()
}

/// Returns the Euclidean length of a vector.
#[must_use]
pub fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    scaled_length(v)
}

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    let difference: [f64; N] = std::array::from_fn(|i| a[i] - b[i]);
    scaled_length(&difference)
}

/// Returns the unit vector pointing in the direction of `v`.
///
/// # Errors
///
/// Returns [`Error::ZeroVector`] if `v` has zero length.
pub fn normalize<const N: usize>(v: &[f64; N]) -> Result<[f64; N], Error> {
    let length = norm(v);

    #[allow(clippy::float_cmp)]
    if length == 0.0 {
        return Err(Error::ZeroVector);
    }

    Ok(v.map(|component| component / length))
}

/// Returns true if two vectors point in opposing directions.
///
/// Vectors are opposing when the angle between them is at least 90°, that is
/// when their dot product is not positive.
#[must_use]
pub fn are_opposite<const N: usize>(a: &[f64; N], b: &[f64; N]) -> bool {
    // Rescaling keeps the sign of the dot product while avoiding underflow.
    let rescale = |v: &[f64; N]| {
        let scale = max_magnitude(v);
        if scale > 0.0 && scale.is_finite() {
            v.map(|c| c / scale)
        } else {
            *v
        }
    };

    dot(&rescale(a), &rescale(b)) <= 0.0
}

/// Returns the angle between two vectors, in `[0, π]` radians or `[0, 180]` degrees.
///
/// The cosine is rounded to six decimal places before `acos` so that
/// floating-point error cannot push it past ±1.
///
/// # Errors
///
/// Returns [`Error::ZeroVector`] if either vector has zero length.
pub fn angle_between<const N: usize>(
    a: &[f64; N],
    b: &[f64; N],
    unit: AngleUnit,
) -> Result<f64, Error> {
    let cosine = dot(&normalize(a)?, &normalize(b)?);
    let cosine = (cosine * 1e6).round() / 1e6;
    Ok(unit.from_radians(cosine.acos()))
}

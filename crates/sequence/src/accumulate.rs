use std::ops::Add;

use crate::Error;

/// Returns the running totals of `values`.
///
/// Element `i` of the result is the sum of `values[0..=i]`, so the output has
/// the same length as the input and an empty input gives an empty output.
///
/// # Panics
///
/// Totals are formed with `T`'s own `+`, so an integer total that overflows
/// panics when overflow checks are enabled (debug builds) and wraps otherwise.
/// Use [`std::num::Wrapping`] or a wider type when totals may exceed `T`.
#[must_use]
pub fn cumulative_sum<T>(values: &[T]) -> Vec<T>
where
    T: Copy + Add<Output = T>,
{
    let mut totals = Vec::with_capacity(values.len());
    let mut running: Option<T> = None;

    for &value in values {
        let total = running.map_or(value, |sum| sum + value);
        totals.push(total);
        running = Some(total);
    }

    totals
}

/// Returns the arithmetic mean of `values`.
///
/// Elements are converted to `f64` before summing, so the total cannot
/// overflow. Only types with a lossless `Into<f64>` are accepted (`f32`,
/// `f64`, and integers up to 32 bits); convert `i64`, `u64` or `usize` slices
/// explicitly first.
///
/// # Errors
///
/// Returns [`Error::EmptySequence`] if `values` is empty.
pub fn average<T>(values: &[T]) -> Result<f64, Error>
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return Err(Error::EmptySequence);
    }

    let total: f64 = values.iter().map(|&value| value.into()).sum();

    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;

    Ok(total / count)
}

use crate::Error;

/// The tightest pair of sequence values enclosing a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
}

impl Bracket {
    /// Returns the largest value that is less than or equal to the target.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the smallest value that is greater than or equal to the target.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if `x` lies within the closed bracket.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Finds the tightest values in `values` that bound `target` from below and above.
///
/// A single linear scan keeps the largest element not above `target` and the
/// smallest element not below it, so `values` need not be sorted. The sequence
/// extremes are only computed to report an out-of-range target. A target equal
/// to an element yields a zero-width bracket. NaN elements are ignored.
///
/// # Errors
///
/// Returns [`Error::EmptySequence`] if `values` is empty, and
/// [`Error::OutOfRange`] if no element lies on one side of `target`
/// (including a NaN target).
pub fn bracket(target: f64, values: &[f64]) -> Result<Bracket, Error> {
    if values.is_empty() {
        return Err(Error::EmptySequence);
    }

    let mut lower: Option<f64> = None;
    let mut upper: Option<f64> = None;

    for &value in values {
        if value <= target && lower.is_none_or(|bound| value > bound) {
            lower = Some(value);
        }
        if value >= target && upper.is_none_or(|bound| value < bound) {
            upper = Some(value);
        }
    }

    match (lower, upper) {
        (Some(lower), Some(upper)) => Ok(Bracket { lower, upper }),
        _ => {
            let (min, max) = values
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &value| {
                    (min.min(value), max.max(value))
                });
            Err(Error::OutOfRange { target, min, max })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn brackets_target_in_sorted_values() {
        let found = bracket(2.5, &[0.0, 1.0, 2.0, 3.0, 4.0]).expect("in range");
        assert_relative_eq!(found.lower(), 2.0);
        assert_relative_eq!(found.upper(), 3.0);
        assert_relative_eq!(found.width(), 1.0);
        assert!(found.contains(2.5));
    }

    #[test]
    fn brackets_target_in_unsorted_values() {
        let found = bracket(5.0, &[9.0, 1.0, 6.0, 4.5, 2.0, 7.0]).expect("in range");
        assert_eq!(found.as_array(), [4.5, 6.0]);
    }

    #[test]
    fn bounds_come_from_the_scan_not_the_endpoints() {
        let found = bracket(5.0, &[f64::NAN, 6.0, 9.0, 0.0, 4.0, f64::NAN]).expect("in range");
        assert_eq!(found.as_array(), [4.0, 6.0]);
    }

    #[test]
    fn exact_match_gives_zero_width() {
        let found = bracket(3.0, &[1.0, 3.0, 5.0]).expect("in range");
        assert_eq!(found.as_array(), [3.0, 3.0]);
        assert_relative_eq!(found.width(), 0.0);
    }

    #[test]
    fn endpoints_are_in_range() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(bracket(1.0, &values).expect("in range").as_array(), [1.0, 1.0]);
        assert_eq!(bracket(3.0, &values).expect("in range").as_array(), [3.0, 3.0]);
    }

    #[test]
    fn out_of_range_reports_extremes() {
        let values = [4.0, 1.0, 3.0];

        assert_eq!(
            bracket(0.5, &values),
            Err(Error::OutOfRange {
                target: 0.5,
                min: 1.0,
                max: 4.0
            })
        );
        assert!(matches!(
            bracket(10.0, &values),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn nan_target_is_out_of_range() {
        assert!(matches!(
            bracket(f64::NAN, &[1.0, 2.0]),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn empty_values_error() {
        assert_eq!(bracket(1.0, &[]), Err(Error::EmptySequence));
    }
}

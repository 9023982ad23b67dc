/// Returns the elements of `first` that also appear in `second`.
///
/// The result keeps `first`'s order and duplicates: each element is tested
/// for membership individually, so this is a filter rather than a set
/// intersection.
#[must_use]
pub fn intersection<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    first
        .iter()
        .filter(|value| second.contains(value))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_shared_elements_in_first_order() {
        assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
        assert_eq!(intersection(&[3, 2, 1], &[1, 2]), vec![2, 1]);
    }

    #[test]
    fn keeps_duplicates_from_first() {
        assert_eq!(intersection(&[2, 1, 2, 2], &[2]), vec![2, 2, 2]);
        assert_eq!(intersection(&[1, 2], &[2, 2, 2]), vec![2]);
    }

    #[test]
    fn disjoint_or_empty_inputs_give_empty() {
        assert!(intersection(&[1, 2], &[3, 4]).is_empty());
        assert!(intersection::<i32>(&[], &[1]).is_empty());
        assert!(intersection(&[1], &[]).is_empty());
    }

    #[test]
    fn works_for_non_numeric_elements() {
        let first = ["x", "y", "z"].map(String::from);
        let second = ["z", "x"].map(String::from);
        assert_eq!(intersection(&first, &second), vec!["x", "z"]);
    }
}

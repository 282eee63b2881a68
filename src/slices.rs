//! Slice membership helpers
//!
//! Free functions testing whether a value occurs in a slice via linear
//! scan. No allocation, no mutation of the input.

/// Return whether `slice` contains an element equal to `target`
///
/// Scans from the first element and returns `true` on the first match;
/// an empty slice always yields `false`. O(n) time.
///
/// # Examples
///
/// ```rust
/// use synckit::slices;
///
/// assert!(slices::contains(&[1, 2, 3], &2));
/// assert!(!slices::contains(&[1, 2, 3], &4));
/// assert!(!slices::contains::<i32>(&[], &1));
/// ```
pub fn contains<T: PartialEq>(slice: &[T], target: &T) -> bool {
    slice.iter().any(|elem| elem == target)
}

/// Return whether `slice` contains an element equal to `target`
///
/// Identical to [`contains`]; the second name is kept for callers ported
/// from APIs that exposed both.
pub fn include<T: PartialEq>(slice: &[T], target: &T) -> bool {
    contains(slice, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice() {
        assert!(!contains::<i32>(&[], &0));
        assert!(!include::<i32>(&[], &0));
    }

    #[test]
    fn test_present_and_absent() {
        let values = [3, 1, 4, 1, 5, 9];
        assert!(contains(&values, &4));
        assert!(contains(&values, &3));
        assert!(contains(&values, &9));
        assert!(!contains(&values, &2));
    }

    #[test]
    fn test_duplicate_elements() {
        assert!(contains(&[7, 7, 7], &7));
        assert!(!contains(&[7, 7, 7], &8));
    }

    #[test]
    fn test_non_copy_elements() {
        let words = vec!["alpha".to_string(), "beta".to_string()];
        assert!(contains(&words, &"beta".to_string()));
        assert!(!contains(&words, &"gamma".to_string()));
    }

    #[test]
    fn test_include_matches_contains() {
        let values = [1, 2, 3];
        for target in 0..5 {
            assert_eq!(contains(&values, &target), include(&values, &target));
        }
    }
}

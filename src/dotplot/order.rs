//! Row ordering and distinct-value enumeration.
//!
//! Sorting never touches the dataset: it yields a permutation of row
//! indices that the layout reads through.

use indexmap::IndexSet;

/// Input order: `0..n`.
pub fn identity_order(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Rows ordered by `keys` descending. Stable: equal keys keep input order.
pub fn descending_by_text(keys: &[String]) -> Vec<usize> {
    let mut order = identity_order(keys.len());
    order.sort_by(|&a, &b| keys[b].cmp(&keys[a]));
    order
}

/// Rows ordered by `values` ascending. Stable; NaN sorts last.
pub fn ascending_by_value(values: &[f64]) -> Vec<usize> {
    let mut order = identity_order(values.len());
    order.sort_by(|&a, &b| {
        let (va, vb) = (values[a], values[b]);
        va.is_nan().cmp(&vb.is_nan()).then_with(|| va.total_cmp(&vb))
    });
    order
}

/// Rows ordered by `values` descending. Stable; NaN sorts last.
pub fn descending_by_value(values: &[f64]) -> Vec<usize> {
    let mut order = identity_order(values.len());
    order.sort_by(|&a, &b| {
        let (va, vb) = (values[a], values[b]);
        va.is_nan().cmp(&vb.is_nan()).then_with(|| vb.total_cmp(&va))
    });
    order
}

/// Distinct values of `keys` visited in `order`, kept in order of first
/// occurrence.
pub fn distinct_in_order<'a>(keys: &'a [String], order: &[usize]) -> IndexSet<&'a str> {
    order.iter().map(|&i| keys[i].as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_descending_text_is_stable() {
        let keys = strings(&["b", "a", "c", "a", "b"]);
        assert_eq!(descending_by_text(&keys), vec![2, 0, 4, 1, 3]);
    }

    #[test]
    fn test_ascending_values() {
        assert_eq!(ascending_by_value(&[0.5, -0.3, 0.1]), vec![1, 2, 0]);
        assert_eq!(ascending_by_value(&[f64::NAN, 1.0, -1.0]), vec![2, 1, 0]);
        assert_eq!(ascending_by_value(&[1.0, 1.0, 0.0]), vec![2, 0, 1]);
    }

    #[test]
    fn test_descending_values() {
        assert_eq!(descending_by_value(&[2019.0, 2021.0, 2020.0]), vec![1, 2, 0]);
        assert_eq!(descending_by_value(&[1.0, f64::NAN, 1.0, 9.0]), vec![3, 0, 2, 1]);
    }

    #[test]
    fn test_distinct_first_occurrence() {
        let keys = strings(&["x", "y", "x", "z", "y"]);
        let distinct = distinct_in_order(&keys, &identity_order(keys.len()));
        assert_eq!(distinct.into_iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);

        let reversed: Vec<usize> = (0..keys.len()).rev().collect();
        let distinct = distinct_in_order(&keys, &reversed);
        assert_eq!(distinct.into_iter().collect::<Vec<_>>(), vec!["y", "z", "x"]);
    }
}

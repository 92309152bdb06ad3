//! Bounded counting sort.
//!
//! Stable and linear in `len + max_key`, but only usable for integer keys known to lie in
//! `0..range`. Unlike the comparison sorts this one allocates the sorted output and leaves the
//! input untouched.

use thiserror::Error;

bounded_sort_impl!("counting_sort_stable");

/// Exclusive upper bound on keys used when the caller has no better knowledge of its data.
pub const DEFAULT_RANGE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountSortError {
    #[error("value {value} at index {index} is outside of the sortable range 0..{range}")]
    RangeViolation {
        index: usize,
        value: i64,
        range: usize,
    },
}

/// Sorts `v` into a new vector, all values must be in `0..range`.
#[inline]
pub fn sort(v: &[i32], range: usize) -> Result<Vec<i32>, CountSortError> {
    sort_by_key(v, range, |&val| i64::from(val))
}

/// Sorts `v` into a new vector by the integer key `key` extracts, all keys must be in
/// `0..range`. Elements with equal keys keep their relative order.
///
/// `key` is called exactly once per element.
pub fn sort_by_key<T, F>(v: &[T], range: usize, key: F) -> Result<Vec<T>, CountSortError>
where
    T: Clone,
    F: FnMut(&T) -> i64,
{
    let (keys, max_key) = bucket_keys(v, range, key)?;

    if keys.is_empty() {
        return Ok(Vec::new());
    }

    // Keys above the largest one present would only add empty slots, so `range` may be huge
    // without the table following it.
    let buckets = max_key + 1;
    let mut count = vec![0usize; buckets];

    for &k in &keys {
        count[k] += 1;
    }

    // After this count[i] is the number of keys <= i, one past the last slot for key i.
    for i in 1..buckets {
        count[i] += count[i - 1];
    }

    // Walk backwards so equal keys are placed back to front, which keeps them stable.
    let mut order = vec![0usize; keys.len()];
    for (i, &k) in keys.iter().enumerate().rev() {
        count[k] -= 1;
        order[count[k]] = i;
    }

    Ok(order.into_iter().map(|i| v[i].clone()).collect())
}

/// Evaluates all keys and checks them against `range` before any table is touched. Returns the
/// keys together with the largest of them, 0 for empty input.
fn bucket_keys<T, F>(
    v: &[T],
    range: usize,
    mut key: F,
) -> Result<(Vec<usize>, usize), CountSortError>
where
    F: FnMut(&T) -> i64,
{
    let mut keys = Vec::with_capacity(v.len());
    let mut max_key = 0;

    for (index, elem) in v.iter().enumerate() {
        let value = key(elem);

        let k = usize::try_from(value)
            .ok()
            .filter(|&k| k < range)
            .ok_or(CountSortError::RangeViolation {
                index,
                value,
                range,
            })?;

        max_key = max_key.max(k);
        keys.push(k);
    }

    Ok((keys, max_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_duplicates() {
        assert_eq!(sort(&[5, 3, 3, 1], DEFAULT_RANGE), Ok(vec![1, 3, 3, 5]));
    }

    #[test]
    fn empty_is_valid_for_any_range() {
        assert_eq!(sort(&[], DEFAULT_RANGE), Ok(vec![]));
        assert_eq!(sort(&[], 0), Ok(vec![]));
    }

    #[test]
    fn single_element() {
        assert_eq!(sort(&[42], DEFAULT_RANGE), Ok(vec![42]));
    }

    #[test]
    fn input_is_not_mutated() {
        let v = vec![9, 2, 7, 2];
        let sorted = sort(&v, 10).unwrap();

        assert_eq!(v, vec![9, 2, 7, 2]);
        assert_eq!(sorted, vec![2, 2, 7, 9]);
    }

    #[test]
    fn rejects_value_equal_to_range() {
        assert_eq!(
            sort(&[1, 2, 1000, 3], DEFAULT_RANGE),
            Err(CountSortError::RangeViolation {
                index: 2,
                value: 1000,
                range: DEFAULT_RANGE,
            })
        );
    }

    #[test]
    fn rejects_negative_value() {
        assert_eq!(
            sort(&[-7], DEFAULT_RANGE),
            Err(CountSortError::RangeViolation {
                index: 0,
                value: -7,
                range: DEFAULT_RANGE,
            })
        );
    }

    #[test]
    fn reports_first_offending_index() {
        let err = sort(&[0, -1, 5000], DEFAULT_RANGE).unwrap_err();

        assert_eq!(
            err,
            CountSortError::RangeViolation {
                index: 1,
                value: -1,
                range: DEFAULT_RANGE,
            }
        );
        assert_eq!(
            err.to_string(),
            "value -1 at index 1 is outside of the sortable range 0..1000"
        );
    }

    #[test]
    fn zero_range_rejects_any_value() {
        assert!(sort(&[0], 0).is_err());
    }

    #[test]
    fn custom_range() {
        assert_eq!(sort(&[3, 0, 4, 1], 5), Ok(vec![0, 1, 3, 4]));
        assert!(sort(&[3, 0, 5, 1], 5).is_err());
    }

    #[test]
    fn key_called_once_per_element() {
        let v = [3, 1, 2, 1, 0];
        let mut calls = 0;

        let sorted = sort_by_key(&v, 4, |&x| {
            calls += 1;
            x as i64
        })
        .unwrap();

        assert_eq!(sorted, vec![0, 1, 1, 2, 3]);
        assert_eq!(calls, v.len());
    }

    #[test]
    fn stable_for_equal_keys() {
        let records = [(2, 'a'), (0, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];

        let sorted = sort_by_key(&records, 3, |&(k, _)| k).unwrap();

        assert_eq!(
            sorted,
            vec![(0, 'b'), (0, 'e'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
    }

    #[test]
    fn huge_range_with_small_keys() {
        assert_eq!(sort(&[5], usize::MAX / 16), Ok(vec![5]));
        assert_eq!(sort(&[7, 0, 3, 7], usize::MAX), Ok(vec![0, 3, 7, 7]));
    }

    #[test]
    fn max_key_at_range_edge() {
        assert_eq!(sort(&[999, 0, 999], DEFAULT_RANGE), Ok(vec![0, 999, 999]));
    }

    #[test]
    fn descending_full_range() {
        let v = (0..DEFAULT_RANGE as i32).rev().collect::<Vec<_>>();

        assert_eq!(
            sort(&v, DEFAULT_RANGE),
            Ok((0..DEFAULT_RANGE as i32).collect::<Vec<_>>())
        );
    }
}

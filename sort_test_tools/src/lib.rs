use std::fmt::Debug;

/// In-place comparison sort, ascending.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

/// Allocating sort for integer keys known to lie in `0..range`.
///
/// The input is left untouched, the sorted values are returned as a new vector. Keys outside of
/// the range must be rejected with `Self::Error`.
pub trait BoundedSort {
    type Error: Debug;

    fn name() -> String;

    fn sort(arr: &[i32], range: usize) -> Result<Vec<i32>, Self::Error>;

    fn sort_by_key<T, F>(arr: &[T], range: usize, key: F) -> Result<Vec<T>, Self::Error>
    where
        T: Clone,
        F: FnMut(&T) -> i64;
}

pub mod patterns;

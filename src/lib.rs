macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

macro_rules! bounded_sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::BoundedSort for SortImpl {
            type Error = CountSortError;

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(arr: &[i32], range: usize) -> Result<Vec<i32>, Self::Error> {
                sort(arr, range)
            }

            #[inline]
            fn sort_by_key<T, F>(arr: &[T], range: usize, key: F) -> Result<Vec<T>, Self::Error>
            where
                T: Clone,
                F: FnMut(&T) -> i64,
            {
                sort_by_key(arr, range, key)
            }
        }
    };
}

// Allocating, stable, keys bounded to 0..range.
pub mod counting;

// In place, unstable, any Ord type.
pub mod quicksort;

pub mod input;
pub mod measure;
pub mod report;

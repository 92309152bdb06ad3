//! Quicksort with a Hoare style partition and the first element of each window as pivot.
//!
//! The first element pivot degrades to O(N^2) on ascending and descending input. Windows are
//! kept on an explicit stack, so those inputs cost time but never blow the thread stack.

use std::cmp::Ordering;

sort_impl!("quicksort_hoare_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts `v` with the comparator `compare`, which must implement a total order.
///
/// A comparator that violates it leaves `v` in an unspecified order, but still holds the
/// original elements and never causes accesses outside of the window being partitioned.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Inclusive [start, end] windows still to be partitioned.
    let mut windows = vec![(0, len - 1)];

    while let Some((start, end)) = windows.pop() {
        let split = hoare_partition(v, start, end, is_less);

        // split is always > start, the first scan stops on the pivot itself and swaps it.
        if start + 1 < split {
            windows.push((start, split - 1));
        }

        // The split element belongs to the right window.
        if end > split {
            windows.push((split, end));
        }
    }
}

/// Partitions the inclusive window `[l, r]` around its first element and returns the split
/// index, in `l + 1..=r`. Everything left of the split is <= pivot, everything from the split on
/// is >= pivot.
///
/// Requires `l < r`.
fn hoare_partition<T, F>(v: &mut [T], mut l: usize, mut r: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (start, end) = (l, r);

    // The pivot moves whenever it is part of a swap, follow it instead of copying it out.
    let mut pivot_pos = l;

    loop {
        // With a total order both scans stop inside the window on their own. The bounds only
        // matter for comparators that break it.
        while l < end && is_less(&v[l], &v[pivot_pos]) {
            l += 1;
        }
        while r > start && is_less(&v[pivot_pos], &v[r]) {
            r -= 1;
        }

        if l <= r {
            v.swap(l, r);

            if pivot_pos == l {
                pivot_pos = r;
            } else if pivot_pos == r {
                pivot_pos = l;
            }

            l += 1;

            // r == 0 means l was 0 too, the scans have crossed.
            if r == 0 {
                break;
            }
            r -= 1;
        }

        if r < l {
            break;
        }
    }

    // Only a broken comparator can leave l outside, an empty side would loop forever.
    l.clamp(start + 1, end)
}

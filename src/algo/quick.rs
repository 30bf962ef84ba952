//! Randomized quick sort with a first-element pivot.

use std::mem;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::{Comparator, compare_elements};

/// Shuffles `data` uniformly, then sorts it by recursive partitioning.
///
/// The shuffle makes the expected running time independent of the input
/// order; the worst case is still O(n²).
pub(crate) fn sort<T, C, R>(data: &mut [T], cmp: &C, rng: &mut R)
where
    T: AsRef<[u8]>,
    C: Comparator + ?Sized,
    R: Rng + ?Sized,
{
    if data.len() < 2 {
        return;
    }
    data.shuffle(rng);
    quick_sort_range(data, cmp);
}

/// Recurses into the smaller side of each partition and loops on the larger
/// one, so the stack never grows beyond O(log n) frames.
fn quick_sort_range<T, C>(mut data: &mut [T], cmp: &C)
where
    T: AsRef<[u8]>,
    C: Comparator + ?Sized,
{
    while data.len() > 1 {
        let pivot = partition(data, cmp);
        let (left, rest) = mem::take(&mut data).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_range(left, cmp);
            data = right;
        } else {
            quick_sort_range(right, cmp);
            data = left;
        }
    }
}

/// Partitions around `data[0]` and returns the pivot's final index.
///
/// Afterwards everything left of the pivot compares `<=` to it and
/// everything right of it compares `>`.
fn partition<T, C>(data: &mut [T], cmp: &C) -> usize
where
    T: AsRef<[u8]>,
    C: Comparator + ?Sized,
{
    debug_assert!(data.len() >= 2);

    let last = data.len() - 1;
    let (mut left, mut right) = (0, last);

    while left < right {
        while left < last && compare_elements(cmp, &data[left], &data[0]).is_le() {
            left += 1;
        }
        // A consistent comparator stops this at index 0 anyway, since the
        // pivot never compares greater than itself.
        while right > 0 && compare_elements(cmp, &data[right], &data[0]).is_gt() {
            right -= 1;
        }
        if left < right {
            data.swap(left, right);
        }
    }

    data.swap(0, right);
    right
}

//! Top-down merge sort over element handles.
//!
//! Handles are parked in a single work buffer during each merge and moved
//! back afterwards. While parked, a slot holds `T::default()`.

use std::mem;

use crate::config::ScratchBudget;
use crate::core::{Comparator, Element, compare_elements};
use crate::error::SortError;

pub(crate) fn sort<T, C>(data: &mut [T], cmp: &C, budget: &mut ScratchBudget) -> Result<(), SortError>
where
    T: Element,
    C: Comparator + ?Sized,
{
    if data.len() < 2 {
        return Ok(());
    }

    let mut work_space = budget.reserve("merge sort work space", data.len())?;
    merge_sort_recursive(data, cmp, &mut work_space);
    Ok(())
}

fn merge_sort_recursive<T, C>(data: &mut [T], cmp: &C, work_space: &mut Vec<T>)
where
    T: Element,
    C: Comparator + ?Sized,
{
    let len = data.len();
    if len <= 1 {
        return;
    }

    // The lower half takes the extra element when `len` is odd.
    let mid = len - len / 2;
    merge_sort_recursive(&mut data[..mid], cmp, work_space);
    merge_sort_recursive(&mut data[mid..], cmp, work_space);
    merge_halves(data, mid, cmp, work_space);
}

/// Merges the sorted runs `data[..mid]` and `data[mid..]`.
///
/// On a tie the left run wins, which keeps the sort stable.
fn merge_halves<T, C>(data: &mut [T], mid: usize, cmp: &C, work_space: &mut Vec<T>)
where
    T: Element,
    C: Comparator + ?Sized,
{
    debug_assert!(work_space.is_empty());
    debug_assert!(work_space.capacity() >= data.len());

    let (mut i, mut j) = (0, mid);
    while i < mid && j < data.len() {
        if compare_elements(cmp, &data[j], &data[i]).is_lt() {
            work_space.push(mem::take(&mut data[j]));
            j += 1;
        } else {
            work_space.push(mem::take(&mut data[i]));
            i += 1;
        }
    }
    work_space.extend(data[i..mid].iter_mut().map(mem::take));
    work_space.extend(data[j..].iter_mut().map(mem::take));

    for (slot, item) in data.iter_mut().zip(work_space.drain(..)) {
        *slot = item;
    }
}

//! LSD radix sort over a fixed number of byte positions.
//!
//! The sort runs in two phases:
//!
//! 1. **Alphabet order**: the 256 one-byte strings are sorted with the
//!    caller's comparator. The resulting byte order decides in which order
//!    buckets are concatenated on every pass, so the same code serves
//!    ascending, descending and any other byte-wise order.
//! 2. **Distribution**: from the last position down to the first, each
//!    element is moved into the bucket for its byte at that position, then
//!    the buckets are emptied back into the slice in alphabet order. Buckets
//!    keep insertion order, which makes every pass stable.
//!
//! A position past the end of an element reads as [`PADDING_BYTE`], which the
//! alphabet ranks like the empty string. Elements that contain
//! [`PADDING_BYTE`] themselves are rejected up front with
//! [`SortError::ElementContainsPadding`], together with elements longer than
//! the width.

use std::mem;

use cuneiform::cuneiform;

use super::insertion;
use crate::config::ScratchBudget;
use crate::core::{Comparator, Element};
use crate::error::SortError;

/// Number of buckets for radix sort (256 for byte-wise).
pub const RADIX_BUCKETS: usize = 256;

/// Byte value read for positions beyond an element's content.
pub(crate) const PADDING_BYTE: u8 = 0;

// Cache-aligned bucket sizes.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

type Buckets<T> = [Vec<T>; RADIX_BUCKETS];

pub(crate) fn sort<T, C>(
    data: &mut [T],
    cmp: &C,
    width: usize,
    budget: &mut ScratchBudget,
) -> Result<(), SortError>
where
    T: Element,
    C: Comparator + ?Sized,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let mut longest = 0;
    for (index, element) in data.iter().enumerate() {
        let key = element.as_ref();
        let key_len = key.len();
        if key_len > width {
            return Err(SortError::ElementTooWide {
                index,
                len: key_len,
                width,
            });
        }
        if let Some(position) = key.iter().position(|&b| b == PADDING_BYTE) {
            return Err(SortError::ElementContainsPadding { index, position });
        }
        longest = longest.max(key_len);
    }

    let mut buckets = allocate_buckets::<T>(len, budget)?;
    let alphabet = alphabet_order(cmp);
    let mut counts = RadixCounts {
        data: [0; RADIX_BUCKETS],
    };
    let sizes = &mut counts.data;

    // Every element pads with the same byte from `longest` on, so those
    // passes cannot change the order.
    for position in (0..longest).rev() {
        distribute(data, &mut buckets, sizes, position);
        collect(data, &mut buckets, sizes, &alphabet);
    }

    Ok(())
}

/// Reserves all 256 buckets with room for `len` handles each.
///
/// Buckets are pre-filled with placeholders so elements can be swapped in
/// and out. If any reservation fails, the buckets already reserved are
/// dropped before the error is returned.
fn allocate_buckets<T: Element>(len: usize, budget: &mut ScratchBudget) -> Result<Buckets<T>, SortError> {
    let mut buckets: Buckets<T> = std::array::from_fn(|_| Vec::new());
    for bucket in buckets.iter_mut() {
        *bucket = budget.reserve("radix sort bucket", len)?;
        bucket.resize_with(len, T::default);
    }
    Ok(buckets)
}

static ALL_BYTES: [u8; RADIX_BUCKETS] = {
    let mut bytes = [0u8; RADIX_BUCKETS];
    let mut i = 0;
    while i < RADIX_BUCKETS {
        bytes[i] = i as u8;
        i += 1;
    }
    bytes
};

/// Byte values in the order the comparator ranks their one-byte strings.
///
/// [`PADDING_BYTE`] stands for "element ended here" and is ranked as the
/// empty string, so a prefix orders against its extensions exactly as the
/// comparator orders them.
fn alphabet_order<C: Comparator + ?Sized>(cmp: &C) -> [u8; RADIX_BUCKETS] {
    let mut letters: [&[u8]; RADIX_BUCKETS] = std::array::from_fn(|b| {
        if b == PADDING_BYTE as usize {
            &ALL_BYTES[..0]
        } else {
            &ALL_BYTES[b..=b]
        }
    });
    insertion::sort(&mut letters, cmp);
    letters.map(|letter| letter.first().copied().unwrap_or(PADDING_BYTE))
}

#[inline(always)]
fn byte_at(key: &[u8], position: usize) -> u8 {
    key.get(position).copied().unwrap_or(PADDING_BYTE)
}

/// Moves every handle into the bucket for its byte at `position`.
///
/// Each slot is left holding the placeholder that was in the bucket.
fn distribute<T: Element>(
    data: &mut [T],
    buckets: &mut Buckets<T>,
    sizes: &mut [usize; RADIX_BUCKETS],
    position: usize,
) {
    sizes.fill(0);
    for slot in data.iter_mut() {
        let b = byte_at(slot.as_ref(), position) as usize;
        mem::swap(slot, &mut buckets[b][sizes[b]]);
        sizes[b] += 1;
    }
}

/// Empties the buckets back into `data`, bucket by bucket in alphabet order.
fn collect<T: Element>(
    data: &mut [T],
    buckets: &mut Buckets<T>,
    sizes: &[usize; RADIX_BUCKETS],
    alphabet: &[u8; RADIX_BUCKETS],
) {
    let mut slots = data.iter_mut();
    for &b in alphabet {
        let b = b as usize;
        for held in &mut buckets[b][..sizes[b]] {
            if let Some(slot) = slots.next() {
                mem::swap(slot, held);
            }
        }
    }
    debug_assert!(slots.next().is_none());
}

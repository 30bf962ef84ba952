//! The five sorting engines and name-based dispatch.
//!
//! Every engine permutes the slice in place by moving element handles; none
//! of them copies the bytes behind a handle. Engines that need auxiliary
//! storage ([`Algorithm::Merge`], [`Algorithm::Radix`]) reserve it once per
//! call, release it before returning and report a failed reservation as
//! [`SortError::Allocation`], leaving every element in the slice.
//!
//! The main entry points are [`sort`] and [`sort_with_config`].

mod bubble;
mod insertion;
mod merge;
mod quick;
mod radix;

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{ScratchBudget, SortConfig};
use crate::core::{Comparator, Element};
use crate::error::{ParseNameError, SortError};

pub use radix::RADIX_BUCKETS;

/// The available engines, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
    Radix,
}

pub const ALL_ALGORITHMS: [Algorithm; 5] = [
    Algorithm::Bubble,
    Algorithm::Insertion,
    Algorithm::Merge,
    Algorithm::Quick,
    Algorithm::Radix,
];

impl Algorithm {
    pub const NAMES: [&'static str; 5] = ["bubble", "insertion", "merge", "quick", "radix"];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Radix => "radix",
        }
    }

    /// Whether elements that compare equal keep their relative order.
    pub fn is_stable(self) -> bool {
        !matches!(self, Algorithm::Quick)
    }
}

impl FromStr for Algorithm {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ALGORITHMS
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| ParseNameError {
                kind: "sorting algorithm",
                found: s.to_string(),
                expected: &Self::NAMES,
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorts `data` in place with the chosen engine and default settings.
///
/// # Examples
///
/// ```
/// use linesort::{Algorithm, Direction, sort};
///
/// let mut data = vec!["banana".to_string(), "apple".to_string(), "cherry".to_string()];
/// sort(Algorithm::Quick, &mut data, &Direction::Ascending).unwrap();
///
/// assert_eq!(data, ["apple", "banana", "cherry"]);
/// ```
pub fn sort<T, C>(algorithm: Algorithm, data: &mut [T], cmp: &C) -> Result<(), SortError>
where
    T: Element,
    C: Comparator + ?Sized,
{
    sort_with_config(algorithm, data, cmp, &SortConfig::default())
}

/// Sorts `data` in place with the chosen engine.
///
/// On `Err` every element is still in `data`, in unspecified order.
pub fn sort_with_config<T, C>(
    algorithm: Algorithm,
    data: &mut [T],
    cmp: &C,
    config: &SortConfig,
) -> Result<(), SortError>
where
    T: Element,
    C: Comparator + ?Sized,
{
    match algorithm {
        Algorithm::Bubble => bubble::sort(data, cmp),
        Algorithm::Insertion => insertion::sort(data, cmp),
        Algorithm::Merge => merge::sort(data, cmp, &mut config.budget())?,
        Algorithm::Quick => match config.seed {
            Some(seed) => quick::sort(data, cmp, &mut StdRng::seed_from_u64(seed)),
            None => quick::sort(data, cmp, &mut rand::rng()),
        },
        Algorithm::Radix => radix::sort(data, cmp, config.width, &mut config.budget())?,
    }
    Ok(())
}

/// Bubble sort. Stable, O(n²), no auxiliary storage.
pub fn bubble_sort<T, C>(data: &mut [T], cmp: &C)
where
    T: AsRef<[u8]>,
    C: Comparator + ?Sized,
{
    bubble::sort(data, cmp);
}

/// Insertion sort. Stable, O(n²) worst case, O(n) on sorted input.
pub fn insertion_sort<T, C>(data: &mut [T], cmp: &C)
where
    T: AsRef<[u8]>,
    C: Comparator + ?Sized,
{
    insertion::sort(data, cmp);
}

/// Top-down merge sort. Stable, O(n log n), one work buffer of `n` handles.
pub fn merge_sort<T, C>(data: &mut [T], cmp: &C) -> Result<(), SortError>
where
    T: Element,
    C: Comparator + ?Sized,
{
    merge::sort(data, cmp, &mut ScratchBudget::unlimited())
}

/// Shuffle-then-partition quick sort using the thread RNG. Not stable.
pub fn quick_sort<T, C>(data: &mut [T], cmp: &C)
where
    T: AsRef<[u8]>,
    C: Comparator + ?Sized,
{
    quick::sort(data, cmp, &mut rand::rng());
}

/// LSD radix sort over `width` byte positions. Stable.
///
/// Positions past the end of an element read as `0x00`, so elements must
/// not contain `0x00` themselves; such input, like input wider than `width`,
/// is rejected before anything moves.
pub fn radix_sort<T, C>(data: &mut [T], cmp: &C, width: usize) -> Result<(), SortError>
where
    T: Element,
    C: Comparator + ?Sized,
{
    radix::sort(data, cmp, width, &mut ScratchBudget::unlimited())
}

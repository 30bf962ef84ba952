//! Core traits and types for linesort.
//!
//! This module defines:
//! - [`Element`]: what the engines sort (owned or borrowed byte handles).
//! - [`Comparator`]: the three-way ordering every engine is driven by.
//! - [`Direction`]: the two built-in lexicographic orders.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;

/// Default fixed width of an element, in bytes.
pub const MAX_INPUT_STRING_SIZE: usize = 1000;

/// A sortable handle to a byte string.
///
/// Engines only ever move handles between slots; the bytes behind a handle
/// are never copied. `Default` supplies the placeholder a slot holds while
/// its handle sits in merge work space or in a radix bucket, so it should
/// not allocate (true for `String`, `Vec<u8>`, `&str`, `&[u8]`, `Box<[u8]>`).
pub trait Element: AsRef<[u8]> + Default {}

impl<T: AsRef<[u8]> + Default> Element for T {}

/// A total order over byte strings.
///
/// Merge, quick and radix sort rely on the order being consistent
/// (antisymmetric and transitive). Radix sort additionally assumes the order
/// is decided byte by byte, because it only ever asks the comparator about
/// one-byte strings.
///
/// Any `Fn(&[u8], &[u8]) -> Ordering` is a comparator:
///
/// ```
/// use linesort::{Algorithm, sort};
///
/// // Case-insensitive ASCII order.
/// let by_lowercase = |a: &[u8], b: &[u8]| {
///     a.iter()
///         .map(u8::to_ascii_lowercase)
///         .cmp(b.iter().map(u8::to_ascii_lowercase))
/// };
///
/// let mut data = vec!["beta", "Alpha", "gamma"];
/// sort(Algorithm::Insertion, &mut data, &by_lowercase).unwrap();
/// assert_eq!(data, ["Alpha", "beta", "gamma"]);
/// ```
pub trait Comparator {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering;
}

impl<F> Comparator for F
where
    F: Fn(&[u8], &[u8]) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        self(a, b)
    }
}

/// Plain byte-wise lexicographic order.
#[inline]
pub fn ascending(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// The exact inverse of [`ascending`].
#[inline]
pub fn descending(a: &[u8], b: &[u8]) -> Ordering {
    ascending(a, b).reverse()
}

/// Compares two elements through their byte views.
#[inline(always)]
pub(crate) fn compare_elements<T, C>(cmp: &C, a: &T, b: &T) -> Ordering
where
    T: AsRef<[u8]> + ?Sized,
    C: Comparator + ?Sized,
{
    cmp.compare(a.as_ref(), b.as_ref())
}

/// The built-in comparators, selectable by name (`"asc"`, `"des"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub const NAMES: [&'static str; 2] = ["asc", "des"];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "des",
        }
    }
}

impl Comparator for Direction {
    #[inline]
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        match self {
            Direction::Ascending => ascending(a, b),
            Direction::Descending => descending(a, b),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Direction::Ascending),
            "des" => Ok(Direction::Descending),
            _ => Err(ParseNameError {
                kind: "comparator",
                found: s.to_string(),
                expected: &Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! # linesort
//!
//! `linesort` sorts a fixed number of bounded-length byte strings in place,
//! with the algorithm and the order both chosen at run time.
//!
//! ## Key Features
//!
//! - **Five engines**: bubble, insertion, merge, quick and radix sort, picked
//!   through the [`Algorithm`] enum or by name (`"bubble"`, `"insertion"`,
//!   `"merge"`, `"quick"`, `"radix"`).
//! - **Pluggable order**: every engine is driven by a [`Comparator`]. The
//!   built-in [`Direction`] covers ascending (`"asc"`) and descending
//!   (`"des"`) byte order, and any `Fn(&[u8], &[u8]) -> Ordering` works too.
//! - **Handle moves only**: elements (`String`, `Vec<u8>`, `&str`, ...) are
//!   moved between slots; the bytes behind them are never copied.
//! - **Comparator-driven radix sort**: the bucket order of radix sort is
//!   derived from the comparator, so one implementation serves every
//!   byte-wise order.
//! - **Explicit failures**: engines that need scratch memory return
//!   [`SortError::Allocation`] instead of aborting, and a [`SortConfig`] can
//!   cap that memory.
//!
//! ## Usage
//!
//! ```rust
//! use linesort::{Algorithm, Direction, sort};
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! sort(Algorithm::Merge, &mut data, &Direction::Descending).unwrap();
//!
//! assert_eq!(data, ["date", "cherry", "banana", "apple"]);
//! ```
//!
//! ### Radix Sort
//!
//! Radix sort scans a fixed number of byte positions. Shorter elements read
//! as zero-padded; longer ones are rejected.
//!
//! ```rust
//! use linesort::{Algorithm, Direction, SortConfig, SortError, sort_with_config};
//!
//! let config = SortConfig::default().with_width(4);
//!
//! let mut data = vec!["bbbb", "aaaa", "cccc"];
//! sort_with_config(Algorithm::Radix, &mut data, &Direction::Descending, &config).unwrap();
//! assert_eq!(data, ["cccc", "bbbb", "aaaa"]);
//!
//! let mut too_wide = vec!["abcde", "a"];
//! let err = sort_with_config(Algorithm::Radix, &mut too_wide, &Direction::Ascending, &config);
//! assert!(matches!(err, Err(SortError::ElementTooWide { index: 0, .. })));
//! ```
//!
//! ## Performance Characteristics
//!
//! | Engine    | Time           | Extra space        | Stable |
//! |-----------|----------------|--------------------|--------|
//! | bubble    | O(n²)          | O(1)               | yes    |
//! | insertion | O(n²), O(n) best | O(1)             | yes    |
//! | merge     | O(n log n)     | n handles          | yes    |
//! | quick     | O(n log n) expected | O(log n) stack | no     |
//! | radix     | O(width · n)   | 256 · n handles    | yes    |

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod lines;

pub use crate::algo::{
    ALL_ALGORITHMS, Algorithm, bubble_sort, insertion_sort, merge_sort, quick_sort, radix_sort, sort,
    sort_with_config,
};
pub use crate::config::SortConfig;
pub use crate::core::{Comparator, Direction, Element, MAX_INPUT_STRING_SIZE, ascending, descending};
pub use crate::error::{ParseNameError, SortError};

pub mod prelude {
    pub use crate::algo::{Algorithm, sort, sort_with_config};
    pub use crate::config::SortConfig;
    pub use crate::core::{Comparator, Direction, ascending, descending};
    pub use crate::error::SortError;
}

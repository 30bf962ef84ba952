//! Error types reported by the sorting engines and by name resolution.

use thiserror::Error;

/// Why a sort call gave up.
///
/// Whatever the variant, every element handed to the call is still owned by
/// the slice afterwards; only the order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Auxiliary storage (merge work space, radix buckets) could not be
    /// reserved, either because the allocator refused or because the
    /// configured scratch limit would be exceeded.
    #[error("failed to allocate {bytes} bytes for {what}")]
    Allocation { what: &'static str, bytes: usize },

    /// Radix sort only: an element does not fit the fixed width.
    #[error("element {index} is {len} bytes long, exceeding the radix width of {width}")]
    ElementTooWide {
        index: usize,
        len: usize,
        width: usize,
    },

    /// Radix sort only: an element holds the padding byte `0x00`, which
    /// radix sort cannot tell apart from the end of the element.
    #[error("element {index} contains a NUL byte at position {position}, which radix sort reserves for padding")]
    ElementContainsPadding { index: usize, position: usize },
}

impl SortError {
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, SortError::Allocation { .. })
    }
}

/// An algorithm or comparator name outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: expected one of {}, found \"{found}\"", quoted(.expected))]
pub struct ParseNameError {
    pub kind: &'static str,
    pub found: String,
    pub expected: &'static [&'static str],
}

fn quoted(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

//! Per-call tuning knobs and the scratch accounting behind them.

use crate::core::MAX_INPUT_STRING_SIZE;
use crate::error::SortError;

/// Settings applied to a single sort call.
///
/// ```
/// use linesort::SortConfig;
///
/// let config = SortConfig::default().with_width(16).with_seed(7);
/// assert_eq!(config.width, 16);
/// assert_eq!(config.scratch_limit, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Fixed element width scanned by radix sort.
    pub width: usize,
    /// Upper bound, in bytes, on auxiliary storage a call may reserve.
    /// `None` leaves the decision to the allocator.
    pub scratch_limit: Option<usize>,
    /// Seed for the quick sort shuffle. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            width: MAX_INPUT_STRING_SIZE,
            scratch_limit: None,
            seed: None,
        }
    }
}

impl SortConfig {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_scratch_limit(mut self, bytes: usize) -> Self {
        self.scratch_limit = Some(bytes);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn budget(&self) -> ScratchBudget {
        ScratchBudget {
            remaining: self.scratch_limit,
        }
    }
}

/// Tracks how much auxiliary memory one call may still reserve.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScratchBudget {
    remaining: Option<usize>,
}

impl ScratchBudget {
    pub(crate) fn unlimited() -> Self {
        Self { remaining: None }
    }

    /// Returns an empty vector with room for exactly `count` items.
    ///
    /// Both an exhausted budget and a refusing allocator map to
    /// [`SortError::Allocation`]; nothing is charged on failure.
    pub(crate) fn reserve<T>(&mut self, what: &'static str, count: usize) -> Result<Vec<T>, SortError> {
        let bytes = count
            .checked_mul(size_of::<T>())
            .ok_or(SortError::Allocation {
                what,
                bytes: usize::MAX,
            })?;

        if let Some(remaining) = self.remaining {
            if bytes > remaining {
                return Err(SortError::Allocation { what, bytes });
            }
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(count)
            .map_err(|_| SortError::Allocation { what, bytes })?;

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= bytes;
        }
        Ok(buf)
    }
}

//! Deterministic numbering of generated tests
//!
//! Generation index `i` runs over `[0, count)`. It maps to the suffix
//! `offset + i` and drives every cyclic choice a template makes.

use crate::GenerateError;
use regex::Regex;

/// Maps generation indices to test numbers for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingScheme {
    offset: u64,
}

impl NumberingScheme {
    pub fn new(offset: u64) -> Self {
        Self { offset }
    }

    /// First number handed out
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Number for generation index `index`. Saturates at `u64::MAX`;
    /// check [`NumberingScheme::last_number`] before handing out a range.
    pub fn number(&self, index: usize) -> u64 {
        self.offset.saturating_add(index as u64)
    }

    /// Last number of a `count`-long run, or `None` when the run would
    /// overflow `u64`. An empty run ends at the offset.
    pub fn last_number(&self, count: usize) -> Option<u64> {
        let span = u64::try_from(count.saturating_sub(1)).ok()?;
        self.offset.checked_add(span)
    }

    /// Scheme that starts after every number already present in `existing`,
    /// but never below this scheme's offset. Fails when the `count` numbers
    /// that follow would not fit in `u64`.
    pub fn continuing_after(&self, existing: &str, count: usize) -> crate::Result<Self> {
        let offset = match highest_comprehensive_number(existing)? {
            Some(highest) => {
                let next = highest.checked_add(1).ok_or_else(|| {
                    GenerateError::Numbering(format!("no number follows existing test {}", highest))
                })?;
                self.offset.max(next)
            }
            None => self.offset,
        };

        let scheme = Self { offset };
        if scheme.last_number(count).is_none() {
            return Err(GenerateError::Numbering(format!(
                "{} tests starting at {} exceed the numbering range",
                count, offset
            )));
        }
        Ok(scheme)
    }
}

/// `pool[index mod pool.len()]`. The pool must be non-empty.
pub fn cycle<T>(pool: &[T], index: usize) -> &T {
    &pool[index % pool.len()]
}

/// The four single-digit literals for generation index `index`:
/// `index % 10` through `(index + 3) % 10`.
pub fn rolling_digits(index: usize) -> [usize; 4] {
    [index % 10, (index + 1) % 10, (index + 2) % 10, (index + 3) % 10]
}

/// Highest `N` among functions named `test_<word>_comprehensive_<N>` in `source`
pub fn highest_comprehensive_number(source: &str) -> crate::Result<Option<u64>> {
    let pattern = Regex::new(r"\bfn\s+test_\w+?_comprehensive_(\d+)\s*\(")?;

    Ok(pattern
        .captures_iter(source)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u64>().ok())
        .max())
}

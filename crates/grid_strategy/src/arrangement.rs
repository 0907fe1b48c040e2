use crate::error::{GridError, Result};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Row lengths of a grid, top row first.
///
/// `(2, 3, 2)` describes the shape
///
/// ```text
///  x x
/// x x x
///  x x
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GridArrangement(Vec<usize>);

impl GridArrangement {
    /// `nrows` rows of `ncols` each
    pub fn uniform(ncols: usize, nrows: usize) -> Self {
        Self(vec![ncols; nrows])
    }

    pub fn rows(&self) -> &[usize] {
        &self.0
    }

    pub fn nrows(&self) -> usize {
        self.0.len()
    }

    /// Length of the widest row (0 when empty)
    pub fn ncols(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Number of items placed in the grid
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_uniform(&self) -> bool {
        self.0.iter().all_equal()
    }

    pub fn is_palindrome(&self) -> bool {
        self.0.iter().eq(self.0.iter().rev())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for GridArrangement {
    fn from(rows: Vec<usize>) -> Self {
        Self(rows)
    }
}

impl<'a> IntoIterator for &'a GridArrangement {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for GridArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "({},)", single),
            rows => write!(f, "({})", rows.iter().join(", ")),
        }
    }
}

/// Checks an item count before any layout work is done.
///
/// # Errors
/// Returns `GridError::InvalidCount` when `n` is zero or negative, or does not
/// fit in `usize` on this platform.
pub fn validate_count(n: i64) -> Result<usize> {
    if n <= 0 {
        return Err(GridError::InvalidCount { n });
    }
    usize::try_from(n).map_err(|_| GridError::InvalidCount { n })
}

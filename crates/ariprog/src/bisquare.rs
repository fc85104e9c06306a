//! Membership table of bisquares (sums of two squares).
//!
//! The table is dense: index `v` is marked iff `v = p² + q²` for some
//! `0 <= p, q <= bound`. Its length is `2 * bound² + 1`, the largest value
//! reachable with both squares at the bound.

use crate::error::{AriprogError, Result};

/// Dense membership table over `[0, 2 * bound²]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BisquareTable {
    bound: usize,
    marks: Vec<bool>,
}

impl BisquareTable {
    /// Size a table for `bound` would need, or `None` if no `Vec` can hold it.
    pub fn checked_len(bound: usize) -> Option<usize> {
        bound
            .checked_mul(bound)
            .and_then(|sq| sq.checked_mul(2))
            .and_then(|twice| twice.checked_add(1))
            .filter(|&len| len <= isize::MAX as usize)
    }

    /// Build the table for every `p, q` in `0..=bound`.
    ///
    /// Panics where [`BisquareTable::try_build`] would return an error.
    pub fn build(bound: usize) -> Self {
        match Self::try_build(bound) {
            Ok(table) => table,
            Err(e) => panic!("cannot build bisquare table: {}", e),
        }
    }

    /// Build the table, reporting an oversized bound or a failed allocation
    /// as [`AriprogError::BoundTooLarge`].
    pub fn try_build(bound: usize) -> Result<Self> {
        let len = Self::checked_len(bound).ok_or(AriprogError::BoundTooLarge { bound })?;
        let mut marks = Vec::new();
        marks
            .try_reserve_exact(len)
            .map_err(|_| AriprogError::BoundTooLarge { bound })?;
        marks.resize(len, false);

        for p in 0..=bound {
            let p_sq = p * p;
            // q >= p covers the same sums; the table is symmetric in p and q
            for q in p..=bound {
                marks[p_sq + q * q] = true;
            }
        }

        log::debug!("built bisquare table: bound={}, len={}", bound, len);
        Ok(Self { bound, marks })
    }

    /// The `M` this table was built for
    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Always false: index 0 (0² + 0²) exists for every bound.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check membership. Values past the end of the table are not bisquares.
    #[inline]
    pub fn contains(&self, value: usize) -> bool {
        self.marks.get(value).copied().unwrap_or(false)
    }

    /// Ascending iterator over the marked values
    pub fn values(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter_map(|(value, &marked)| marked.then_some(value))
    }

    /// Number of distinct bisquares in the table
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&marked| marked).count()
    }
}

//! Pairwise difference search for progressions of bisquares.
//!
//! Every ordered pair of bisquares `a < b` proposes the difference `b - a`;
//! the progression starting at `a` with that difference is then checked
//! term by term against the membership table.

use std::time::Instant;

use crate::bisquare::BisquareTable;
use crate::progression::Progression;

/// Raw output of a search, in discovery order
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Progressions that passed verification (not yet sorted)
    pub found: Vec<Progression>,
    /// Number of distinct bisquares considered as terms
    pub bisquare_count: usize,
    /// Number of candidate (start, difference) pairs verified
    pub pairs_tested: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Check that `first + k * difference` is a bisquare for every `k < length`.
///
/// Terms past the end of the table (or overflowing `usize`) fail the check.
#[inline]
pub fn is_progression(
    table: &BisquareTable,
    length: usize,
    first: usize,
    difference: usize,
) -> bool {
    let candidate = Progression::new(first, difference);
    (0..length).all(|k| candidate.term(k).is_some_and(|value| table.contains(value)))
}

/// Find every progression of `length` bisquares by pairing list positions `i < j`.
///
/// With `length == 1` every pair passes, so a table with a single bisquare
/// yields nothing.
pub fn find_progressions(table: &BisquareTable, length: usize) -> SearchResult {
    let start_time = Instant::now();
    let bisquares: Vec<usize> = table.values().collect();

    let mut found = Vec::new();
    let mut pairs_tested: usize = 0;

    for (i, &first) in bisquares.iter().enumerate() {
        for &later in &bisquares[i + 1..] {
            let difference = later - first;
            pairs_tested += 1;

            if is_progression(table, length, first, difference) {
                found.push(Progression::new(first, difference));
            }
        }
    }

    log::debug!(
        "pair search: length={}, bisquares={}, pairs={}, found={}",
        length,
        bisquares.len(),
        pairs_tested,
        found.len()
    );

    SearchResult {
        found,
        bisquare_count: bisquares.len(),
        pairs_tested,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}

/// Alternative: try every start bisquare with every difference that keeps the
/// second term inside the table (for cross-checking the pair search)
pub fn find_progressions_exhaustive(table: &BisquareTable, length: usize) -> SearchResult {
    let start_time = Instant::now();
    let last = table.len() - 1;

    let mut found = Vec::new();
    let mut pairs_tested: usize = 0;
    let mut bisquare_count: usize = 0;

    for first in table.values() {
        bisquare_count += 1;
        for difference in 1..=last - first {
            pairs_tested += 1;
            if is_progression(table, length, first, difference) {
                found.push(Progression::new(first, difference));
            }
        }
    }

    SearchResult {
        found,
        bisquare_count,
        pairs_tested,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}

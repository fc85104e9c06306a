//! Arithmetic progressions of bisquares.
//!
//! This crate finds every arithmetic progression of a fixed length whose
//! terms are all sums of two squares `p² + q²` with `0 <= p, q <= M`.
//! The pipeline is a dense membership table, a pairwise difference search
//! over it, and a collector that puts the results into canonical order.

pub mod bisquare;
pub mod collector;
pub mod error;
pub mod input;
pub mod progression;
pub mod search;

// Re-export main types
pub use bisquare::BisquareTable;
pub use collector::{Outcome, Report, ResultSet, NONE_SENTINEL};
pub use error::{AriprogError, Result};
pub use input::Problem;
pub use progression::Progression;
pub use search::{find_progressions, find_progressions_exhaustive, is_progression, SearchResult};

/// Run the whole pipeline for one problem.
///
/// Fails only if the membership table cannot be allocated.
pub fn solve(problem: &Problem) -> Result<Report> {
    let table = BisquareTable::try_build(problem.bound)?;
    let search = find_progressions(&table, problem.length);
    Ok(Report::from_search(&table, problem.length, search))
}

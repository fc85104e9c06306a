//! Collects verified progressions into canonical order and renders them.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::bisquare::BisquareTable;
use crate::progression::Progression;
use crate::search::SearchResult;

/// Literal printed when no progression exists
pub const NONE_SENTINEL: &str = "NONE";

/// Deduplicating set of progressions, ordered by (difference, first)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    items: BTreeSet<Progression>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the progression was already present
    pub fn insert(&mut self, progression: Progression) -> bool {
        self.items.insert(progression)
    }

    /// Consume the set, yielding progressions in canonical order
    pub fn into_sorted(self) -> Vec<Progression> {
        self.items.into_iter().collect()
    }
}

/// Final answer of a run, borrowed from its [`Report`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Found(&'a [Progression]),
    None,
}

/// Sorted results plus statistics about the search that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub length: usize,
    pub bound: usize,
    pub table_size: usize,
    pub bisquare_count: usize,
    pub pairs_tested: usize,
    pub time_elapsed_ms: u64,
    pub progressions: Vec<Progression>,
}

impl Report {
    pub fn from_search(table: &BisquareTable, length: usize, search: SearchResult) -> Self {
        let mut set = ResultSet::new();
        for progression in search.found {
            if !set.insert(progression) {
                log::debug!("duplicate progression {}", progression);
            }
        }
        let progressions = set.into_sorted();
        log::info!(
            "{} progression(s) of length {} with bound {}",
            progressions.len(),
            length,
            table.bound()
        );

        Self {
            length,
            bound: table.bound(),
            table_size: table.len(),
            bisquare_count: search.bisquare_count,
            pairs_tested: search.pairs_tested,
            time_elapsed_ms: search.time_elapsed_ms,
            progressions,
        }
    }

    pub fn outcome(&self) -> Outcome<'_> {
        match self.progressions.as_slice() {
            [] => Outcome::None,
            found => Outcome::Found(found),
        }
    }

    /// One `<first> <difference>` line per progression, or `NONE`
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        match self.outcome() {
            Outcome::Found(progressions) => {
                for progression in progressions {
                    // Writing to a String cannot fail
                    let _ = writeln!(out, "{}", progression);
                }
            }
            Outcome::None => {
                out.push_str(NONE_SENTINEL);
                out.push('\n');
            }
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Arithmetic progression value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A progression `first, first + difference, ...`.
///
/// Field order matters: the derived `Ord` compares `difference` first and
/// breaks ties on `first`, which is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub difference: usize,
    pub first: usize,
}

impl Progression {
    pub fn new(first: usize, difference: usize) -> Self {
        Self { difference, first }
    }

    /// The `k`-th term, or `None` if it overflows `usize`
    #[inline]
    pub fn term(&self, k: usize) -> Option<usize> {
        k.checked_mul(self.difference)
            .and_then(|offset| offset.checked_add(self.first))
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.difference)
    }
}

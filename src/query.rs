//! Two-keyword "or" search over a [`BuiltIndex`].

use std::collections::HashSet;

use tracing::debug;

use crate::index::BuiltIndex;
use crate::posting::Occurrence;

/// How many documents [`BuiltIndex::search`] returns, at most.
pub const DEFAULT_LIMIT: usize = 5;

impl BuiltIndex {
    /// The top [`DEFAULT_LIMIT`] documents containing `kw1` or `kw2`.
    pub fn search(&self, kw1: &str, kw2: &str) -> Option<Vec<&str>> {
        self.top_k(kw1, kw2, DEFAULT_LIMIT)
    }

    /// Documents containing `kw1` or `kw2`, highest frequency first, at
    /// most `k` of them.
    ///
    /// A document that contains both keywords appears once, ranked by
    /// whichever of its two occurrences is higher. Equal frequencies are
    /// resolved in favor of `kw1`.
    ///
    /// Returns `None` when neither keyword is in the index at all.
    /// Keywords are looked up as given, so they should already be lower case.
    pub fn top_k(&self, kw1: &str, kw2: &str, k: usize) -> Option<Vec<&str>> {
        let candidates: Vec<&Occurrence> = match (self.posting_list(kw1), self.posting_list(kw2)) {
            (None, None) => {
                debug!(kw1, kw2, "no matches");
                return None;
            }
            (Some(list), None) | (None, Some(list)) => list.iter().collect(),
            (Some(first), Some(second)) => {
                let mut merged: Vec<&Occurrence> = first.iter().chain(second.iter()).collect();
                // Stable, so ties keep `first` ahead of `second`.
                merged.sort_by(|a, b| b.frequency.cmp(&a.frequency));
                merged
            }
        };

        let mut seen = HashSet::new();
        let results: Vec<&str> = candidates
            .iter()
            .map(|occurrence| occurrence.document.as_str())
            .filter(|&document| seen.insert(document))
            .take(k)
            .collect();

        debug!(
            kw1,
            kw2,
            candidates = candidates.len(),
            results = results.len(),
            "search"
        );
        Some(results)
    }
}

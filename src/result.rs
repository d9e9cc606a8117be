//! Search result types.

use serde::{Deserialize, Serialize};

/// A single organic result as returned by the search endpoint.
///
/// Every field is optional; upstream entries are not guaranteed to carry
/// any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicResult {
    /// Rank reported by the upstream engine.
    #[serde(default)]
    pub position: Option<u32>,
    /// Result title.
    #[serde(default)]
    pub title: Option<String>,
    /// Result URL.
    #[serde(default)]
    pub link: Option<String>,
    /// Result description/snippet.
    #[serde(default)]
    pub snippet: Option<String>,
}

impl OrganicResult {
    /// Creates a result with only a link.
    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            link: Some(link.into()),
            ..Default::default()
        }
    }

    /// Returns the link if present and non-empty.
    pub fn usable_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|link| !link.is_empty())
    }
}

/// Organic results of one search, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    results: Vec<OrganicResult>,
}

impl SearchResults {
    /// Creates a new empty result container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a result.
    pub fn add_result(&mut self, result: OrganicResult) {
        self.results.push(result);
    }

    /// Returns the results.
    pub fn items(&self) -> &[OrganicResult] {
        &self.results
    }

    /// Returns the number of organic results, with or without links.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns whether there are no organic results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the links of all results that carry one, in order.
    ///
    /// Entries without a link are skipped. Duplicates are kept.
    pub fn links(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(OrganicResult::usable_link)
            .map(str::to_string)
            .collect()
    }
}

impl From<Vec<OrganicResult>> for SearchResults {
    fn from(results: Vec<OrganicResult>) -> Self {
        Self { results }
    }
}

impl FromIterator<OrganicResult> for SearchResults {
    fn from_iter<I: IntoIterator<Item = OrganicResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

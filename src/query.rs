//! Search query representation.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_RESULT_COUNT;
use crate::prompt::derive_query;

/// A search query with all parameters sent to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub query: String,
    /// Upstream engine identifier (e.g., "google").
    pub engine: String,
    /// Number of organic results requested.
    pub num: u32,
}

impl SearchQuery {
    /// Creates a new Google query with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            engine: "google".to_string(),
            num: DEFAULT_RESULT_COUNT,
        }
    }

    /// Creates a query from raw prompt text.
    pub fn from_prompt(prompt: &str) -> Self {
        Self::new(derive_query(prompt))
    }

    /// Sets the upstream engine.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Sets the number of results requested.
    pub fn with_num(mut self, num: u32) -> Self {
        self.num = num;
        self
    }
}

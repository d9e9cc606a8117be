//! Search engine trait.

use async_trait::async_trait;

use crate::{Result, SearchQuery, SearchResults};

/// Trait for implementing search backends.
///
/// A backend turns one query into the organic results of one upstream call.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Returns the engine name used in logs and errors.
    fn name(&self) -> &str;

    /// Performs a search and returns results.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults>;
}

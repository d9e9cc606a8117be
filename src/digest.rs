//! Search-then-summarize orchestration.

use serde::Serialize;
use tracing::{debug, info};

use crate::{Engine, Result, SearchQuery, Summarizer};

/// Outcome of one digest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Query sent to the search engine.
    pub query: String,
    /// Links collected from the organic results, in upstream order.
    pub links: Vec<String>,
    /// Text of the first completion choice.
    pub completion: String,
}

/// Runs a prompt through a search engine and then a summarizer.
pub struct Digest {
    engine: Box<dyn Engine>,
    summarizer: Box<dyn Summarizer>,
}

impl Digest {
    /// Creates a digest pipeline.
    pub fn new<E, S>(engine: E, summarizer: S) -> Self
    where
        E: Engine + 'static,
        S: Summarizer + 'static,
    {
        Self {
            engine: Box::new(engine),
            summarizer: Box::new(summarizer),
        }
    }

    /// Derives a query from `prompt`, searches, and summarizes.
    ///
    /// The search completes before the summarizer is called. Any error
    /// from either step is returned as-is.
    pub async fn run(&self, prompt: &str) -> Result<Report> {
        let query = SearchQuery::from_prompt(prompt);
        debug!("Derived query: {:?}", query.query);

        let results = self.engine.search(&query).await?;
        let links = results.links();
        info!(
            "Engine {} gave {} links from {} organic results",
            self.engine.name(),
            links.len(),
            results.len()
        );

        let completion = self.summarizer.summarize(prompt, &links).await?;

        Ok(Report {
            query: query.query,
            links,
            completion,
        })
    }
}

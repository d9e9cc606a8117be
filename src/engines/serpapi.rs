//! SerpAPI search engine implementation.
//!
//! SerpAPI proxies Google (and other engines) and returns structured JSON,
//! so no HTML scraping is involved.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::{Config, DEFAULT_SEARCH_ENDPOINT};
use crate::{DigestError, Engine, OrganicResult, Result, SearchQuery, SearchResults};

const SERVICE: &str = "SerpAPI";

/// Search engine backed by the SerpAPI JSON endpoint.
pub struct SerpApi {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl SerpApi {
    /// Creates a new SerpAPI engine against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(DEFAULT_SEARCH_ENDPOINT)?,
            api_key: api_key.into(),
        })
    }

    /// Creates an engine from the run configuration.
    pub fn from_config(config: &Config, client: Client) -> Self {
        Self {
            client,
            endpoint: config.search_endpoint.clone(),
            api_key: config.search_api_key.clone(),
        }
    }

    /// Sets the search endpoint.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }
}

#[derive(Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    #[serde(default)]
    error: Option<String>,
}

/// Interprets a successful SerpAPI response body.
///
/// An `error` notice on a success status only gets logged; whatever
/// organic results are present (possibly none) are returned.
fn parse_response(body: &str) -> Result<SearchResults> {
    let response: SerpResponse = serde_json::from_str(body)?;

    if let Some(message) = &response.error {
        warn!("{} notice: {}", SERVICE, message);
    }

    Ok(response.organic_results.into())
}

/// Pulls the `error` string out of a failed response, if there is one.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<SerpResponse>(body)
        .ok()
        .and_then(|response| response.error)
}

#[async_trait]
impl Engine for SerpApi {
    fn name(&self) -> &str {
        SERVICE
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResults> {
        debug!(
            "{} search: q={:?} engine={} num={}",
            SERVICE, query.query, query.engine, query.num
        );

        let num = query.num.to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", query.query.as_str()),
                ("api_key", self.api_key.as_str()),
                ("engine", query.engine.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        // The request URL carries the api_key, so it is stripped from errors.
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            return Err(DigestError::Api {
                service: SERVICE.to_string(),
                message: error_message(&body).unwrap_or_else(|| status.to_string()),
            });
        }

        let results = parse_response(&body)?;
        for (i, result) in results.items().iter().enumerate() {
            if result.usable_link().is_none() {
                warn!("{} organic result {} has no link, skipping", SERVICE, i + 1);
            }
        }
        info!("{} returned {} organic results", SERVICE, results.len());

        Ok(results)
    }
}

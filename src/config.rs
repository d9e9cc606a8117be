//! Runtime configuration read from the process environment.

use url::Url;

use crate::{DigestError, Result};

/// Default SerpAPI search endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://serpapi.com/search";

/// Default OpenAI chat-completion endpoint.
pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature for summaries.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default number of organic results requested.
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// Environment variable holding the SerpAPI key.
pub const SERPAPI_KEY_VAR: &str = "SERPAPI_API_KEY";

/// Environment variable holding the OpenAI key.
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

const SERPAPI_ENDPOINT_VAR: &str = "SERPAPI_ENDPOINT";
const OPENAI_ENDPOINT_VAR: &str = "OPENAI_ENDPOINT";
const OPENAI_MODEL_VAR: &str = "OPENAI_MODEL";

/// Endpoints, credentials and request parameters for one run.
#[derive(Clone)]
pub struct Config {
    /// Search endpoint URL.
    pub search_endpoint: Url,
    /// SerpAPI key.
    pub search_api_key: String,
    /// Chat-completion endpoint URL.
    pub completion_endpoint: Url,
    /// OpenAI key.
    pub completion_api_key: String,
    /// Chat model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Config {
    /// Creates a configuration with default endpoints and the given keys.
    pub fn new(search_api_key: impl Into<String>, completion_api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            search_endpoint: Url::parse(DEFAULT_SEARCH_ENDPOINT)?,
            search_api_key: search_api_key.into(),
            completion_endpoint: Url::parse(DEFAULT_COMPLETION_ENDPOINT)?,
            completion_api_key: completion_api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// Keys that are unset or blank are reported as missing. Optional
    /// overrides fall back to the defaults when unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| DigestError::MissingCredential(name.to_string()))
        };

        let mut config = Self::new(required(SERPAPI_KEY_VAR)?, required(OPENAI_KEY_VAR)?)?;

        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(endpoint) = optional(SERPAPI_ENDPOINT_VAR) {
            config = config.with_search_endpoint(endpoint.trim())?;
        }
        if let Some(endpoint) = optional(OPENAI_ENDPOINT_VAR) {
            config = config.with_completion_endpoint(endpoint.trim())?;
        }
        if let Some(model) = optional(OPENAI_MODEL_VAR) {
            config = config.with_model(model);
        }

        Ok(config)
    }

    /// Sets the search endpoint.
    pub fn with_search_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.search_endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    /// Sets the chat-completion endpoint.
    pub fn with_completion_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.completion_endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    /// Sets the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("search_endpoint", &self.search_endpoint.as_str())
            .field("search_api_key", &"<redacted>")
            .field("completion_endpoint", &self.completion_endpoint.as_str())
            .field("completion_api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

//! Chat-completion client that summarizes a prompt and its search links.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::config::{Config, DEFAULT_COMPLETION_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::{DigestError, Result};

const SERVICE: &str = "OpenAI";

/// System instruction sent ahead of every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a precise research analyst. Summarize and filter results.";

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Builds the two-message exchange for a prompt and its links.
///
/// The user message is the prompt followed by a `Links:` block with one
/// link per line.
pub fn build_messages(prompt: &str, links: &[String]) -> Vec<ChatMessage> {
    let user = format!("{}\n\nLinks:\n{}", prompt, links.join("\n"));
    vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(user)]
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts the first choice's content from a completion body.
fn parse_completion(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(DigestError::EmptyCompletion)?;
    Ok(choice.message.content.unwrap_or_default())
}

/// Trait for turning a prompt and its links into a summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes the prompt together with the collected links.
    async fn summarize(&self, prompt: &str, links: &[String]) -> Result<String>;
}

/// OpenAI-compatible chat-completion client.
pub struct OpenAiChat {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiChat {
    /// Creates a client against the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(DEFAULT_COMPLETION_ENDPOINT)?,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    /// Creates a client from the run configuration.
    pub fn from_config(config: &Config, client: Client) -> Self {
        Self {
            client,
            endpoint: config.completion_endpoint.clone(),
            api_key: config.completion_api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Sets the chat-completion endpoint.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns the model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one chat-completion request and returns the first choice's text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };
        debug!(
            "{} completion: model={} messages={} temperature={}",
            SERVICE,
            self.model,
            messages.len(),
            self.temperature
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(DigestError::Api {
                service: SERVICE.to_string(),
                message,
            });
        }

        let content = parse_completion(&body)?;
        info!("{} returned {} bytes of completion", SERVICE, content.len());
        Ok(content)
    }
}

#[async_trait]
impl Summarizer for OpenAiChat {
    async fn summarize(&self, prompt: &str, links: &[String]) -> Result<String> {
        self.complete(&build_messages(prompt, links)).await
    }
}

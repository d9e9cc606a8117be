//! # serp-digest
//!
//! Turns a text prompt into a web search, then asks a chat-completion model
//! to summarize the prompt together with the links that came back.
//!
//! The pipeline has three steps, run strictly in order:
//!
//! - Load the prompt and derive a query from its non-blank lines
//! - Fetch organic results from SerpAPI and keep their links
//! - Send the prompt plus links to an OpenAI-compatible chat endpoint
//!
//! ## Example
//!
//! ```rust,no_run
//! use serp_digest::{engines::SerpApi, Config, Digest, OpenAiChat};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = reqwest::Client::new();
//!     let digest = Digest::new(
//!         SerpApi::from_config(&config, client.clone()),
//!         OpenAiChat::from_config(&config, client),
//!     );
//!
//!     let report = digest.run("climate policy\n2024 updates").await?;
//!     println!("{}", report.completion);
//!     Ok(())
//! }
//! ```

mod digest;
mod engine;
mod error;
mod query;
mod result;

pub mod config;
pub mod engines;
pub mod prompt;
pub mod summarizer;

pub use config::Config;
pub use digest::{Digest, Report};
pub use engine::Engine;
pub use error::{DigestError, Result};
pub use query::SearchQuery;
pub use result::{OrganicResult, SearchResults};
pub use summarizer::{ChatMessage, OpenAiChat, Role, Summarizer};

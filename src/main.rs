//! serp-digest CLI - search the web for a prompt and summarize the links.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use serp_digest::{engines::SerpApi, prompt::load_prompt, Config, Digest, DigestError, OpenAiChat};

/// Search the web for a prompt and summarize the results
#[derive(Parser)]
#[command(name = "serp-digest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the prompt file
    prompt_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(prompt_file) = cli.prompt_file else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "serp-digest".to_string());
        eprintln!("{}", DigestError::Usage(program));
        std::process::exit(1);
    };

    // A missing .env is fine; anything already exported wins.
    dotenv::dotenv().ok();

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let prompt = load_prompt(&prompt_file)?;
    let config = Config::from_env()?;
    tracing::debug!("Loaded {:?}", config);

    let client = reqwest::Client::new();
    let digest = Digest::new(
        SerpApi::from_config(&config, client.clone()),
        OpenAiChat::from_config(&config, client),
    );

    let report = digest.run(&prompt).await?;
    println!("{}", report.completion);

    Ok(())
}

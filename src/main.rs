//! Promptgate CLI entry point

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use promptgate::llm::GeminiClient;
use promptgate::persona::Persona;
use promptgate::service::{GeminiService, RetryPolicy};

#[derive(Parser)]
#[command(name = "promptgate")]
#[command(about = "HTTP facade for the Gemini API with prompt tools")]
#[command(version)]
struct Cli {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; default to info when RUST_LOG is unset
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = promptgate::config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let client = GeminiClient::new(&config.gemini_api_key, &config.model);
    let service = Arc::new(GeminiService::new(
        Arc::new(client),
        RetryPolicy::default(),
        Persona::default(),
    ));

    tracing::info!(model = %config.model, "starting promptgate");
    promptgate::server::serve(&config, service).await?;

    Ok(())
}

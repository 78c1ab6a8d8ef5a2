use anyhow::Result;
use clap::Parser;
use ngo_nexus_studio::ai::{GeminiClient, GenerativeService};
use ngo_nexus_studio::models::Config;
use ngo_nexus_studio::server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "ngo-nexus-studio")]
#[command(about = "Action-dispatch proxy for the NGO Nexus AI Studio")]
struct CliArgs {
    /// Bind address override (defaults to STUDIO_BIND or 0.0.0.0).
    #[arg(long)]
    bind: Option<String>,

    /// Port override (defaults to STUDIO_PORT or 8788).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ngo_nexus_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ngo-nexus-studio");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let bind = args.bind.unwrap_or(config.bind);
    let port = args.port.unwrap_or(config.port);
    let addr = format!("{}:{}", bind, port);

    let ai: Arc<dyn GenerativeService> = Arc::new(GeminiClient::new(config.gemini_api_key));

    if let Err(e) = server::serve(&addr, ai).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

//! tubegrab - video info and download proxy
//!
//! Serves a small HTTP API in front of yt-dlp: one endpoint resolves video
//! metadata and muxed formats, the other streams a chosen format back.

use anyhow::Result;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tubegrab::extractor::{Extractor, YtDlpExtractor};
use tubegrab::utils::{self, ServerSettings, TubegrabError};
use tubegrab::{proxy, server};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Interface to bind
    #[arg(long, env = "TUBEGRAB_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind
    #[arg(long, short, env = "PORT", default_value_t = utils::config::DEFAULT_PORT)]
    port: u16,

    /// Path to the yt-dlp executable (discovered when omitted)
    #[arg(long, env = "TUBEGRAB_YTDLP")]
    ytdlp: Option<PathBuf>,

    /// Allowed CORS origin; repeat or comma-separate. Any origin when omitted.
    #[arg(long, env = "TUBEGRAB_ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origin: Vec<String>,

    /// Print the info card for a URL and exit
    #[arg(long, value_name = "URL")]
    inspect: Option<String>,
}

impl From<&Args> for ServerSettings {
    fn from(args: &Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            ytdlp_path: args.ytdlp.clone(),
            allowed_origins: args.allowed_origin.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tubegrab=info,tower_http=info")),
        )
        .init();

    let settings = ServerSettings::from(&args);
    let ytdlp = match &settings.ytdlp_path {
        Some(path) => YtDlpExtractor::with_path(path)?,
        None => YtDlpExtractor::new()?,
    };
    let extractor: Arc<dyn Extractor> = Arc::new(ytdlp);

    if let Some(url) = args.inspect {
        return Ok(inspect(extractor.as_ref(), &url).await);
    }

    server::run(settings, extractor).await?;
    Ok(ExitCode::SUCCESS)
}

/// Render the same card the web client shows
async fn inspect(extractor: &dyn Extractor, url: &str) -> ExitCode {
    match proxy::resolve_info(extractor, Some(url)).await {
        Ok(response) => {
            print!("{}", proxy::render_card(&response));
            ExitCode::SUCCESS
        }
        Err(e @ TubegrabError::InvalidUrl(_)) => {
            tracing::warn!("Rejected URL: {}", e);
            eprintln!("Invalid URL");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("Failed to fetch video info: {}", e);
            eprintln!("Failed to fetch video info");
            ExitCode::FAILURE
        }
    }
}

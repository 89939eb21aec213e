//! Groupboard CLI entry point.
//!
//! Performs one page load: reads the credential, issues the three API
//! calls, and writes the rendered page to stdout or a file. A degraded
//! page (failed greeting, list, or annotations) still renders and exits
//! zero; only local failures are fatal.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use groupboard_client::ApiClient;
use groupboard_page::{Page, PageLoad, PageRenderer};

mod cli;

use cli::Cli;

/// Local failures that prevent rendering at all.
#[derive(Debug, Error)]
enum AppError {
    /// The base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    BadBaseUrl(#[from] url::ParseError),

    /// The output file could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env.local if it exists (for GROUPBOARD_TOKEN etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));
    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: &Cli) -> Result<(), AppError> {
    let base_url = Url::parse(&cli.base_url)?;

    let token = cli.resolve_token();
    if token.is_none() {
        // Non-fatal: requests go out unauthenticated and the remote
        // service rejects them, degrading the page instead of crashing it.
        warn!("No bearer token found; loading the page unauthenticated");
    }

    let client = ApiClient::new(base_url, token);
    let mut renderer = PageRenderer::new(Page::new());
    let summary = PageLoad::new(&client).run(&mut renderer).await;
    info!(?summary, "Load finished");

    let html = renderer.into_page().to_html();
    write_output(cli.output.as_deref(), &html)?;
    Ok(())
}

fn write_output(path: Option<&Path>, html: &str) -> Result<(), AppError> {
    match path {
        Some(path) => std::fs::write(path, html)?,
        None => print!("{}", html),
    }
    Ok(())
}

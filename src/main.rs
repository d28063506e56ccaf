//! Liftoff - a terminal browser for SpaceX launches
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use liftoff_api::LaunchClient;
use liftoff_app::config;
use liftoff_core::prelude::*;

/// Liftoff - browse SpaceX launches from your terminal
#[derive(Parser, Debug)]
#[command(name = "liftoff")]
#[command(about = "Browse SpaceX launches from your terminal", long_about = None)]
struct Args {
    /// Seed the search with an initial mission-name query
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Records per page request
    #[arg(long)]
    page_size: Option<usize>,

    /// Launches API root (defaults to the public SpaceX v3 API)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    liftoff_core::logging::init()?;

    let mut settings = config::load_settings();
    if let Some(page_size) = args.page_size {
        settings.fetch.page_size = page_size;
    }
    if let Some(api_url) = args.api_url {
        settings.fetch.api_base_url = api_url;
    }

    info!(
        page_size = settings.fetch.page_size,
        base_url = %settings.fetch.api_base_url,
        "Settings resolved"
    );

    let client = LaunchClient::new(&settings.fetch.api_base_url)?;

    liftoff_tui::run(settings, client, args.query).await?;
    Ok(())
}

//! Terminal client for the cinesubz scraper.
//!
//! Runs the same operations as the HTTP API directly against the target site,
//! without starting the server.
//!
//! # Usage
//!
//! ```bash
//! # Check that the target site is reachable
//! cargo run --bin scrape-cli -- health
//!
//! # Search (prompts for a keyword when omitted)
//! cargo run --bin scrape-cli -- search "Spider-Man"
//!
//! # Item details and download candidates
//! cargo run --bin scrape-cli -- details https://cinesubz.co/movies/dune-2021/
//!
//! # Resolve a countdown page
//! cargo run --bin scrape-cli -- download https://cinesubz.co/api-1080p/9
//!
//! # Rewrite a legacy storage URL offline
//! cargo run --bin scrape-cli -- transform https://google.com/server11/1:/movie.mp4
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `TARGET_BASE_URL`, `FETCH_TIMEOUT_SECS`.

use cinesubz_scraper::api::dto::details::DetailsResponse;
use cinesubz_scraper::api::dto::download::DownloadResponse;
use cinesubz_scraper::api::dto::search::SearchResponse;
use cinesubz_scraper::config;
use cinesubz_scraper::extraction::transform;
use cinesubz_scraper::server::build_state;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use serde::Serialize;

/// CLI tool for querying cinesubz.co.
#[derive(Parser)]
#[command(name = "scrape-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check target reachability
    Health,

    /// Search by keyword
    Search {
        /// Keyword (prompted for if omitted)
        query: Option<String>,
    },

    /// Extract metadata and download candidates from an item page
    Details {
        /// Item page URL
        url: String,
    },

    /// Resolve a countdown page into final download links
    Download {
        /// Countdown page URL
        url: String,
    },

    /// Rewrite a legacy storage URL to its canonical form (offline)
    Transform {
        /// URL to rewrite
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform { url } => handle_transform(&url),
        command => handle_online(command).await,
    }
}

/// Commands that fetch from the target site.
async fn handle_online(command: Commands) -> Result<()> {
    let config = config::load_from_env()?;
    let state = build_state(&config)?;
    let catalog = state.catalog;

    match command {
        Commands::Health => {
            println!("{}", "🩺 Health".bright_blue().bold());
            println!("  Target: {}", catalog.target_host().cyan());
            match catalog.probe_target().await {
                Ok(latency) => println!(
                    "  {} in {}",
                    "Online".green().bold(),
                    format!("{}ms", latency.as_millis()).bright_white()
                ),
                Err(e) => anyhow::bail!("{} {}", "Target unreachable:".red().bold(), e),
            }
        }
        Commands::Search { query } => {
            let query = match query {
                Some(q) if !q.is_empty() => q,
                _ => Input::new().with_prompt("Search for").interact_text()?,
            };
            println!("{} {}", "🔍 Searching".bright_blue().bold(), query.cyan());

            let response = SearchResponse::from(catalog.search(&query).await?);
            print_count(response.count, "result");
            print_json(&response)?;
        }
        Commands::Details { url } => {
            println!("{} {}", "📄 Details".bright_blue().bold(), url.cyan());

            let response = DetailsResponse::from(catalog.details(&url).await?);
            print_count(response.data.download_links.len(), "download link");
            print_json(&response)?;
        }
        Commands::Download { url } => {
            println!("{} {}", "⬇️  Resolving".bright_blue().bold(), url.cyan());

            let response = DownloadResponse::from(catalog.download(&url).await?);
            if !response.success {
                println!("  {}", "No download links found".yellow());
            } else {
                print_count(response.count, "link");
            }
            print_json(&response)?;
        }
        Commands::Transform { url } => handle_transform(&url)?,
    }

    Ok(())
}

fn handle_transform(url: &str) -> Result<()> {
    let transformed = transform(url);
    if transformed.is_empty() {
        println!("{}", "Placeholder link, nothing to rewrite".yellow());
    } else {
        println!("  {} {}", "From:".bright_black(), url);
        println!("  {} {}", "To:  ".bright_black(), transformed.green().bold());
    }
    Ok(())
}

fn print_count(count: usize, noun: &str) {
    let plural = if count == 1 { "" } else { "s" };
    println!(
        "  {} {noun}{plural}",
        count.to_string().bright_white().bold()
    );
    println!();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{json}");
    Ok(())
}

//! Jangbu CLI
//!
//! Command-line interface for the Jangbu blog backend: serve the HTTP API,
//! run one-shot searches, and inspect the loaded corpus.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use jangbu_api::AppState;
use jangbu_content::PostLoader;
use jangbu_search::SearchIndex;

use crate::config::BlogConfig;

/// Jangbu - Korean investment-blog backend
#[derive(Parser, Debug)]
#[command(name = "jangbu")]
#[command(about = "Jangbu blog backend: content loading, fuzzy search, HTTP API", long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the corpus and serve the HTTP API
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run a one-shot search against the corpus
    Search {
        /// Free-text query
        query: String,
        /// Maximum results to print
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// List the loaded posts, newest first
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = BlogConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;

    match args.command {
        Command::Serve { bind } => {
            let addr: SocketAddr = bind
                .unwrap_or_else(|| config.bind.clone())
                .parse()
                .context("invalid bind address")?;

            let loader = PostLoader::new(&config.content_path);
            let state = Arc::new(AppState::new(loader, config.search).await?);
            jangbu_api::serve(addr, state).await?;
        }
        Command::Search { query, limit } => {
            let loader = PostLoader::new(&config.content_path);
            let posts = loader.load_all().await?;
            let index = SearchIndex::build_with_config(&posts, config.search);

            let mut hits = index.search(&query);
            hits.truncate(limit);

            if hits.is_empty() {
                println!("no matches for {query:?}");
            }
            for hit in hits {
                println!("{:.3}  {}  {}", hit.score, hit.post.slug, hit.post.title);
            }
        }
        Command::List => {
            let loader = PostLoader::new(&config.content_path);
            let posts = loader.load_all().await?;

            for post in posts {
                let date = post.date.as_deref().unwrap_or("----------");
                println!("{date}  {}  {}", post.slug, post.title);
            }
        }
    }

    Ok(())
}

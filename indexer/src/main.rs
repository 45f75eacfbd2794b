use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexer::{build_server, load_config, run_batch, run_match, run_search, Filter};
use search_core::{DocumentId, DocumentStatus};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Index short documents in memory and run TF-IDF queries", long_about = None)]
struct Cli {
    /// Space-separated stop words, e.g. "and in on"
    #[arg(long, global = true, default_value = "")]
    stop_words: String,
    /// JSON file with ranking settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Maximum number of documents returned per query
    #[arg(long, global = true)]
    max_results: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents for a query
    Search {
        /// Corpus file or directory (.json / .jsonl)
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        query: String,
        #[arg(long, default_value = "active")]
        status: DocumentStatus,
        /// Only documents with at least this average rating
        #[arg(long, allow_hyphen_values = true)]
        min_rating: Option<i32>,
        /// Print results in pages of this size
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show which query words a document contains
    Match {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        query: String,
        #[arg(long)]
        id: DocumentId,
    },
    /// Run one query per line through the request history
    Batch {
        #[arg(long)]
        input: PathBuf,
        /// File with one query per line
        #[arg(long)]
        queries: PathBuf,
        #[arg(long, default_value = "active")]
        status: DocumentStatus,
        #[arg(long, allow_hyphen_values = true)]
        min_rating: Option<i32>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.max_results)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search { input, query, status, min_rating, page_size } => {
            let server = build_server(&cli.stop_words, config, &input)?;
            run_search(&server, &query, Filter { status, min_rating }, page_size, &mut out)?;
        }
        Commands::Match { input, query, id } => {
            let server = build_server(&cli.stop_words, config, &input)?;
            run_match(&server, &query, id, &mut out)?;
        }
        Commands::Batch { input, queries, status, min_rating } => {
            let server = build_server(&cli.stop_words, config, &input)?;
            let text = fs::read_to_string(&queries).with_context(|| format!("read {}", queries.display()))?;
            run_batch(&server, &text, Filter { status, min_rating }, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

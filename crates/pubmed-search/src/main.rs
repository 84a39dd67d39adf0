//! PubMed search CLI - Entry Point
//!
//! Prints the report on stdout; logs go to stderr.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_search::models::{ResponseFormat, SearchInput};
use pubmed_search::{Config, DEFAULT_MAX_RESULTS, PubMedClient, PubMedSearch};

#[derive(Parser, Debug)]
#[command(name = "pubmed-search")]
#[command(about = "Search PubMed and print the results as Markdown")]
#[command(version)]
struct Cli {
    /// Free-text PubMed query
    query: String,

    /// Maximum number of results to return (1-50)
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS, allow_negative_numbers = true)]
    max_results: i32,

    /// Output format: markdown or json
    #[arg(long, default_value = "markdown")]
    format: Format,

    /// Request timeout in seconds (at least 1)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Format {
    /// Markdown report
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl From<Format> for ResponseFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => Self::Markdown,
            Format::Json => Self::Json,
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        format = ?cli.format,
        "Starting PubMed search"
    );

    let config = Config::from_env()?.with_request_timeout(Duration::from_secs(cli.timeout));
    let client = PubMedClient::new(config)?;
    let searcher = PubMedSearch::new(Arc::new(client));

    let input = SearchInput {
        query: cli.query,
        max_results: cli.max_results,
        response_format: cli.format.into(),
    };

    println!("{}", searcher.search_with_format(&input).await);

    Ok(())
}

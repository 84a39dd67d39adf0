//! PubMed literature search
//!
//! Queries NCBI E-utilities for a free-text search string, fetches the
//! bibliographic metadata of the matching articles and renders it as a
//! Markdown report.
//!
//! Each search makes at most two requests, in order:
//!
//! 1. **ESearch** resolves the query to an ordered list of PMIDs.
//! 2. **ESummary** fetches title, authors, journal, date and DOI for all of
//!    them in one batch.
//!
//! # Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() {
//!     let report = pubmed_search::search("CRISPR gene editing", 5).await;
//!     println!("{report}");
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod search;

use std::sync::Arc;

pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, SearchError};
pub use models::{Record, ResultLimit, SearchInput};
pub use search::PubMedSearch;

/// Default number of records fetched per search.
pub const DEFAULT_MAX_RESULTS: i32 = config::limits::DEFAULT_RESULTS;

/// Search PubMed with the production configuration.
///
/// Always returns text: a report, a "no results" message, or an
/// `Error in PubMed search: ...` message.
pub async fn search(query: &str, max_results: i32) -> String {
    match PubMedClient::new(Config::default()) {
        Ok(client) => PubMedSearch::new(Arc::new(client)).search(query, max_results).await,
        Err(e) => formatters::error_message(&e.to_string()),
    }
}

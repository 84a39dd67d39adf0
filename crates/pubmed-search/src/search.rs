//! Search orchestration: validate, locate, summarize, format.
//!
//! [`PubMedSearch::search`] never fails. Validation, transport and parse
//! errors all come back as an inline error message so callers always receive
//! text.

use std::sync::Arc;

use crate::client::PubMedClient;
use crate::error::SearchResult;
use crate::formatters;
use crate::models::{Record, ResponseFormat, SearchInput};

/// Runs PubMed searches against one client.
#[derive(Debug, Clone)]
pub struct PubMedSearch {
    /// API client.
    client: Arc<PubMedClient>,
}

impl PubMedSearch {
    /// Create a searcher over a shared client.
    #[must_use]
    pub fn new(client: Arc<PubMedClient>) -> Self {
        Self { client }
    }

    /// Search PubMed and return a Markdown report.
    pub async fn search(&self, query: &str, max_results: i32) -> String {
        self.search_with_format(&SearchInput::new(query, max_results)).await
    }

    /// Search PubMed and render the results in the input's format.
    pub async fn search_with_format(&self, input: &SearchInput) -> String {
        match self.search_records(input).await {
            Ok(records) if records.is_empty() => formatters::no_results_message(&input.query),
            Ok(records) => match input.response_format {
                ResponseFormat::Markdown => formatters::format_report(&input.query, &records),
                ResponseFormat::Json => formatters::format_records_json(&input.query, &records),
            },
            Err(e) => {
                tracing::warn!(query = %input.query, error = %e, "PubMed search failed");
                formatters::error_message(&e.to_user_message())
            }
        }
    }

    /// Run the search and return the records in relevance order.
    ///
    /// An empty vector means the query matched nothing; ESummary is not
    /// called in that case.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any request when the query is blank
    /// or the limit is out of range, and a client error when either request
    /// fails.
    pub async fn search_records(&self, input: &SearchInput) -> SearchResult<Vec<Record>> {
        let limit = input.validate()?;

        tracing::info!(query = %input.query, max_results = %limit, "Searching PubMed");

        let ids = self.client.search_ids(&input.query, limit).await?;
        if ids.is_empty() {
            tracing::info!(query = %input.query, "No matches");
            return Ok(Vec::new());
        }

        let records = self.client.fetch_records(&ids).await?;
        tracing::info!(count = records.len(), "Fetched article summaries");

        Ok(records)
    }
}

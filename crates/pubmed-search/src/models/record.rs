//! The bibliographic record rendered in reports.

use serde::{Deserialize, Serialize};

use super::ArticleSummary;

/// One bibliographic entry, flattened from a document summary.
///
/// Every field except `pmid` and `article_url` may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// PubMed identifier.
    pub pmid: String,

    /// Article title ("Untitled" when upstream has none).
    pub title: String,

    /// Comma-joined author names.
    pub authors: String,

    /// Free-form publication date.
    pub publication_date: String,

    /// Full journal name.
    pub journal_name: String,

    /// Digital Object Identifier.
    pub doi: String,

    /// Link to the article's PubMed page.
    pub article_url: String,
}

impl Record {
    /// Build a record from the summary returned for `pmid`.
    #[must_use]
    pub fn from_summary(pmid: &str, summary: &ArticleSummary, article_url: String) -> Self {
        Self {
            pmid: pmid.to_string(),
            title: summary.title_or_default().to_string(),
            authors: summary.author_names(),
            publication_date: summary.publication_date().to_string(),
            journal_name: summary.journal().to_string(),
            doi: summary.doi().unwrap_or_default().to_string(),
            article_url,
        }
    }

    /// Journal and date joined by " - ", skipping whichever is empty.
    #[must_use]
    pub fn published_in(&self) -> Option<String> {
        let parts: Vec<&str> = [self.journal_name.as_str(), self.publication_date.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() { None } else { Some(parts.join(" - ")) }
    }
}

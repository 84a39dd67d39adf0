//! Markdown output formatting.
//!
//! The layout is consumed by downstream Markdown renderers, so line order and
//! blank-line spacing are kept stable.

use crate::models::Record;

/// Heading of every report.
pub const REPORT_TITLE: &str = "# PubMed Search Results";

/// Format the full report for `query`.
///
/// Callers route the zero-result case to [`no_results_message`] first, but an
/// empty slice still renders a valid header.
#[must_use]
pub fn format_report(query: &str, records: &[Record]) -> String {
    let mut sections = Vec::with_capacity(records.len() + 1);

    sections.push(format!(
        "{REPORT_TITLE}\n\n**Query:** {query}\n\n**Found:** {} results\n\n",
        records.len()
    ));

    for (i, record) in records.iter().enumerate() {
        sections.push(format_record_markdown(record, i + 1));
    }

    sections.concat()
}

/// Format a single record as a numbered Markdown section, including its separator.
#[must_use]
pub fn format_record_markdown(record: &Record, index: usize) -> String {
    let mut lines = vec![format!("## {}. {}", index, record.title)];

    if !record.authors.is_empty() {
        lines.push(format!("**Authors:** {}", record.authors));
    }

    if let Some(published) = record.published_in() {
        lines.push(format!("**Published in:** {published}"));
    }

    if !record.doi.is_empty() {
        lines.push(format!("**DOI:** {}", record.doi));
    }

    lines.push(format!("**PubMed Link:** [View Article]({})", record.article_url));
    lines.push("---".to_string());

    lines.iter().map(|line| format!("{line}\n\n")).collect()
}

/// Message returned when the query matched nothing.
#[must_use]
pub fn no_results_message(query: &str) -> String {
    format!("No PubMed results found for query: '{query}'.")
}

/// Message returned in place of a report when the search failed.
#[must_use]
pub fn error_message(detail: &str) -> String {
    format!("Error in PubMed search: {detail}")
}

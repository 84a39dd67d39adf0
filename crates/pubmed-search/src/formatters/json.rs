//! JSON output formatting.

use serde_json::{Value, json};

use crate::models::Record;

/// Create a compact record representation, omitting empty optional fields.
#[must_use]
pub fn compact_record(record: &Record) -> Value {
    let mut obj = json!({
        "pmid": record.pmid,
        "title": record.title,
        "url": record.article_url,
    });

    if !record.authors.is_empty() {
        obj["authors"] = json!(record.authors);
    }

    if !record.journal_name.is_empty() {
        obj["journal"] = json!(record.journal_name);
    }

    if !record.publication_date.is_empty() {
        obj["pubdate"] = json!(record.publication_date);
    }

    if !record.doi.is_empty() {
        obj["doi"] = json!(record.doi);
    }

    obj
}

/// Format the results of `query` as pretty-printed JSON.
#[must_use]
pub fn format_records_json(query: &str, records: &[Record]) -> String {
    let value = json!({
        "query": query,
        "count": records.len(),
        "records": records.iter().map(compact_record).collect::<Vec<_>>(),
    });

    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_record() {
        let record = Record {
            pmid: "111".to_string(),
            title: "Gene Editing Advances".to_string(),
            authors: "A. Smith".to_string(),
            journal_name: "Nature".to_string(),
            article_url: "https://pubmed.ncbi.nlm.nih.gov/111/".to_string(),
            ..Default::default()
        };

        let compact = compact_record(&record);

        assert_eq!(compact["pmid"], "111");
        assert_eq!(compact["authors"], "A. Smith");
        assert_eq!(compact["journal"], "Nature");
        assert!(compact.get("doi").is_none());
        assert!(compact.get("pubdate").is_none());
    }

    #[test]
    fn test_format_records_json_is_pretty_printed() {
        let output = format_records_json("q", &[Record::default()]);

        assert!(output.starts_with("{\n  \""));
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_format_records_json_counts() {
        let records = vec![Record::default(), Record::default()];
        let parsed: Value = serde_json::from_str(&format_records_json("q", &records)).unwrap();

        assert_eq!(parsed["query"], "q");
        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["records"].as_array().map(Vec::len), Some(2));
    }
}

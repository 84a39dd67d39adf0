//! Response models for the NCBI E-utilities JSON endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientError, ClientResult};

/// Top-level ESearch response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ESearchResponse {
    /// Search result block.
    #[serde(default)]
    pub esearchresult: Option<ESearchResult>,

    /// Request-level error reported by E-utilities.
    #[serde(default)]
    pub error: Option<String>,
}

/// The `esearchresult` block of an ESearch response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ESearchResult {
    /// Total number of matches (not just those returned), as a string.
    #[serde(default)]
    pub count: Option<String>,

    /// Matching PMIDs in relevance order.
    #[serde(default)]
    pub idlist: Option<Vec<String>>,

    /// Query-level error (e.g. an unparseable search term).
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
}

impl ESearchResponse {
    /// Extract the identifier list, keeping at most `limit` entries.
    ///
    /// An empty list is a valid "no matches" outcome.
    pub fn into_id_list(self, limit: usize) -> ClientResult<Vec<String>> {
        if let Some(error) = self.error {
            return Err(ClientError::malformed("esearch", error));
        }

        let result = self
            .esearchresult
            .ok_or_else(|| ClientError::malformed("esearch", "missing 'esearchresult'"))?;

        if let Some(error) = result.error {
            return Err(ClientError::malformed("esearch", error));
        }

        let mut ids = result
            .idlist
            .ok_or_else(|| ClientError::malformed("esearch", "missing 'idlist'"))?;
        ids.truncate(limit);
        Ok(ids)
    }
}

/// Top-level ESummary response.
///
/// `result` is keyed by PMID and also carries a `uids` array, so entries are
/// decoded one id at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ESummaryResponse {
    /// Summaries keyed by PMID.
    #[serde(default)]
    pub result: Option<Map<String, Value>>,

    /// Request-level error reported by E-utilities.
    #[serde(default)]
    pub error: Option<String>,
}

impl ESummaryResponse {
    /// Decode the summary of every requested id, in request order.
    ///
    /// A requested id without an entry is a malformed response.
    pub fn summaries_for(&self, ids: &[String]) -> ClientResult<Vec<ArticleSummary>> {
        if let Some(error) = &self.error {
            return Err(ClientError::malformed("esummary", error.clone()));
        }

        let result = self
            .result
            .as_ref()
            .ok_or_else(|| ClientError::malformed("esummary", "missing 'result'"))?;

        ids.iter()
            .map(|id| {
                let entry = result.get(id).ok_or_else(|| {
                    ClientError::malformed("esummary", format!("no summary for id {id}"))
                })?;

                let summary: ArticleSummary =
                    serde_json::from_value(entry.clone()).map_err(|e| {
                        ClientError::malformed("esummary", format!("summary for id {id}: {e}"))
                    })?;

                if let Some(error) = &summary.error {
                    return Err(ClientError::malformed(
                        "esummary",
                        format!("summary for id {id}: {error}"),
                    ));
                }

                Ok(summary)
            })
            .collect()
    }
}

/// Document summary for one PubMed article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// PMID echoed by the service.
    #[serde(default)]
    pub uid: Option<String>,

    /// Article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Authors in the order PubMed lists them.
    #[serde(default)]
    pub authors: Option<Vec<AuthorEntry>>,

    /// Free-form publication date (e.g. "2023 Jan 5").
    #[serde(default)]
    pub pubdate: Option<String>,

    /// Full journal name.
    #[serde(default)]
    pub fulljournalname: Option<String>,

    /// Typed identifiers (pubmed, doi, pmc, ...).
    #[serde(default)]
    pub articleids: Option<Vec<ArticleId>>,

    /// Per-document error (e.g. "cannot get document summary").
    #[serde(default)]
    pub error: Option<String>,
}

impl ArticleSummary {
    /// Get the title, falling back to "Untitled" when absent or blank.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => "Untitled",
        }
    }

    /// Get author names as a comma-separated string, skipping unnamed entries.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .flatten()
            .filter_map(|a| a.name.as_deref())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Get the DOI if one is listed.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.articleids
            .iter()
            .flatten()
            .find(|id| id.idtype.as_deref() == Some("doi"))
            .and_then(|id| id.value.as_deref())
    }

    /// Get the journal name or an empty string.
    #[must_use]
    pub fn journal(&self) -> &str {
        self.fulljournalname.as_deref().unwrap_or_default()
    }

    /// Get the publication date or an empty string.
    #[must_use]
    pub fn publication_date(&self) -> &str {
        self.pubdate.as_deref().unwrap_or_default()
    }
}

/// Author entry in a document summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorEntry {
    /// Display name (e.g. "Smith A").
    #[serde(default)]
    pub name: Option<String>,

    /// Author type (usually "Author").
    #[serde(default)]
    pub authtype: Option<String>,
}

/// Typed article identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleId {
    /// Identifier type tag ("pubmed", "doi", "pmc", ...).
    #[serde(default)]
    pub idtype: Option<String>,

    /// Identifier value.
    #[serde(default)]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_esearch_id_list() {
        let response: ESearchResponse = serde_json::from_value(json!({
            "header": {"type": "esearch"},
            "esearchresult": {"count": "2", "idlist": ["111", "222"]}
        }))
        .unwrap();

        assert_eq!(response.into_id_list(5).unwrap(), ids(&["111", "222"]));
    }

    #[test]
    fn test_esearch_truncates_to_limit() {
        let response: ESearchResponse = serde_json::from_value(json!({
            "esearchresult": {"idlist": ["1", "2", "3"]}
        }))
        .unwrap();

        assert_eq!(response.into_id_list(2).unwrap(), ids(&["1", "2"]));
    }

    #[test]
    fn test_esearch_missing_idlist_is_malformed() {
        let response: ESearchResponse =
            serde_json::from_value(json!({"esearchresult": {"count": "0"}})).unwrap();

        let err = response.into_id_list(5).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("idlist"));
    }

    #[test]
    fn test_esearch_query_error_is_malformed() {
        let response: ESearchResponse = serde_json::from_value(json!({
            "esearchresult": {"ERROR": "Invalid query"}
        }))
        .unwrap();

        let err = response.into_id_list(5).unwrap_err();
        assert!(err.to_string().contains("Invalid query"));
    }

    #[test]
    fn test_esearch_request_error_is_malformed() {
        let response: ESearchResponse =
            serde_json::from_value(json!({"error": "API key invalid"})).unwrap();

        let err = response.into_id_list(5).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.to_string(), "Malformed esearch response: API key invalid");
    }

    #[test]
    fn test_esummary_preserves_request_order() {
        let response: ESummaryResponse = serde_json::from_value(json!({
            "result": {
                "uids": ["222", "111"],
                "222": {"uid": "222", "title": "Second"},
                "111": {"uid": "111", "title": "First"}
            }
        }))
        .unwrap();

        let summaries = response.summaries_for(&ids(&["111", "222"])).unwrap();
        let titles: Vec<_> = summaries.iter().map(ArticleSummary::title_or_default).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_esummary_missing_id_is_malformed() {
        let response: ESummaryResponse = serde_json::from_value(json!({
            "result": {"uids": ["111"], "111": {"title": "Only"}}
        }))
        .unwrap();

        let err = response.summaries_for(&ids(&["111", "999"])).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn test_esummary_document_error_is_malformed() {
        let response: ESummaryResponse = serde_json::from_value(json!({
            "result": {"uids": ["1"], "1": {"uid": "1", "error": "cannot get document summary"}}
        }))
        .unwrap();

        let err = response.summaries_for(&ids(&["1"])).unwrap_err();
        assert!(err.to_string().contains("cannot get document summary"));
    }

    #[test]
    fn test_summary_field_extraction() {
        let summary: ArticleSummary = serde_json::from_value(json!({
            "title": "Gene Editing Advances",
            "authors": [
                {"name": "A. Smith", "authtype": "Author"},
                {"name": ""},
                {"authtype": "CollectiveName"},
                {"name": "B. Jones"}
            ],
            "pubdate": "2023",
            "fulljournalname": "Nature",
            "articleids": [
                {"idtype": "pubmed", "value": "111"},
                {"value": "orphan"},
                {"idtype": "doi", "value": "10.1/x"}
            ]
        }))
        .unwrap();

        assert_eq!(summary.author_names(), "A. Smith, B. Jones");
        assert_eq!(summary.doi(), Some("10.1/x"));
        assert_eq!(summary.journal(), "Nature");
        assert_eq!(summary.publication_date(), "2023");
    }

    #[test]
    fn test_summary_tolerates_nulls_and_absence() {
        let summary: ArticleSummary = serde_json::from_value(json!({
            "title": null,
            "authors": null,
            "articleids": null
        }))
        .unwrap();

        assert_eq!(summary.title_or_default(), "Untitled");
        assert_eq!(summary.author_names(), "");
        assert_eq!(summary.doi(), None);
        assert_eq!(summary.journal(), "");
        assert_eq!(summary.publication_date(), "");
    }
}

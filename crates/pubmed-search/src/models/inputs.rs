//! Input models for a search invocation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ResponseFormat;
use crate::config::limits;
use crate::error::{SearchError, SearchResult};

/// Parameters of one search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput {
    /// Free-text PubMed query (e.g., "CRISPR gene editing").
    pub query: String,

    /// Maximum records to return (1-50).
    #[serde(default = "default_max_results")]
    pub max_results: i32,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_max_results() -> i32 {
    limits::DEFAULT_RESULTS
}

impl SearchInput {
    /// Create an input with the default Markdown format.
    #[must_use]
    pub fn new(query: impl Into<String>, max_results: i32) -> Self {
        Self { query: query.into(), max_results, response_format: ResponseFormat::default() }
    }

    /// Check the query and result limit, returning the validated limit.
    pub fn validate(&self) -> SearchResult<ResultLimit> {
        if self.query.trim().is_empty() {
            return Err(SearchError::validation("query", "cannot be empty"));
        }
        ResultLimit::try_from(self.max_results)
    }
}

/// A result limit known to lie within the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultLimit(u8);

impl ResultLimit {
    /// Validate a caller-supplied limit. Out-of-range values are rejected, not clamped.
    pub fn new(value: i32) -> SearchResult<Self> {
        if !(limits::MIN_RESULTS..=limits::MAX_RESULTS).contains(&value) {
            return Err(SearchError::validation(
                "max_results",
                format!(
                    "must be between {} and {} (got {value})",
                    limits::MIN_RESULTS,
                    limits::MAX_RESULTS
                ),
            ));
        }
        // Range check above keeps the value within u8.
        Ok(Self(u8::try_from(value).unwrap_or(u8::MAX)))
    }

    /// The limit as a count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        Self(limits::DEFAULT_RESULTS as u8)
    }
}

impl TryFrom<i32> for ResultLimit {
    type Error = SearchError;

    fn try_from(value: i32) -> SearchResult<Self> {
        Self::new(value)
    }
}

impl fmt::Display for ResultLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        assert_eq!(ResultLimit::new(1).unwrap().get(), 1);
        assert_eq!(ResultLimit::new(50).unwrap().get(), 50);
        assert!(ResultLimit::new(0).is_err());
        assert!(ResultLimit::new(51).is_err());
        assert!(ResultLimit::new(-3).is_err());
    }

    #[test]
    fn test_try_from_matches_new() {
        assert_eq!(ResultLimit::try_from(7).unwrap(), ResultLimit::new(7).unwrap());
        assert!(ResultLimit::try_from(51).unwrap_err().is_validation());
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(ResultLimit::default().get(), 5);
        assert_eq!(ResultLimit::default().to_string(), "5");
    }

    #[test]
    fn test_blank_query_rejected() {
        let err = SearchInput::new("   ", 5).validate().unwrap_err();
        assert!(err.to_user_message().contains("query"));
    }

    #[test]
    fn test_input_defaults_from_json() {
        let input: SearchInput = serde_json::from_str(r#"{"query": "CRISPR"}"#).unwrap();
        assert_eq!(input.max_results, 5);
        assert!(input.response_format.is_markdown());
    }
}

//! Error types for the PubMed search client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-success HTTP status
    #[error("{endpoint} returned status {status}: {message}")]
    Status {
        /// E-utility that answered (esearch, esummary)
        endpoint: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Response body parsed but lacks an expected field
    #[error("Malformed {endpoint} response: {message}")]
    Malformed {
        /// E-utility that answered (esearch, esummary)
        endpoint: &'static str,
        /// What was missing or unexpected
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(endpoint: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Status { endpoint, status, message: message.into() }
    }

    /// Create a malformed response error.
    #[must_use]
    pub fn malformed(endpoint: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed { endpoint, message: message.into() }
    }

    /// Returns true for transport failures and non-success statuses.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Middleware(_) | Self::Timeout(_) | Self::Status { .. }
        )
    }

    /// Returns true when the response arrived but could not be understood.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Parse(_))
    }
}

/// Errors surfaced by a search invocation.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },
}

impl SearchError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Returns true if the input was rejected before any request was made.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Convert to the message embedded in the error report.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::Timeout(after)) => {
                format!("PubMed did not respond within {after:?}. Please try again later.")
            }
            Self::Client(err) => err.to_string(),
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

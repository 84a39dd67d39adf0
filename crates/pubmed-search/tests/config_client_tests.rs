//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use pubmed_search::client::PubMedClient;
use pubmed_search::config::Config;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_timeout_override() {
    let config = Config::default().with_request_timeout(Duration::from_secs(3));
    assert_eq!(config.request_timeout, Duration::from_secs(3));
}

#[test]
fn test_config_for_testing_routes_to_mock() {
    let config = Config::for_testing("http://localhost:9999");
    assert!(config.esearch_url().starts_with("http://localhost:9999/"));
    assert!(config.esummary_url().starts_with("http://localhost:9999/"));
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = PubMedClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_rejects_invalid_base_url() {
    let config = Config { eutils_url: "::bad::".to_string(), ..Config::default() };
    assert!(PubMedClient::new(config).is_err());
}

#[test]
fn test_client_debug_shows_endpoint() {
    let client = PubMedClient::new(Config::default()).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("eutils.ncbi.nlm.nih.gov"));
}

#[test]
fn test_client_is_cloneable() {
    let client = PubMedClient::new(Config::default()).unwrap();
    let cloned = client.clone();
    assert_eq!(cloned.config().eutils_url, client.config().eutils_url);
}

#[tokio::test]
async fn test_fetch_summaries_of_nothing_makes_no_request() {
    // Unroutable base: any request would fail.
    let client = PubMedClient::new(Config::for_testing("http://127.0.0.1:9")).unwrap();
    let summaries = client.fetch_summaries(&[]).await.unwrap();
    assert!(summaries.is_empty());
}

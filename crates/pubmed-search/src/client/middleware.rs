//! Middleware for the HTTP client.

use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

/// Logs every outbound request with its status and latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTracing;

#[async_trait::async_trait]
impl Middleware for RequestTracing {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let path = req.url().path().to_string();
        let started = Instant::now();

        tracing::debug!(%method, %path, "Sending request");

        let result = next.run(req, extensions).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    %method,
                    %path,
                    status = response.status().as_u16(),
                    elapsed_ms,
                    "Received response"
                );
            }
            Err(e) => {
                tracing::warn!(%method, %path, error = %e, elapsed_ms, "Request failed");
            }
        }

        result
    }
}

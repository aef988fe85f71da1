//! Fact service client.
//!
//! Issues one GET against the configured fact endpoint per call. The client
//! timeout covers connect, headers and body, so a slow upstream always
//! surfaces as [`Error::UpstreamTimeout`]. No retries.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::FactsConfig;
use crate::error::{Error, Result};

/// Upstream response body. Only `fact` is consumed.
#[derive(Debug, Deserialize)]
struct FactBody {
    fact: String,
}

/// Client for the external fact service.
#[derive(Clone)]
pub struct FactService {
    client: Client,
    url: String,
}

impl FactService {
    /// Create a new fact service from configuration.
    pub fn new(config: &FactsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("profile-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Fetch one fact.
    ///
    /// Non-2xx statuses and bodies without a string `fact` are reported as
    /// [`Error::Upstream`]; exceeding the timeout as [`Error::UpstreamTimeout`].
    pub async fn fetch(&self) -> Result<String> {
        debug!(url = %self.url, "Requesting fact");

        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body: FactBody = response.json().await?;

        Ok(body.fact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn service_for(server: &MockServer, timeout: Duration) -> FactService {
        FactService::new(&FactsConfig {
            url: format!("{}/fact", server.uri()),
            timeout,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_upstream_fact() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fact"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"fact": "Cats have 230 bones.", "length": 21})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let facts = service_for(&server, Duration::from_secs(5)).await;
        assert_eq!(facts.fetch().await.unwrap(), "Cats have 230 bones.");
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let facts = service_for(&server, Duration::from_secs(5)).await;
        let err = facts.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
    }

    #[tokio::test]
    async fn test_fetch_missing_field_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"length": 3})))
            .mount(&server)
            .await;

        let facts = service_for(&server, Duration::from_secs(5)).await;
        assert!(matches!(facts.fetch().await, Err(Error::Upstream(_))));
    }

    #[tokio::test]
    async fn test_fetch_slow_upstream_is_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"fact": "late", "length": 4}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let facts = service_for(&server, Duration::from_millis(100)).await;
        let err = facts.fetch().await.unwrap_err();
        assert!(err.is_timeout());
    }
}

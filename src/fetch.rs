//! Upstream search client
//!
//! Thin wrapper around the configured search endpoint. Failures never cross
//! this boundary: any transport, status, or parse problem is logged and
//! recovered as an empty JSON object, which downstream normalization treats
//! as "no documents found".

use std::time::Duration;

use serde_json::{json, Value};
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::Result;

/// HTTP client for the upstream product-search service
#[derive(Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    /// Build a client from the configuration, validating the endpoint URL.
    pub fn new(config: &Config) -> Result<Self> {
        Url::parse(&config.endpoint)
            .map_err(|e| Error::Config(format!("Invalid endpoint URL {:?}: {}", config.endpoint, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs_f64(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch the raw search payload for a query.
    ///
    /// Returns the parsed JSON body, or `{}` on any failure. Callers never
    /// see an error from this method.
    pub async fn fetch(&self, query: &str, limit: u64) -> Value {
        tracing::info!(query, limit, "Fetching documents from search endpoint");

        match self.try_fetch(query, limit).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Search fetch failed, returning empty payload: {}", e);
                json!({})
            }
        }
    }

    async fn try_fetch(&self, query: &str, limit: u64) -> Result<Value> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_default_config() {
        let client = SearchClient::new(&Config::default()).unwrap();
        assert!(client.endpoint().starts_with("https://"));
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let config = Config {
            endpoint: "definitely not a url".to_string(),
            ..Config::default()
        };
        assert!(SearchClient::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_fetch_failure_recovers_as_empty_object() {
        // Unroutable port on localhost; the request fails fast and the
        // client must hand back `{}` instead of an error.
        let config = Config {
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1.0,
            ..Config::default()
        };
        let client = SearchClient::new(&config).unwrap();

        let payload = client.fetch("sneakers", 20).await;
        assert_eq!(payload, json!({}));
    }
}

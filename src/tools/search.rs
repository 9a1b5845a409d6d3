//! Product search tool - fetch and normalize upstream results

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;
use crate::error::Error;
use crate::fetch::SearchClient;
use crate::normalize::normalize;
use crate::Result;

/// Default number of documents requested from the upstream service.
pub const DEFAULT_LIMIT: u64 = 20;

/// Search the product catalog via the upstream search service
pub struct SearchProductsTool {
    client: SearchClient,
}

impl SearchProductsTool {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchProductsTool {
    fn name(&self) -> &str { "search_products_tool" }
    fn description(&self) -> &str { "Search the product catalog and return matching documents, each with a text field" }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text search query"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum documents to return (default 20)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let query = params.get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Tool("Missing 'query' parameter".to_string()))?;

        let limit = params.get("limit")
            .and_then(|v| v.as_u64())
            .unwrap_or(DEFAULT_LIMIT);

        tracing::info!(query, limit, "search_products_tool called");

        // The client already recovers fetch failures as `{}`; normalization
        // passes that through, so the caller always gets well-formed JSON.
        let payload = self.client.fetch(query, limit).await;
        Ok(normalize(payload))
    }
}

//! Tool runner - manages and executes tools

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::discount::CalculateDiscountTool;
use super::search::SearchProductsTool;
use super::Tool;
use crate::config::Config;
use crate::error::Error;
use crate::fetch::SearchClient;
use crate::Result;

/// Tool definition exposed to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Tool runner manages registered tools and executes them
pub struct ToolRunner {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRunner {
    /// Create an empty tool runner
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a tool runner with the production tools registered
    pub fn new_with_defaults(config: &Config) -> Result<Self> {
        let mut runner = Self::new();

        let client = SearchClient::new(config)?;
        runner.register(SearchProductsTool::new(client));
        runner.register(CalculateDiscountTool);

        Ok(runner)
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Get tool definitions for callers
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values()
            .map(|t| t.to_definition())
            .collect()
    }

    /// Execute a tool by name
    pub async fn execute(&self, name: &str, params: Value) -> Result<Value> {
        let tool = self.tools.get(name)
            .ok_or_else(|| Error::Tool(format!("Unknown tool: {}", name)))?;

        tool.execute(params).await
    }

    /// Check if a tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List registered tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::DummyTool;
    use serde_json::json;

    #[tokio::test]
    async fn test_tool_runner_register_and_execute() {
        let mut runner = ToolRunner::new();
        runner.register(DummyTool {
            name: "test_tool".to_string(),
            result: json!({"ok": true}),
        });

        assert!(runner.has("test_tool"));

        let result = runner.execute("test_tool", json!({})).await.unwrap();
        assert_eq!(result, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_tool_runner_unknown_tool() {
        let runner = ToolRunner::new();
        let result = runner.execute("unknown", json!({})).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_default_tools_registered() {
        let runner = ToolRunner::new_with_defaults(&Config::default()).unwrap();

        assert!(runner.has("search_products_tool"));
        assert!(runner.has("calculate_discount_tool"));
        assert_eq!(runner.definitions().len(), 2);
    }

    #[test]
    fn test_definitions_round_trip_through_json() {
        let runner = ToolRunner::new_with_defaults(&Config::default()).unwrap();

        let json = serde_json::to_string(&runner.definitions()).unwrap();
        let parsed: Vec<ToolDefinition> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}

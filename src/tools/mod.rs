//! Tools module - operations exposed to agent runtimes
//!
//! Tools are the named operations an external agent runtime can invoke,
//! such as searching the product catalog or deriving a discount.

mod discount;
mod runner;
mod search;

pub use discount::CalculateDiscountTool;
pub use runner::{ToolDefinition, ToolRunner};
pub use search::SearchProductsTool;

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Tool trait - interface for all exposed operations
///
/// Results are JSON values, so everything a tool returns survives a JSON
/// serialization round trip unchanged.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name used by callers
    fn name(&self) -> &str;

    /// Description of what the tool does
    fn description(&self) -> &str;

    /// JSON Schema for parameters
    fn parameters(&self) -> Value;

    /// Execute the tool with given parameters
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Convert to tool definition for callers
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Dummy tool for testing
pub struct DummyTool {
    pub name: String,
    pub result: Value,
}

#[async_trait]
impl Tool for DummyTool {
    fn name(&self) -> &str { &self.name }
    fn description(&self) -> &str { "Dummy tool for testing" }
    fn parameters(&self) -> Value { serde_json::json!({"type": "object"}) }

    async fn execute(&self, _params: Value) -> Result<Value> {
        Ok(self.result.clone())
    }
}

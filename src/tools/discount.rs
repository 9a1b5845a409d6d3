//! Discount tool - deterministic percentage from a customer suffix

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;
use crate::discount::derive;
use crate::Result;

/// Derive a discount percentage from a customer account suffix
pub struct CalculateDiscountTool;

#[async_trait]
impl Tool for CalculateDiscountTool {
    fn name(&self) -> &str { "calculate_discount_tool" }
    fn description(&self) -> &str { "Derive a deterministic discount percentage (0-99) from a customer account suffix" }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "customer_suffix": {
                    "type": "string",
                    "description": "Customer identifier; only its decimal digits are used"
                }
            },
            "required": ["customer_suffix"]
        })
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let suffix = coerce_suffix(params.get("customer_suffix"));

        tracing::debug!(suffix = %suffix, "calculate_discount_tool called");

        Ok(derive(&suffix).into_json())
    }
}

/// Coerce the raw argument to a string; absent and null become empty.
///
/// Non-string JSON values (numbers, booleans) are rendered via their JSON
/// text, so a numeric account id still contributes its digits.
fn coerce_suffix(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extracts_last_two_of_three_digits() {
        let result = CalculateDiscountTool
            .execute(json!({"customer_suffix": "abc123xyz"}))
            .await
            .unwrap();

        assert_eq!(result, json!({"discount_percent": 23}));
    }

    #[tokio::test]
    async fn test_missing_and_null_report_no_digits() {
        for params in [json!({}), json!({"customer_suffix": null})] {
            let result = CalculateDiscountTool.execute(params).await.unwrap();
            assert_eq!(result["error"], json!("no_digits_found"));
            assert_eq!(result["customer_suffix"], json!(""));
        }
    }

    #[tokio::test]
    async fn test_numeric_argument_is_coerced() {
        let result = CalculateDiscountTool
            .execute(json!({"customer_suffix": 4567}))
            .await
            .unwrap();

        assert_eq!(result, json!({"discount_percent": 67}));
    }

    #[tokio::test]
    async fn test_result_round_trips_through_json() {
        let result = CalculateDiscountTool
            .execute(json!({"customer_suffix": "7"}))
            .await
            .unwrap();

        let text = serde_json::to_string(&result).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, result);
        assert_eq!(parsed, json!({"discount_percent": 7}));
    }

    #[test]
    fn test_coerce_suffix_shapes() {
        assert_eq!(coerce_suffix(None), "");
        assert_eq!(coerce_suffix(Some(&json!(null))), "");
        assert_eq!(coerce_suffix(Some(&json!("ab12"))), "ab12");
        assert_eq!(coerce_suffix(Some(&json!(99))), "99");
        assert_eq!(coerce_suffix(Some(&json!(true))), "true");
    }
}

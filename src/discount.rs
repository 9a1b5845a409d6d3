//! Discount derivation - deterministic percentage from an identifier string
//!
//! The customer identifier can arrive in any format (account numbers,
//! suffixes with punctuation, free text). Derivation keeps only the decimal
//! digits and maps them to a percentage in 0-99; identical input always
//! yields identical output.

use serde_json::{json, Value};

/// Outcome of a discount derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountResult {
    /// A derived percentage, always in 0..=99.
    Discount { percent: u8 },
    /// The input contained no decimal digits.
    NoDigits { customer_suffix: String },
    /// An unexpected fault during derivation; carries a diagnostic message.
    Internal { message: String },
}

impl DiscountResult {
    /// The JSON shape handed back to callers.
    pub fn into_json(self) -> Value {
        match self {
            DiscountResult::Discount { percent } => json!({ "discount_percent": percent }),
            DiscountResult::NoDigits { customer_suffix } => json!({
                "error": "no_digits_found",
                "customer_suffix": customer_suffix,
            }),
            DiscountResult::Internal { message } => json!({
                "error": "internal",
                "message": message,
            }),
        }
    }
}

/// Derive a discount percentage from a customer suffix string.
///
/// The decimal digits of the input are kept in order. Three or more digits
/// keep only the last two, so the result always fits in 0-99; fewer digits
/// are zero-padded to three characters before parsing (`"5"` becomes `"005"`,
/// `"99"` becomes `"099"`). An input with no digits at all is reported as a
/// structured error, not a fault.
pub fn derive(customer_suffix: &str) -> DiscountResult {
    let digits: String = customer_suffix.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return DiscountResult::NoDigits {
            customer_suffix: customer_suffix.to_string(),
        };
    }

    let tail = if digits.len() >= 3 {
        digits[digits.len() - 2..].to_string()
    } else {
        format!("{:0>3}", digits)
    };

    match tail.parse::<u8>() {
        Ok(percent) => DiscountResult::Discount { percent },
        Err(e) => DiscountResult::Internal {
            message: format!("Failed to parse digit tail {:?}: {}", tail, e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_reports_no_digits() {
        let result = derive("");
        assert_eq!(
            result,
            DiscountResult::NoDigits {
                customer_suffix: String::new()
            }
        );
        assert_eq!(
            result.into_json(),
            json!({"error": "no_digits_found", "customer_suffix": ""})
        );
    }

    #[test]
    fn test_no_digits_keeps_original_input() {
        let result = derive("acct-ABC/xyz");
        assert_eq!(
            result,
            DiscountResult::NoDigits {
                customer_suffix: "acct-ABC/xyz".to_string()
            }
        );
    }

    #[test]
    fn test_three_or_more_digits_take_last_two() {
        assert_eq!(derive("abc123xyz"), DiscountResult::Discount { percent: 23 });
        assert_eq!(derive("4567"), DiscountResult::Discount { percent: 67 });
    }

    #[test]
    fn test_short_inputs_are_zero_padded() {
        assert_eq!(derive("7"), DiscountResult::Discount { percent: 7 });
        assert_eq!(derive("99"), DiscountResult::Discount { percent: 99 });
        assert_eq!(derive("0"), DiscountResult::Discount { percent: 0 });
    }

    #[test]
    fn test_non_digit_characters_are_ignored() {
        assert_eq!(derive("a1-b2.c3"), DiscountResult::Discount { percent: 23 });
        assert_eq!(derive(" 4 2 "), DiscountResult::Discount { percent: 42 });
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(derive("cust-881"), derive("cust-881"));
    }

    #[test]
    fn test_percent_always_in_range() {
        for input in ["0", "999", "123456789", "x9y", "00100"] {
            match derive(input) {
                DiscountResult::Discount { percent } => assert!(percent <= 99),
                other => panic!("expected a discount for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_discount_json_shape() {
        assert_eq!(
            derive("abc123xyz").into_json(),
            json!({"discount_percent": 23})
        );
    }
}

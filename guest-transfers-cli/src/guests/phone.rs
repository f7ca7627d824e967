//! Phone number normalization

use serde_json::Value;

use super::record::{display_value, is_truthy};

/// Strip everything but ASCII digits from a phone cell
///
/// Falsy cells (absent, null, empty, zero) yield an empty string.
pub fn sanitize_phone(value: Option<&Value>) -> String {
    if !is_truthy(value) {
        return String::new();
    }
    display_value(value)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_formatted_number() {
        assert_eq!(sanitize_phone(Some(&json!("+20 100-123-4567"))), "201001234567");
        assert_eq!(sanitize_phone(Some(&json!("(010) 0123 4567"))), "01001234567");
    }

    #[test]
    fn test_sanitize_absent() {
        assert_eq!(sanitize_phone(None), "");
        assert_eq!(sanitize_phone(Some(&json!(null))), "");
        assert_eq!(sanitize_phone(Some(&json!(""))), "");
    }

    #[test]
    fn test_sanitize_numeric_cell() {
        assert_eq!(sanitize_phone(Some(&json!(201001234567i64))), "201001234567");
        assert_eq!(sanitize_phone(Some(&json!(201001234567.0))), "201001234567");
    }

    #[test]
    fn test_sanitize_no_digits() {
        assert_eq!(sanitize_phone(Some(&json!("n/a"))), "");
    }
}

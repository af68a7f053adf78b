use serde_json::Value;

/// Loosely convert a configuration value to `bool`.
///
/// Accepts JSON booleans, the numbers 0 and 1, and the usual textual
/// spellings (`true`/`false`, `t`/`f`, `yes`/`no`, `y`/`n`, `on`/`off`,
/// `1`/`0`) in any case.
pub fn to_bool(value: &Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 1.0 => Ok(true),
            Some(f) if f == 0.0 => Ok(false),
            _ => Err(format!("expected a boolean, got number {}", n)),
        },
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
            _ => Err(format!("expected a boolean, got string '{}'", s)),
        },
        other => Err(format!("expected a boolean, got {}", type_name(other))),
    }
}

/// JSON type name used in validation messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_bool_accepts_booleans_and_spellings() {
        assert!(to_bool(&json!(true)).unwrap());
        assert!(!to_bool(&json!(false)).unwrap());
        assert!(to_bool(&json!("true")).unwrap());
        assert!(to_bool(&json!("TRUE")).unwrap());
        assert!(to_bool(&json!("yes")).unwrap());
        assert!(to_bool(&json!("on")).unwrap());
        assert!(!to_bool(&json!("off")).unwrap());
        assert!(!to_bool(&json!("n")).unwrap());
        assert!(to_bool(&json!(1)).unwrap());
        assert!(!to_bool(&json!(0)).unwrap());
        assert!(!to_bool(&json!(0.0)).unwrap());
    }

    #[test]
    fn test_to_bool_invalid() {
        assert!(to_bool(&json!("maybe")).unwrap_err().contains("'maybe'"));
        assert!(to_bool(&json!(2)).is_err());
        assert!(to_bool(&json!(" yes ")).unwrap_err().contains("' yes '"));
        assert!(to_bool(&json!(null)).unwrap_err().contains("null"));
        assert!(to_bool(&json!([true])).unwrap_err().contains("array"));
    }
}

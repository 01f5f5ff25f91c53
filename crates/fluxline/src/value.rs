// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar field values and their textual renderings.
//!
//! Line protocol distinguishes integers from floats syntactically, so the
//! numeric kind is fixed here, at the point where a value enters the data
//! model, never inferred later from the value's magnitude.

use std::fmt;

use crate::error::EncodeError;

/// A value that can be stored in an InfluxDB field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 64-bit floating point.
    Float(f64),
    /// 64-bit signed integer.
    Integer(i64),
    /// UTF-8 string.
    String(String),
    /// Boolean value.
    Boolean(bool),
}

impl FieldValue {
    /// Format this value for a line-protocol field.
    ///
    /// - Float: shortest round-tripping decimal, trailing `.0` stripped
    ///   (e.g., `1.0` → `1`, `18.12` → `18.12`)
    /// - Integer: suffixed with `i` (e.g., `42` → `42i`)
    /// - String: double-quoted, inner quotes and backslashes escaped
    /// - Boolean: `true` or `false`
    pub fn to_line_protocol(&self) -> String {
        match self {
            FieldValue::Float(v) => format!("{}", v),
            FieldValue::Integer(v) => format!("{}i", v),
            FieldValue::String(v) => {
                let escaped = v.replace('\\', "\\\\").replace('"', "\\\"");
                format!("\"{}\"", escaped)
            }
            FieldValue::Boolean(v) => {
                if *v {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
        }
    }

    /// Render this value as a double-quoted string literal for query
    /// contexts.
    ///
    /// This is a coercion, not field encoding: every scalar becomes a
    /// quoted string, booleans collapse to `"1"`/`"0"`, and interior
    /// double and single quotes are backslash-escaped.
    pub fn to_string_literal(&self) -> String {
        match self {
            FieldValue::Float(v) => format!("\"{}\"", v),
            FieldValue::Integer(v) => format!("\"{}\"", v),
            FieldValue::String(v) => {
                let escaped = v.replace('"', "\\\"").replace('\'', "\\'");
                format!("\"{}\"", escaped)
            }
            FieldValue::Boolean(v) => {
                if *v {
                    "\"1\"".to_string()
                } else {
                    "\"0\"".to_string()
                }
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line_protocol())
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

/// Classification boundary for externally supplied values.
///
/// JSON keeps `1` and `1.0` distinct, so the integer/float split is decided
/// here. `null`, arrays, and objects have no scalar rendering and are
/// rejected.
impl TryFrom<&serde_json::Value> for FieldValue {
    type Error = EncodeError;

    fn try_from(value: &serde_json::Value) -> Result<Self, EncodeError> {
        match value {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(FieldValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(FieldValue::Float(f))
                } else {
                    Err(EncodeError::UnsupportedType(format!(
                        "number out of range: {}",
                        n
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(FieldValue::String(s.clone())),
            serde_json::Value::Bool(b) => Ok(FieldValue::Boolean(*b)),
            serde_json::Value::Null => {
                Err(EncodeError::UnsupportedType("null".to_string()))
            }
            serde_json::Value::Array(_) => {
                Err(EncodeError::UnsupportedType("array".to_string()))
            }
            serde_json::Value::Object(_) => {
                Err(EncodeError::UnsupportedType("object".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_has_i_suffix() {
        assert_eq!(FieldValue::Integer(1).to_line_protocol(), "1i");
        assert_eq!(FieldValue::Integer(712432).to_line_protocol(), "712432i");
        assert_eq!(FieldValue::Integer(-7).to_line_protocol(), "-7i");
    }

    #[test]
    fn test_float_strips_trailing_zero() {
        assert_eq!(FieldValue::Float(1.0).to_line_protocol(), "1");
        assert_eq!(FieldValue::Float(712432.0).to_line_protocol(), "712432");
    }

    #[test]
    fn test_float_keeps_fraction() {
        assert_eq!(FieldValue::Float(18.12).to_line_protocol(), "18.12");
        assert_eq!(FieldValue::Float(23.5).to_line_protocol(), "23.5");
    }

    #[test]
    fn test_string_quoted_and_escaped() {
        assert_eq!(
            FieldValue::String("escape".to_string()).to_line_protocol(),
            "\"escape\""
        );
        assert_eq!(
            FieldValue::String("say \"hi\"".to_string()).to_line_protocol(),
            "\"say \\\"hi\\\"\""
        );
        assert_eq!(
            FieldValue::String("back\\slash".to_string()).to_line_protocol(),
            "\"back\\\\slash\""
        );
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(FieldValue::Boolean(true).to_line_protocol(), "true");
        assert_eq!(FieldValue::Boolean(false).to_line_protocol(), "false");
    }

    #[test]
    fn test_string_literal_conversions() {
        assert_eq!(FieldValue::Boolean(true).to_string_literal(), "\"1\"");
        assert_eq!(FieldValue::Boolean(false).to_string_literal(), "\"0\"");
        assert_eq!(
            FieldValue::String("walter".to_string()).to_string_literal(),
            "\"walter\""
        );
        assert_eq!(
            FieldValue::String("12".to_string()).to_string_literal(),
            "\"12\""
        );
        assert_eq!(FieldValue::Float(12.153).to_string_literal(), "\"12.153\"");
        assert_eq!(FieldValue::Integer(12).to_string_literal(), "\"12\"");
    }

    #[test]
    fn test_string_literal_escapes_both_quote_kinds() {
        assert_eq!(
            FieldValue::String("it's \"here\"".to_string()).to_string_literal(),
            "\"it\\'s \\\"here\\\"\""
        );
    }

    #[test]
    fn test_json_number_kind_decided_at_boundary() {
        let int = FieldValue::try_from(&json!(1)).expect("classify 1");
        assert_eq!(int, FieldValue::Integer(1));

        let float = FieldValue::try_from(&json!(1.0)).expect("classify 1.0");
        assert_eq!(float, FieldValue::Float(1.0));

        // Rendered forms differ even though the numeric value is the same
        assert_eq!(int.to_line_protocol(), "1i");
        assert_eq!(float.to_line_protocol(), "1");
    }

    #[test]
    fn test_json_scalars_classify() {
        assert_eq!(
            FieldValue::try_from(&json!("escape")).expect("string"),
            FieldValue::String("escape".to_string())
        );
        assert_eq!(
            FieldValue::try_from(&json!(true)).expect("bool"),
            FieldValue::Boolean(true)
        );
    }

    #[test]
    fn test_json_compound_values_rejected() {
        for v in [json!(null), json!([1, 2]), json!({"a": 1})] {
            match FieldValue::try_from(&v) {
                Err(EncodeError::UnsupportedType(_)) => {}
                other => panic!("expected UnsupportedType, got: {:?}", other),
            }
        }
    }
}

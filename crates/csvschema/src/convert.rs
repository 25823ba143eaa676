//! Built-in converters: `string`, `int`, `float` and `array`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::value::Value;

/// Numeric literal: optional surrounding whitespace, optional sign, digits
/// with an optional fraction (or a bare fraction), optional exponent.
static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .expect("numeric pattern is valid")
});

/// How the numeric built-ins treat an empty raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyNumeric {
    /// Empty converts to zero (`0` / `0.0`).
    #[default]
    Zero,
    /// Empty is a cast failure like any other non-numeric value.
    Reject,
}

/// Returns true if `value` is a numeric literal.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

/// `string`: identity.
pub fn parse_string(value: &str) -> Value {
    Value::String(value.to_string())
}

/// `int`: integer, truncating any fractional part toward zero.
pub fn parse_int(value: &str, empty: EmptyNumeric) -> Result<Value> {
    let trimmed = guard_numeric(value, "int", empty)?;
    if trimmed.is_empty() {
        return Ok(Value::Int(0));
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(Value::Int(i));
    }

    let x: f64 = trimmed.parse().map_err(|_| cast_error(value, "int"))?;
    let truncated = x.trunc();
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(cast_error(value, "int"));
    }
    Ok(Value::Int(truncated as i64))
}

/// `float`: 64-bit floating point.
pub fn parse_float(value: &str, empty: EmptyNumeric) -> Result<Value> {
    let trimmed = guard_numeric(value, "float", empty)?;
    if trimmed.is_empty() {
        return Ok(Value::Float(0.0));
    }

    trimmed
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| cast_error(value, "float"))
}

/// `array:<delim>`: split the trimmed value on the literal delimiter.
pub fn parse_array(value: &str, delimiter: Option<&str>) -> Result<Value> {
    let delimiter = match delimiter {
        Some(d) if !d.is_empty() => d,
        _ => {
            return Err(SchemaError::MissingParameter {
                type_name: "array".to_string(),
            });
        }
    };

    let items = trim_ascii_blanks(value)
        .split(delimiter)
        .map(|s| s.to_string())
        .collect();
    Ok(Value::List(items))
}

/// Check that `value` is numeric (or empty, when allowed) and return it
/// with surrounding whitespace removed.
fn guard_numeric<'a>(value: &'a str, target: &str, empty: EmptyNumeric) -> Result<&'a str> {
    if value.is_empty() {
        return match empty {
            EmptyNumeric::Zero => Ok(value),
            EmptyNumeric::Reject => Err(cast_error(value, target)),
        };
    }

    if !is_numeric(value) {
        return Err(cast_error(value, target));
    }

    Ok(value.trim_matches(is_numeric_blank))
}

fn cast_error(value: &str, target: &str) -> SchemaError {
    SchemaError::Cast {
        value: value.to_string(),
        target: target.to_string(),
    }
}

fn is_numeric_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn trim_ascii_blanks(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        for v in ["15", "-3", "+4", "18.5", ".5", "5.", "1e3", "2.5E-2", " 42", "42 "] {
            assert!(is_numeric(v), "{v:?} should be numeric");
        }
        for v in ["", "a", "1a", "0x1A", "1,5", "--1", ".", "e5", "1e"] {
            assert!(!is_numeric(v), "{v:?} should not be numeric");
        }
    }

    #[test]
    fn test_parse_string_identity() {
        assert_eq!(parse_string("Sir Fooington"), Value::from("Sir Fooington"));
        assert_eq!(parse_string(""), Value::from(""));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("15", EmptyNumeric::Zero).unwrap(), Value::Int(15));
        assert_eq!(parse_int("-7", EmptyNumeric::Zero).unwrap(), Value::Int(-7));
        assert_eq!(parse_int(" 58 ", EmptyNumeric::Zero).unwrap(), Value::Int(58));
        assert_eq!(parse_int("9.8", EmptyNumeric::Zero).unwrap(), Value::Int(9));
        assert_eq!(parse_int("-9.8", EmptyNumeric::Zero).unwrap(), Value::Int(-9));
        assert_eq!(parse_int("1e3", EmptyNumeric::Zero).unwrap(), Value::Int(1000));
    }

    #[test]
    fn test_parse_int_empty_policy() {
        assert_eq!(parse_int("", EmptyNumeric::Zero).unwrap(), Value::Int(0));
        assert!(matches!(
            parse_int("", EmptyNumeric::Reject),
            Err(SchemaError::Cast { .. })
        ));
    }

    #[test]
    fn test_parse_int_rejects_non_numeric() {
        match parse_int("a", EmptyNumeric::Zero) {
            Err(SchemaError::Cast { value, target }) => {
                assert_eq!(value, "a");
                assert_eq!(target, "int");
            }
            other => panic!("expected cast error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_int_out_of_range() {
        assert!(parse_int("1e30", EmptyNumeric::Zero).is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("18.5", EmptyNumeric::Zero).unwrap(), Value::Float(18.5));
        assert_eq!(parse_float("12", EmptyNumeric::Zero).unwrap(), Value::Float(12.0));
        assert_eq!(parse_float("", EmptyNumeric::Zero).unwrap(), Value::Float(0.0));
        assert!(matches!(
            parse_float("a", EmptyNumeric::Zero),
            Err(SchemaError::Cast { ref target, .. }) if target == "float"
        ));
    }

    #[test]
    fn test_parse_array() {
        let value = parse_array("hello,world,how,are,you", Some(",")).unwrap();
        assert_eq!(
            value.as_list().unwrap(),
            &["hello", "world", "how", "are", "you"]
        );
    }

    #[test]
    fn test_parse_array_trims_and_uses_literal_delimiter() {
        let value = parse_array("  a||b||c \n", Some("||")).unwrap();
        assert_eq!(value.as_list().unwrap(), &["a", "b", "c"]);

        let value = parse_array("", Some(",")).unwrap();
        assert_eq!(value.as_list().unwrap(), &[""]);
    }

    #[test]
    fn test_parse_array_requires_delimiter() {
        for delim in [None, Some("")] {
            match parse_array("a,b", delim) {
                Err(SchemaError::MissingParameter { type_name }) => assert_eq!(type_name, "array"),
                other => panic!("expected missing parameter, got {:?}", other),
            }
        }
    }
}

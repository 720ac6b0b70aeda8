use crate::domain::model::Value;
use crate::utils::error::{MaliceError, Result};

pub const TRUE_TOKENS: &[&str] = &["yes", "true", "t", "y", "1", "o", "oui", "on"];
pub const FALSE_TOKENS: &[&str] = &["no", "false", "f", "n", "0", "non", "off"];

fn text_of(value: &Value) -> Option<&str> {
    match value {
        Value::Str(s) => Some(s.trim()),
        Value::Bytes(b) => std::str::from_utf8(b).ok().map(str::trim),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        _ => text_of(value).and_then(|s| s.parse::<f64>().ok()),
    }
}

/// Whether the value can be read as a float.
pub fn ll_float(value: &Value) -> bool {
    as_float(value).is_some()
}

/// Whether the value can be read as an integer. Floats qualify when finite.
pub fn ll_int(value: &Value) -> bool {
    match value {
        Value::Bool(_) | Value::Int(_) => true,
        Value::Float(f) => f.is_finite(),
        _ => text_of(value).is_some_and(|s| s.parse::<i64>().is_ok()),
    }
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

pub fn is_int(value: &Value) -> bool {
    matches!(value, Value::Int(_))
}

/// Strings, integers, booleans, floats and byte strings.
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Str(_) | Value::Int(_) | Value::Bool(_) | Value::Float(_) | Value::Bytes(_)
    )
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Seq(_))
}

pub fn is_dict(value: &Value) -> bool {
    matches!(value, Value::Map(_))
}

/// Resolves a value to a boolean, or `None` when it is not boolean-like.
fn bool_of(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        _ => {
            if let Some(f) = as_float(value) {
                if !f.is_finite() {
                    return None;
                }
                return match f.trunc() as i64 {
                    0 => Some(false),
                    1 => Some(true),
                    _ => None,
                };
            }
            let text = to_str(value).ok()?.to_lowercase();
            if TRUE_TOKENS.contains(&text.as_str()) {
                Some(true)
            } else if FALSE_TOKENS.contains(&text.as_str()) {
                Some(false)
            } else {
                None
            }
        }
    }
}

/// Whether the value looks like a boolean. Never fails.
pub fn ll_bool(value: &Value) -> bool {
    bool_of(value).is_some()
}

/// Interprets the value as a boolean, failing with a type error otherwise.
pub fn to_bool(value: &Value) -> Result<bool> {
    bool_of(value).ok_or_else(MaliceError::not_a_boolean)
}

pub fn to_bytes(value: &Value) -> Vec<u8> {
    match value {
        Value::Bytes(b) => b.clone(),
        Value::Str(s) => s.as_bytes().to_vec(),
        other => other.to_string().into_bytes(),
    }
}

/// Text form of a value. Byte strings must hold valid UTF-8.
pub fn to_str(value: &Value) -> Result<String> {
    match value {
        Value::Str(s) => Ok(s.clone()),
        Value::Bytes(b) => Ok(String::from_utf8(b.clone())?),
        other => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ll_float() {
        assert!(ll_float(&Value::from("1.5")));
        assert!(ll_float(&Value::from(" 42 ")));
        assert!(ll_float(&Value::from("1e3")));
        assert!(ll_float(&Value::from(b"2.5".as_slice())));
        assert!(ll_float(&Value::from(true)));
        assert!(!ll_float(&Value::from("abc")));
        assert!(!ll_float(&Value::Null));
        assert!(!ll_float(&Value::Seq(vec![Value::from(1)])));
    }

    #[test]
    fn test_ll_int() {
        assert!(ll_int(&Value::from("12")));
        assert!(ll_int(&Value::from(-3)));
        assert!(ll_int(&Value::from(2.7)));
        assert!(!ll_int(&Value::from("2.7")));
        assert!(!ll_int(&Value::Float(f64::NAN)));
        assert!(!ll_int(&Value::Null));
    }

    #[test]
    fn test_type_predicates() {
        assert!(is_primitive(&Value::from(b"x".as_slice())));
        assert!(!is_primitive(&Value::Null));
        assert!(is_array(&Value::Seq(vec![])));
        assert!(!is_array(&Value::from("abc")));
        assert!(!is_array(&Value::map(Vec::<(String, Value)>::new())));
        assert!(is_dict(&Value::map([("a", 1)])));
        assert!(is_string(&Value::from("a")));
        assert!(is_int(&Value::from(1)));
        assert!(!is_int(&Value::from(true)));
    }

    #[test]
    fn test_truthy_and_falsy_tokens() {
        for token in TRUE_TOKENS {
            assert!(to_bool(&Value::from(*token)).unwrap(), "{}", token);
            assert!(to_bool(&Value::from(token.to_uppercase())).unwrap(), "{}", token);
        }
        for token in FALSE_TOKENS {
            assert!(!to_bool(&Value::from(*token)).unwrap(), "{}", token);
            assert!(ll_bool(&Value::from(*token)));
        }
    }

    #[test]
    fn test_numeric_booleans_truncate() {
        assert!(to_bool(&Value::from(1)).unwrap());
        assert!(!to_bool(&Value::from(0.5)).unwrap());
        assert!(to_bool(&Value::from("1.9")).unwrap());
        assert!(ll_bool(&Value::from(-0.4)));
        assert!(!ll_bool(&Value::from(2)));
        assert!(to_bool(&Value::from(2)).is_err());
    }

    #[test]
    fn test_non_boolean_inputs_fail() {
        for value in [
            Value::Null,
            Value::from("maybe"),
            Value::from(""),
            Value::Seq(vec![Value::from("yes")]),
            Value::Float(f64::INFINITY),
        ] {
            assert!(!ll_bool(&value));
            assert!(matches!(
                to_bool(&value),
                Err(MaliceError::TypeError { .. })
            ));
        }
    }

    #[test]
    fn test_string_conversions() {
        assert_eq!(to_bytes(&Value::from("é")), "é".as_bytes());
        assert_eq!(to_bytes(&Value::from(12)), b"12");
        assert_eq!(to_str(&Value::from(b"abc".as_slice())).unwrap(), "abc");
        assert_eq!(to_str(&Value::from(3.5)).unwrap(), "3.5");
        assert!(to_str(&Value::Bytes(vec![0xff, 0xfe])).is_err());
    }
}

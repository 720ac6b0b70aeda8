use crate::domain::model::Value;
use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value as Json};

/// Seconds since the Unix epoch, or `default` when there is no date.
pub fn dt_to_timestamp(dt: Option<DateTime<Utc>>, default: Option<f64>) -> Option<f64> {
    match dt {
        Some(dt) => Some(dt.timestamp_micros() as f64 / 1_000_000.0),
        None => default,
    }
}

fn float_to_json(f: f64) -> Json {
    Number::from_f64(f).map(Json::Number).unwrap_or(Json::Null)
}

/// Converts a value into something JSON can represent.
///
/// Mapping keys become their text form, date-times become epoch seconds and
/// UUIDs their hyphenated text.
pub fn cast_for_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::Number((*i).into()),
        Value::Float(f) => float_to_json(*f),
        Value::Str(s) => Json::String(s.clone()),
        Value::Bytes(b) => Json::String(String::from_utf8_lossy(b).into_owned()),
        Value::Seq(items) => Json::Array(items.iter().map(cast_for_json).collect()),
        Value::Map(entries) => {
            let mut object = Map::with_capacity(entries.len());
            for (key, val) in entries {
                object.insert(key.to_string(), cast_for_json(val));
            }
            Json::Object(object)
        }
        Value::DateTime(dt) => dt_to_timestamp(Some(*dt), None)
            .map(float_to_json)
            .unwrap_or(Json::Null),
        Value::Uuid(id) => Json::String(id.hyphenated().to_string()),
    }
}

/// JSON text of a value, `None` for null input.
pub fn json_encode(value: &Value) -> Option<String> {
    if matches!(value, Value::Null) {
        return None;
    }
    Some(cast_for_json(value).to_string())
}

/// True only for strings holding valid JSON.
pub fn is_json(value: &Value) -> bool {
    match value {
        Value::Str(s) => serde_json::from_str::<Json>(s).is_ok(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn test_primitives_pass_through() {
        assert_eq!(cast_for_json(&Value::from(3)), serde_json::json!(3));
        assert_eq!(cast_for_json(&Value::from("x")), serde_json::json!("x"));
        assert_eq!(cast_for_json(&Value::from(true)), serde_json::json!(true));
        assert_eq!(cast_for_json(&Value::Null), Json::Null);
        assert_eq!(cast_for_json(&Value::Float(f64::NAN)), Json::Null);
    }

    #[test]
    fn test_non_string_keys_become_text() {
        let value = Value::Map(vec![
            (Value::from(1), Value::from("one")),
            (Value::from(false), Value::Null),
        ]);
        assert_eq!(
            cast_for_json(&value),
            serde_json::json!({"1": "one", "false": null})
        );
    }

    #[test]
    fn test_datetime_and_uuid() {
        let dt = Utc.with_ymd_and_hms(2019, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            cast_for_json(&Value::from(dt)).as_f64(),
            Some(dt.timestamp() as f64)
        );
        let id = Uuid::new_v4();
        assert_eq!(cast_for_json(&Value::from(id)), Json::String(id.to_string()));
    }

    #[test]
    fn test_dt_to_timestamp_default() {
        assert_eq!(dt_to_timestamp(None, Some(-1.0)), Some(-1.0));
        assert_eq!(dt_to_timestamp(None, None), None);
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(dt_to_timestamp(Some(epoch), None), Some(0.0));
    }

    #[test]
    fn test_json_encode_and_is_json() {
        assert_eq!(json_encode(&Value::Null), None);
        let encoded = json_encode(&Value::map([("a", Value::Seq(vec![Value::from(1)]))])).unwrap();
        assert_eq!(encoded, r#"{"a":[1]}"#);
        assert!(is_json(&Value::from(encoded)));
        assert!(!is_json(&Value::from("{not json")));
        assert!(!is_json(&Value::from(1)));
    }
}

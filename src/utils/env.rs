use crate::domain::model::Value;
use crate::utils::coerce::{FALSE_TOKENS, TRUE_TOKENS};

/// True if `map` holds `key` with a truthy value that is not blank text.
pub fn has_filled_value(map: &Value, key: &str) -> bool {
    match map.get(key) {
        Some(Value::Str(s)) => !s.trim().is_empty(),
        Some(value) => value.is_truthy(),
        None => false,
    }
}

fn env_token(key: &str) -> Option<String> {
    let raw = std::env::var(key).ok()?;
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// True if the variable is set to one of the truthy tokens.
pub fn env_is_on(key: &str) -> bool {
    env_token(key).is_some_and(|t| TRUE_TOKENS.contains(&t.as_str()))
}

/// True if the variable is set to one of the falsy tokens.
pub fn env_is_off(key: &str) -> bool {
    env_token(key).is_some_and(|t| FALSE_TOKENS.contains(&t.as_str()))
}

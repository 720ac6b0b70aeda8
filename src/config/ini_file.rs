use crate::domain::model::Value;
use crate::utils::coerce::{is_primitive, to_str};
use crate::utils::error::{MaliceError, Result};
use ini::{Ini, ParseOption};
use std::path::Path;

pub const DEFAULT_SECTION: &str = "Job";

/// Writes a mapping as a single INI section.
///
/// Primitive values are stored as text, everything else as JSON. An empty
/// mapping still writes the section header, so `read_conf` finds it.
pub fn write_conf<P: AsRef<Path>>(path: P, data: &Value, section: &str) -> Result<()> {
    let Value::Map(entries) = data else {
        return Err(MaliceError::InvalidArgumentError {
            name: "data".to_string(),
            reason: "only mappings can be written as INI".to_string(),
        });
    };

    let mut conf = Ini::new();
    conf.entry(Some(section.to_string()))
        .or_insert_with(Default::default);
    for (key, value) in entries {
        let text = if is_primitive(value) {
            to_str(value)?
        } else {
            serde_json::to_string(value)?
        };
        conf.set_to(Some(section), to_str(key)?, text);
    }

    conf.write_to_file(path.as_ref())?;
    tracing::debug!(
        "Wrote {} keys to [{}] in {}",
        entries.len(),
        section,
        path.as_ref().display()
    );
    Ok(())
}

/// Parses an INI file. Quotes are kept verbatim so JSON values survive.
pub fn load_ini_file<P: AsRef<Path>>(path: P) -> Result<Ini> {
    let opt = ParseOption {
        enabled_quote: false,
        ..ParseOption::default()
    };
    Ok(Ini::load_from_file_opt(path, opt)?)
}

/// Reads one section back as a mapping. Values holding a JSON array or
/// object are decoded, everything else stays text.
pub fn read_conf<P: AsRef<Path>>(path: P, section: &str) -> Result<Value> {
    let conf = load_ini_file(path)?;
    let props = conf
        .section(Some(section))
        .ok_or_else(|| MaliceError::ConfigError {
            message: format!("missing section [{}]", section),
        })?;

    let mut entries = Vec::new();
    for (key, raw) in props.iter() {
        let value = match raw.trim_start().chars().next() {
            Some('[') | Some('{') => serde_json::from_str::<serde_json::Value>(raw)
                .map(Value::from)
                .unwrap_or_else(|_| Value::from(raw)),
            _ => Value::from(raw),
        };
        entries.push((Value::from(key), value));
    }
    Ok(Value::Map(entries))
}

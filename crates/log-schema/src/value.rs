//! YAML literal conversion.
//!
//! Schema literals (`value`, `default`, `values`, scenario overrides,
//! distribution keys) are stored as `serde_json::Value` because generated
//! records are JSON. YAML allows non-string mapping keys (`true: 0.8`,
//! `200: 0.75`), which `serde_json::Value` cannot deserialize directly, so
//! literals are read as `serde_yaml::Value` first and converted here.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

/// Convert a YAML value to a JSON value.
///
/// Mapping keys that are not strings are rendered with their YAML scalar
/// text (`true`, `200`). Tags are dropped.
pub fn yaml_to_json(yaml: &YamlValue) -> Value {
    match yaml {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(seq) => Value::Array(seq.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(map) => {
            let object: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (yaml_key_to_string(k), yaml_to_json(v)))
                .collect();
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

/// Render a YAML mapping key as a string.
pub fn yaml_key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Render a JSON literal as the plain string a log field would carry.
///
/// Strings are returned without quotes; everything else uses its JSON text.
pub fn literal_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn deserialize_literal<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let yaml = Option::<YamlValue>::deserialize(deserializer)?;
    Ok(yaml.map(|y| yaml_to_json(&y)).filter(|v| !v.is_null()))
}

pub(crate) fn deserialize_literal_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let yaml = Option::<Vec<YamlValue>>::deserialize(deserializer)?;
    Ok(yaml
        .unwrap_or_default()
        .iter()
        .map(yaml_to_json)
        .collect())
}

pub(crate) fn deserialize_scenarios<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, IndexMap<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let yaml = Option::<IndexMap<String, Option<IndexMap<String, YamlValue>>>>::deserialize(
        deserializer,
    )?;
    Ok(yaml
        .unwrap_or_default()
        .into_iter()
        .map(|(name, overrides)| {
            let overrides = overrides
                .unwrap_or_default()
                .into_iter()
                .map(|(path, literal)| (path, yaml_to_json(&literal)))
                .collect();
            (name, overrides)
        })
        .collect())
}

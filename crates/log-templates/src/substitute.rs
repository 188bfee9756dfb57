//! `{{variable}}` substitution over JSON documents.

use crate::variable::TemplateVariable;
use chrono::{DateTime, Utc};
use field_values::FieldValueLibrary;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

static VARIABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(\w+)\}\}").expect("template variable pattern is valid")
});

/// Replace every `{{name}}` in `text`; each occurrence draws a fresh value.
pub fn substitute_str<L: FieldValueLibrary>(
    lib: &mut L,
    text: &str,
    base_time: DateTime<Utc>,
    offset_seconds: i64,
) -> String {
    VARIABLE_PATTERN
        .replace_all(text, |caps: &Captures<'_>| {
            TemplateVariable::from_name(&caps[1]).render(lib, base_time, offset_seconds)
        })
        .into_owned()
}

/// Substitute variables in every string of `node`.
///
/// Objects and arrays keep their shape and key order; non-string scalars
/// are copied unchanged.
pub fn substitute<L: FieldValueLibrary>(
    lib: &mut L,
    node: &Value,
    base_time: DateTime<Utc>,
    offset_seconds: i64,
) -> Value {
    match node {
        Value::String(s) => Value::String(substitute_str(lib, s, base_time, offset_seconds)),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), substitute(lib, v, base_time, offset_seconds)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|v| substitute(lib, v, base_time, offset_seconds))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use field_values::ValueLibrary;
    use serde_json::json;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let mut lib = ValueLibrary::seeded(1);
        let out = substitute_str(&mut lib, "at {{timestamp}} on host", base(), 0);
        assert_eq!(out, "at 2024-03-01T12:00:00.000Z on host");
    }

    #[test]
    fn test_each_occurrence_independent() {
        let mut lib = ValueLibrary::seeded(1);
        let out = substitute_str(&mut lib, "{{uuid}} {{uuid}}", base(), 0);
        let (a, b) = out.split_once(' ').unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_non_matching_braces_untouched() {
        let mut lib = ValueLibrary::seeded(1);
        let text = "{{ spaced }} {single} {{bad-name}}";
        assert_eq!(substitute_str(&mut lib, text, base(), 0), text);
    }

    #[test]
    fn test_structure_preserved() {
        let template = json!({
            "z": "{{hostname}}",
            "a": [1, "{{pid}}", {"nested": "{{mystery}}"}],
            "flag": true,
            "n": null
        });
        let mut lib = ValueLibrary::seeded(1);
        let out = substitute(&mut lib, &template, base(), 0);

        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "flag", "n"]);
        assert_eq!(out["a"][0], json!(1));
        assert!(out["a"][1].is_string());
        assert_eq!(out["a"][2]["nested"], json!("{{unknown:mystery}}"));
        assert_eq!(out["flag"], json!(true));
        assert_eq!(out["n"], Value::Null);
    }
}

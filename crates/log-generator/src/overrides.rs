//! Scenario resolution and caller-supplied overrides.

use crate::generator::GenerateError;
use log_schema::{OverrideTable, Schema};
use serde_json::{Map, Value};

/// Override table for `name`. `None` or an empty name means no scenario.
pub fn resolve_scenario(schema: &Schema, name: Option<&str>) -> Result<OverrideTable, GenerateError> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(OverrideTable::new()),
    };

    schema
        .scenario(name)
        .cloned()
        .ok_or_else(|| GenerateError::UnknownScenario {
            name: name.to_string(),
            available: schema.list_scenarios().iter().map(|s| s.to_string()).collect(),
        })
}

/// Overrides applied during generation and overrides injected afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverridePlan {
    /// Consulted by the generator at matching dot-paths
    pub during: OverrideTable,
    /// Caller paths the schema does not declare; set on each finished record
    pub after: OverrideTable,
}

/// Merge caller overrides over a scenario table; the caller wins.
///
/// Caller paths that name no schema field cannot be reached by the
/// generator, so they are set on the finished record instead.
pub fn plan_overrides(schema: &Schema, scenario: OverrideTable, caller: &OverrideTable) -> OverridePlan {
    let known = schema.field_paths();
    let mut plan = OverridePlan {
        during: scenario,
        after: OverrideTable::new(),
    };
    for (path, value) in caller {
        if known.iter().any(|p| p == path) {
            plan.during.insert(path.clone(), value.clone());
        } else {
            plan.after.insert(path.clone(), value.clone());
        }
    }
    plan
}

/// Set `value` at dot-path `path`, creating intermediate objects.
///
/// Intermediate values that are not objects are replaced.
pub fn insert_at_path(record: &mut Value, path: &str, value: Value) {
    let mut parts: Vec<&str> = path.split('.').collect();
    let Some(last) = parts.pop() else {
        return;
    };

    let mut target = record;
    for part in parts {
        let object = ensure_object(target);
        target = object
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(target).insert(last.to_string(), value);
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced with an object"),
    }
}

/// Apply every post-generation override to `record`.
pub fn apply_after(record: &mut Value, after: &OverrideTable) {
    for (path, value) in after {
        insert_at_path(record, path, value.clone());
    }
}

//! `boolean` and `enum` fields, and weighted choice over distributions.

use field_values::FieldValueLibrary;
use log_schema::{Distribution, FieldSpec};
use serde_json::Value;

/// Probability of `true` when a boolean distribution has no `true` key.
pub const DEFAULT_TRUE_WEIGHT: f64 = 0.5;

/// Pick a distribution key by weight.
///
/// Falls back to a uniform pick when no weight is positive; `None` only for
/// an empty distribution.
pub fn weighted_choice<L: FieldValueLibrary>(lib: &mut L, dist: &Distribution) -> Option<Value> {
    if dist.is_empty() {
        return None;
    }
    let entries = dist.entries();
    let index = lib
        .weighted_index(&dist.weights())
        .unwrap_or_else(|| lib.pick_index(entries.len()));
    Some(entries[index].0.clone())
}

pub fn generate_boolean<L: FieldValueLibrary>(lib: &mut L, spec: &FieldSpec) -> Value {
    let probability = spec
        .distribution
        .as_ref()
        .map(|dist| dist.true_weight().unwrap_or(DEFAULT_TRUE_WEIGHT))
        .unwrap_or(DEFAULT_TRUE_WEIGHT);
    Value::Bool(lib.bernoulli(probability))
}

/// `default` when `values` is empty; otherwise weighted by `distribution`
/// when present, else uniform over `values`.
pub fn generate_enum<L: FieldValueLibrary>(lib: &mut L, spec: &FieldSpec) -> Value {
    if spec.values.is_empty() {
        return spec.default.clone().unwrap_or(Value::Null);
    }

    if let Some(value) = spec
        .distribution
        .as_ref()
        .and_then(|dist| weighted_choice(lib, dist))
    {
        return value;
    }

    spec.values[lib.pick_index(spec.values.len())].clone()
}

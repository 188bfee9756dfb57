//! `object` and `array` fields.

use super::{generate_field, placeholder, FieldContext};
use field_values::FieldValueLibrary;
use indexmap::IndexMap;
use log_schema::{FieldKind, FieldSpec};
use serde_json::{Map, Value};

/// Generate each child at `<path>.<child>`, keeping schema order.
pub fn generate_object<L: FieldValueLibrary>(
    lib: &mut L,
    path: &str,
    fields: &IndexMap<String, FieldSpec>,
    ctx: &FieldContext<'_>,
) -> Value {
    let mut object = Map::with_capacity(fields.len());
    for (name, spec) in fields {
        let child_path = format!("{path}.{name}");
        object.insert(name.clone(), generate_field(lib, &child_path, spec, ctx));
    }
    Value::Object(object)
}

/// Generate between `min_items` and `max_items` elements.
///
/// Elements share the array's path. Object elements are always generated
/// in full; other elements go through the optionality roll like any field.
pub fn generate_array<L: FieldValueLibrary>(
    lib: &mut L,
    path: &str,
    spec: &FieldSpec,
    ctx: &FieldContext<'_>,
) -> Value {
    let (min_items, max_items) = spec.item_bounds();
    let len = lib.int_in_range(min_items as i64, max_items as i64).max(0) as usize;

    let items = (0..len)
        .map(|_| match spec.item.as_deref() {
            Some(item) if item.kind == FieldKind::Object => {
                generate_object(lib, path, &item.fields, ctx)
            }
            Some(item) => generate_field(lib, path, item, ctx),
            None => placeholder(path),
        })
        .collect();
    Value::Array(items)
}

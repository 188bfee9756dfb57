//! Per-field value generation.
//!
//! [`generate_field`] is the single entry point for every node of the
//! schema tree. It checks the override table, rolls for optional fields and
//! then dispatches on the field type to the modules below.

pub mod choice;
pub mod nested;
pub mod numeric;
pub mod text;

use chrono::{DateTime, Utc};
use field_values::{datetime_iso8601, FieldValueLibrary};
use log_schema::{FieldKind, FieldSpec, OverrideTable, Schema};
use serde_json::{Map, Value};

/// Optional fields are omitted when the roll in `[0, 1)` exceeds this value.
pub const OPTIONAL_FIELD_RETENTION_THRESHOLD: f64 = 0.7;

/// Per-record inputs shared by every field of the record.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub overrides: &'a OverrideTable,
    pub base_time: DateTime<Utc>,
    pub offset_seconds: i64,
}

impl<'a> FieldContext<'a> {
    pub fn new(overrides: &'a OverrideTable, base_time: DateTime<Utc>, offset_seconds: i64) -> Self {
        Self {
            overrides,
            base_time,
            offset_seconds,
        }
    }
}

/// Generate every top-level field of `schema`, in schema order.
pub fn generate_record<L: FieldValueLibrary>(
    lib: &mut L,
    schema: &Schema,
    ctx: &FieldContext<'_>,
) -> Value {
    let mut record = Map::with_capacity(schema.fields.len());
    for (name, spec) in &schema.fields {
        record.insert(name.clone(), generate_field(lib, name, spec, ctx));
    }
    Value::Object(record)
}

/// Generate the value of the field at `path`.
///
/// An override for the exact path wins over everything else, including the
/// optionality roll.
pub fn generate_field<L: FieldValueLibrary>(
    lib: &mut L,
    path: &str,
    spec: &FieldSpec,
    ctx: &FieldContext<'_>,
) -> Value {
    if let Some(value) = ctx.overrides.get(path) {
        return value.clone();
    }

    if !spec.required && lib.unit() > OPTIONAL_FIELD_RETENTION_THRESHOLD {
        return spec.default.clone().unwrap_or(Value::Null);
    }

    generate_value(lib, path, spec, ctx)
}

/// Type dispatch, without the override check or optionality roll.
pub fn generate_value<L: FieldValueLibrary>(
    lib: &mut L,
    path: &str,
    spec: &FieldSpec,
    ctx: &FieldContext<'_>,
) -> Value {
    match &spec.kind {
        FieldKind::Constant => spec.value.clone().unwrap_or(Value::Null),
        FieldKind::Datetime => {
            Value::String(datetime_iso8601(ctx.base_time, ctx.offset_seconds))
        }
        FieldKind::Uuid => Value::String(lib.uuid_v4().to_string()),
        FieldKind::Email => Value::String(lib.email(spec.params.get_str("domain"))),
        FieldKind::Ipv4 => {
            let internal = spec.params.get_bool("internal").unwrap_or(false);
            Value::String(lib.ipv4(internal))
        }
        FieldKind::String => text::generate_string(lib, spec),
        FieldKind::Integer => numeric::generate_integer(lib, spec),
        FieldKind::Float => numeric::generate_float(lib, spec),
        FieldKind::Boolean => choice::generate_boolean(lib, spec),
        FieldKind::Enum => choice::generate_enum(lib, spec),
        FieldKind::Object => nested::generate_object(lib, path, &spec.fields, ctx),
        FieldKind::Array => nested::generate_array(lib, path, spec, ctx),
        FieldKind::Unknown(_) => placeholder(path),
    }
}

/// Marker emitted for fields whose type cannot be generated.
pub fn placeholder(path: &str) -> Value {
    let name = path.rsplit('.').next().unwrap_or(path);
    Value::String(format!("field_{name}"))
}

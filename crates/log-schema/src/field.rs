//! Field specifications: one node of the schema tree.

use crate::generators::{FloatGenerator, IntegerGenerator, StringGenerator};
use crate::value::{deserialize_literal, deserialize_literal_list, yaml_key_to_string, yaml_to_json};
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_yaml::Value as YamlValue;
use std::fmt;

/// The closed set of field types a schema may declare.
///
/// Unrecognised type names survive parsing as [`FieldKind::Unknown`] so that
/// strict loading can report every offending path at once, and lenient
/// loading can still generate a placeholder for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Constant,
    Datetime,
    Uuid,
    String,
    Email,
    Ipv4,
    Integer,
    Float,
    Boolean,
    Enum,
    Object,
    Array,
    Unknown(String),
}

impl FieldKind {
    /// Every valid type name, in documentation order.
    pub const NAMES: &'static [&'static str] = &[
        "constant", "datetime", "uuid", "string", "email", "ipv4", "integer", "float", "boolean",
        "enum", "object", "array",
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Constant => "constant",
            FieldKind::Datetime => "datetime",
            FieldKind::Uuid => "uuid",
            FieldKind::String => "string",
            FieldKind::Email => "email",
            FieldKind::Ipv4 => "ipv4",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum => "enum",
            FieldKind::Object => "object",
            FieldKind::Array => "array",
            FieldKind::Unknown(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FieldKind::Unknown(_))
    }
}

impl From<String> for FieldKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "constant" => FieldKind::Constant,
            "datetime" => FieldKind::Datetime,
            "uuid" => FieldKind::Uuid,
            "string" => FieldKind::String,
            "email" => FieldKind::Email,
            "ipv4" => FieldKind::Ipv4,
            "integer" => FieldKind::Integer,
            "float" => FieldKind::Float,
            "boolean" => FieldKind::Boolean,
            "enum" => FieldKind::Enum,
            "object" => FieldKind::Object,
            "array" => FieldKind::Array,
            _ => FieldKind::Unknown(name),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form generator parameters (`min`, `max`, `length`, `prefix`, `mean`...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(IndexMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and programmatic schemas.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        let value = self.0.get(key)?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        let value = self.0.get(key)?;
        value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get_i64(key).and_then(|i| usize::try_from(i).ok())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Weighted candidate values, in document order.
///
/// Keys may be any YAML scalar; they are kept as JSON values so a weighted
/// integer field yields numbers and a weighted enum yields strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    entries: Vec<(Value, f64)>,
}

impl Distribution {
    pub fn new(entries: Vec<(Value, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(Value, f64)] {
        &self.entries
    }

    pub fn weights(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, w)| *w).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of the boolean `true` key (either `true` or `"true"`).
    pub fn true_weight(&self) -> Option<f64> {
        self.entries.iter().find_map(|(key, weight)| match key {
            Value::Bool(true) => Some(*weight),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(*weight),
            _ => None,
        })
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mapping = serde_yaml::Mapping::deserialize(deserializer)?;
        let mut entries = Vec::with_capacity(mapping.len());
        for (key, weight) in &mapping {
            let weight = weight.as_f64().ok_or_else(|| {
                D::Error::custom(format!(
                    "distribution weight for '{}' must be a number",
                    yaml_key_to_string(key)
                ))
            })?;
            entries.push((distribution_key(key), weight));
        }
        Ok(Self { entries })
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, w)| (k, w)))
    }
}

fn distribution_key(key: &YamlValue) -> Value {
    match key {
        YamlValue::Mapping(_) | YamlValue::Sequence(_) => Value::String(yaml_key_to_string(key)),
        other => yaml_to_json(other),
    }
}

fn default_min_items() -> usize {
    1
}

fn default_max_items() -> usize {
    3
}

/// Specification of a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field type
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Optional fields are omitted (replaced by `default`) part of the time
    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Named value generator (`string` and `float` fields)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,

    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,

    /// Weighted candidates; replaces uniform choice when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,

    /// Candidate values for `enum`
    #[serde(
        default,
        deserialize_with = "deserialize_literal_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub values: Vec<Value>,

    /// Child fields for `object`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, FieldSpec>,

    /// Element specification for `array`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<FieldSpec>>,

    #[serde(default = "default_min_items")]
    pub min_items: usize,

    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Literal for `constant`
    #[serde(
        default,
        deserialize_with = "deserialize_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,

    /// Fallback when the field is omitted or no generator matches
    #[serde(
        default,
        deserialize_with = "deserialize_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecs_field: Option<String>,

    /// Generator resolved from `generator` + `params` (not serialized)
    #[serde(skip)]
    resolved: Option<ResolvedGenerator>,
}

/// Generator bound to a field at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedGenerator {
    String(StringGenerator),
    Integer(IntegerGenerator),
    Float(FloatGenerator),
}

impl FieldSpec {
    /// Create a bare field of the given kind. Fields are optional by default,
    /// matching the document format.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            description: None,
            generator: None,
            params: Params::default(),
            distribution: None,
            values: Vec::new(),
            fields: IndexMap::new(),
            item: None,
            min_items: default_min_items(),
            max_items: default_max_items(),
            value: None,
            default: None,
            format: None,
            ecs_field: None,
            resolved: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_generator(mut self, name: impl Into<String>, params: Params) -> Self {
        self.generator = Some(name.into());
        self.params = params;
        self.resolved = None;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_values(mut self, values: Vec<Value>) -> Self {
        self.values = values;
        self
    }

    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = Some(distribution);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    pub fn with_item(mut self, item: FieldSpec, min_items: usize, max_items: usize) -> Self {
        self.item = Some(Box::new(item));
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self.resolved = None;
        self
    }

    /// Bind generator names to concrete generators, recursively.
    ///
    /// Called once when a schema is loaded; fields built in code resolve
    /// lazily on first use instead.
    pub fn resolve_generators(&mut self) {
        self.resolved = self.resolve_own();
        for child in self.fields.values_mut() {
            child.resolve_generators();
        }
        if let Some(item) = self.item.as_mut() {
            item.resolve_generators();
        }
    }

    fn resolve_own(&self) -> Option<ResolvedGenerator> {
        match self.kind {
            FieldKind::String => Some(ResolvedGenerator::String(StringGenerator::resolve(
                self.generator.as_deref(),
                &self.params,
            ))),
            FieldKind::Integer => Some(ResolvedGenerator::Integer(IntegerGenerator::resolve(
                self.generator.as_deref(),
                &self.params,
            ))),
            FieldKind::Float => Some(ResolvedGenerator::Float(FloatGenerator::resolve(
                self.generator.as_deref(),
                &self.params,
            ))),
            _ => None,
        }
    }

    /// Generator for a `string` field; [`StringGenerator::Fallback`] when the
    /// name is absent or not registered.
    pub fn string_generator(&self) -> StringGenerator {
        match &self.resolved {
            Some(ResolvedGenerator::String(g)) => g.clone(),
            _ => StringGenerator::resolve(self.generator.as_deref(), &self.params),
        }
    }

    /// Generator for an `integer` field; a `distribution` takes precedence.
    pub fn integer_generator(&self) -> IntegerGenerator {
        match &self.resolved {
            Some(ResolvedGenerator::Integer(g)) => *g,
            _ => IntegerGenerator::resolve(self.generator.as_deref(), &self.params),
        }
    }

    /// Generator for a `float` field.
    pub fn float_generator(&self) -> FloatGenerator {
        match &self.resolved {
            Some(ResolvedGenerator::Float(g)) => *g,
            _ => FloatGenerator::resolve(self.generator.as_deref(), &self.params),
        }
    }

    /// Effective array length bounds, with `max_items` raised to `min_items`
    /// when the document has them reversed.
    pub fn item_bounds(&self) -> (usize, usize) {
        (self.min_items, self.max_items.max(self.min_items))
    }
}

//! Log schema documents.
//!
//! A schema describes one log type: its metadata, its top-level fields (in
//! output order) and an optional table of named scenarios. Each scenario is
//! a flat mapping from dot-path to literal that pins fields during
//! generation.
//!
//! ```yaml
//! log_type: nginx_access
//! description: NGINX access log
//! schema_version: "1.0"
//! fields:
//!   timestamp:
//!     type: datetime
//!     required: true
//!   status:
//!     type: integer
//!     required: true
//!     distribution: {200: 0.8, 404: 0.2}
//! scenarios:
//!   not_found:
//!     status: 404
//! ```

use crate::field::{FieldKind, FieldSpec};
use crate::value::{deserialize_scenarios, literal_to_string, yaml_to_json};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::Path;
use tracing::debug;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error walking the schema directory
    #[error("Failed to scan schema directory: {0}")]
    WalkError(#[from] walkdir::Error),

    /// One or more fields declare an unknown type, or an array has no `item`
    #[error("Invalid field type at: {}", .invalid.join(", "))]
    ValidationError { invalid: Vec<String> },

    /// No schema with this name in the catalog
    #[error("Schema not found: {0}")]
    NotFound(String),
}

// ============================================================================
// Schema
// ============================================================================

/// Pairing rule for related events (informational).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationRule {
    pub field: String,
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_with: Option<String>,
}

fn default_output_format() -> String {
    "json".to_string()
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let yaml = Option::<YamlValue>::deserialize(deserializer)?;
    Ok(match yaml.map(|y| yaml_to_json(&y)) {
        None | Some(Value::Null) => default_schema_version(),
        Some(v) => literal_to_string(&v),
    })
}

/// Dot-path to literal.
pub type OverrideTable = IndexMap<String, Value>;

/// A complete log schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Log type identifier
    #[serde(default)]
    pub log_type: String,

    #[serde(default)]
    pub description: String,

    /// Document version; numbers are kept in their textual form
    #[serde(
        default = "default_schema_version",
        deserialize_with = "deserialize_version"
    )]
    pub schema_version: String,

    #[serde(default = "default_output_format")]
    pub output_format: String,

    #[serde(default)]
    pub ecs_compatible: bool,

    /// Top-level fields, in output order
    #[serde(default)]
    pub fields: IndexMap<String, FieldSpec>,

    /// Named override tables, in document order
    #[serde(
        default,
        deserialize_with = "deserialize_scenarios",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub scenarios: IndexMap<String, OverrideTable>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correlation: Vec<CorrelationRule>,
}

/// Summary of a schema for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaInfo {
    pub log_type: String,
    pub description: String,
    pub schema_version: String,
    pub output_format: String,
    pub scenario_count: usize,
    pub scenarios: Vec<String>,
}

impl Schema {
    /// Create an empty schema for `log_type`.
    pub fn new(log_type: impl Into<String>) -> Self {
        Self {
            log_type: log_type.into(),
            description: String::new(),
            schema_version: default_schema_version(),
            output_format: default_output_format(),
            ecs_compatible: false,
            fields: IndexMap::new(),
            scenarios: IndexMap::new(),
            correlation: Vec::new(),
        }
    }

    /// Append a top-level field.
    pub fn with_field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Add a scenario from `(path, literal)` pairs.
    pub fn with_scenario<I, K>(mut self, name: impl Into<String>, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let table = overrides.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.scenarios.insert(name.into(), table);
        self
    }

    /// Load and validate a schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let schema = Self::from_yaml(&content)?;
        debug!(
            "Loaded schema '{}' from {} ({} fields, {} scenarios)",
            schema.log_type,
            path.display(),
            schema.fields.len(),
            schema.scenarios.len()
        );
        Ok(schema)
    }

    /// Load a schema from a YAML file without type validation.
    pub fn from_file_lenient<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_lenient(&content)
    }

    /// Parse and validate a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema = Self::from_yaml_lenient(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Parse a schema, keeping unknown field types.
    ///
    /// Unknown types generate the `field_<name>` placeholder.
    pub fn from_yaml_lenient(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: Schema = serde_yaml::from_str(yaml)?;
        schema.resolve_generators();
        Ok(schema)
    }

    /// Bind generator names on every field.
    pub fn resolve_generators(&mut self) {
        for spec in self.fields.values_mut() {
            spec.resolve_generators();
        }
    }

    /// Check every field type, recursively.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let invalid = self.invalid_type_paths();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationError { invalid })
        }
    }

    /// Paths of fields with an unknown type. Array items, and arrays
    /// without an `item`, are reported as `<array path>[]`.
    pub fn invalid_type_paths(&self) -> Vec<String> {
        let mut invalid = Vec::new();
        for (name, spec) in &self.fields {
            collect_invalid(name, spec, &mut invalid);
        }
        invalid
    }

    /// Scenario names in document order.
    pub fn list_scenarios(&self) -> Vec<&str> {
        self.scenarios.keys().map(String::as_str).collect()
    }

    pub fn scenario(&self, name: &str) -> Option<&OverrideTable> {
        self.scenarios.get(name)
    }

    pub fn info(&self) -> SchemaInfo {
        SchemaInfo {
            log_type: self.log_type.clone(),
            description: self.description.clone(),
            schema_version: self.schema_version.clone(),
            output_format: self.output_format.clone(),
            scenario_count: self.scenarios.len(),
            scenarios: self.scenarios.keys().cloned().collect(),
        }
    }

    /// Every dot-path the generator consults, depth first.
    ///
    /// Array items share the array's path, so fields of an object item
    /// appear as `<array>.<child>`.
    pub fn field_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for (name, spec) in &self.fields {
            collect_paths(name.clone(), spec, &mut paths);
        }
        paths
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.field_paths().iter().any(|p| p == path)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}

fn collect_invalid(path: &str, spec: &FieldSpec, out: &mut Vec<String>) {
    if !spec.kind.is_known() {
        out.push(path.to_string());
    }
    for (child, child_spec) in &spec.fields {
        collect_invalid(&format!("{path}.{child}"), child_spec, out);
    }
    match &spec.item {
        Some(item) => collect_invalid(&format!("{path}[]"), item, out),
        None if spec.kind == FieldKind::Array => out.push(format!("{path}[]")),
        None => {}
    }
}

fn collect_paths(path: String, spec: &FieldSpec, out: &mut Vec<String>) {
    let nested = match spec.kind {
        FieldKind::Object => Some(&spec.fields),
        FieldKind::Array => spec
            .item
            .as_deref()
            .filter(|item| item.kind == FieldKind::Object)
            .map(|item| &item.fields),
        _ => None,
    };
    if let Some(children) = nested {
        for (child, child_spec) in children {
            collect_paths(format!("{path}.{child}"), child_spec, out);
        }
    }
    out.push(path);
}

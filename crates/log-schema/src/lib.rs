//! Declarative log schemas for the log simulator.
//!
//! A schema is a YAML document describing the fields of one log type: each
//! field's type, how its value is generated, whether it may be omitted, and
//! how it nests. Schemas also carry named scenarios (dot-path overrides) and
//! informational metadata.
//!
//! # Architecture
//!
//! ```text
//! schemas/<category>/<name>.yaml
//!            │
//!            ▼
//!      SchemaCatalog ── find/load ──▶ Schema
//!                                       ├── fields: IndexMap<String, FieldSpec>
//!                                       │            ├── kind: FieldKind
//!                                       │            └── generator ──▶ String/Integer/FloatGenerator
//!                                       └── scenarios: IndexMap<String, OverrideTable>
//! ```
//!
//! # Example
//!
//! ```rust
//! use log_schema::{FieldKind, Schema};
//!
//! let yaml = r#"
//! log_type: example
//! fields:
//!   id:
//!     type: uuid
//!     required: true
//! "#;
//! let schema = Schema::from_yaml(yaml).unwrap();
//! assert_eq!(schema.fields["id"].kind, FieldKind::Uuid);
//! ```

pub mod catalog;
pub mod field;
pub mod generators;
pub mod schema;
pub mod value;

// Re-exports for convenience
pub use catalog::SchemaCatalog;
pub use field::{Distribution, FieldKind, FieldSpec, Params};
pub use generators::{FloatGenerator, IntegerGenerator, StringGenerator};
pub use schema::{CorrelationRule, OverrideTable, Schema, SchemaError, SchemaInfo};
pub use value::{literal_to_string, yaml_to_json};

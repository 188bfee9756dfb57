//! Schema-driven log record generator.
//!
//! This crate walks a [`log_schema::Schema`] and produces synthetic records
//! as ordered JSON objects. Records in a batch are spaced across a time
//! window, scenarios and caller overrides pin fields at any depth, and every
//! record draws from an RNG derived from `(seed, index)` so batches are
//! reproducible.
//!
//! # Architecture
//!
//! ```text
//! Schema (YAML)          GenerateOptions { count, scenario, base_time, spread, overrides }
//!        │                          │
//!        ▼                          ▼
//! ┌──────────────────────────────────────┐
//! │             LogGenerator             │
//! │  - seed                              │
//! │  - resolve_scenario / plan_overrides │
//! │  - time_offset(index, count, spread) │
//! └──────────────────┬───────────────────┘
//!                    │ per index: ValueLibrary<StdRng>
//!                    ▼
//!          generate_record / generate_field
//!                    │
//!                    ▼
//!          serde_json::Value (ordered object)
//! ```
//!
//! # Example
//!
//! ```rust
//! use log_generator::LogGenerator;
//! use log_schema::Schema;
//!
//! let schema = Schema::from_yaml(r#"
//! log_type: example
//! fields:
//!   id:
//!     type: uuid
//!     required: true
//!   timestamp:
//!     type: datetime
//!     required: true
//! "#).unwrap();
//!
//! let generator = LogGenerator::with_seed(schema, 42);
//! let records = generator.generate(3, None, None, 60).unwrap();
//! assert_eq!(records.len(), 3);
//! ```

pub mod generator;
pub mod generators;
pub mod overrides;

// Re-exports for convenience
pub use generator::{GenerateError, GenerateOptions, LogGenerator, RecordIterator};
pub use generators::{
    generate_field, generate_record, FieldContext, OPTIONAL_FIELD_RETENTION_THRESHOLD,
};
pub use overrides::{insert_at_path, resolve_scenario};
pub use field_values::time_offset;

//! Log Simulator
//!
//! Generates realistic synthetic security logs for testing SIEM ingestion
//! pipelines and detection rules.
//!
//! # Features
//!
//! - Schema-driven generation: YAML schemas describe every field of a log type
//! - Scenarios: named override tables pin fields for specific situations
//! - Time series: records are spread evenly across a time window
//! - Templates: JSON documents with `{{variable}}` placeholders
//! - Attack timelines: multi-technique sequences built from templates
//!
//! # Crates
//!
//! - `field_values` - realistic primitive values behind capability traits
//! - `log_schema` - schema model, validation and the schema catalog
//! - `log_generator` - schema-driven record generation
//! - `log_templates` - template substitution and attack scenarios
//!
//! # CLI Usage
//!
//! ```bash
//! # List every schema in the catalog
//! log-simulator list
//!
//! # 100 nginx access logs spread over an hour, written as JSON Lines
//! log-simulator generate nginx_access -n 100 --spread 3600 --format jsonl -o logs.jsonl
//!
//! # Pin fields at any depth
//! log-simulator generate aws_cloudtrail -n 5 --set userIdentity.type='"Root"'
//!
//! # Credential dumping followed by PowerShell execution
//! log-simulator attack --technique T1003 --technique T1059.001 --spread 600
//! ```

pub mod config;
pub mod output;
pub mod simulator;

pub use config::{parse_base_time, parse_override, GenerationLimits, LimitExceeded, SimulatorOpts};
pub use output::{OutputError, OutputFormat, OutputOptions, WriteMetrics};
pub use simulator::{AttackRequest, GenerateRequest, Simulator, SimulatorError};

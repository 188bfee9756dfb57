//! Template-based log generation.
//!
//! Templates are JSON documents captured from real logs with volatile
//! values replaced by `{{variable}}` placeholders. Generation copies the
//! template and substitutes every placeholder with a fresh value, keeping
//! the document's structure and key order intact.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use field_values::ValueLibrary;
//! use log_templates::substitute;
//! use serde_json::json;
//!
//! let mut lib = ValueLibrary::seeded(42);
//! let template = json!({"Computer": "{{hostname}}", "EventID": 1});
//! let log = substitute(&mut lib, &template, Utc::now(), 0);
//! assert_eq!(log["EventID"], 1);
//! ```

pub mod library;
pub mod substitute;
pub mod variable;

pub use library::{list_templates_in, TemplateError, TemplateLibrary};
pub use substitute::{substitute, substitute_str};
pub use variable::TemplateVariable;

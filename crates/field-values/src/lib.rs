//! Field value library for the log simulator.
//!
//! Stateless generators for the atomic values that make synthetic log
//! records look real: identities, network addresses, cloud identifiers,
//! host artefacts and timestamps. Every generator takes its randomness from
//! an explicit [`rand::Rng`] so that seeded runs are reproducible.
//!
//! # Architecture
//!
//! ```text
//! base / identity / network / cloud / system   (free functions over R: Rng)
//!                     │
//!                     ▼
//!          ValueLibrary<R>  ── implements ──▶  RandomSource
//!                                              IdentityValues
//!                                              NetworkValues
//!                                              CloudValues
//!                                              SystemValues
//!                                                   │
//!                                                   ▼
//!                                           FieldValueLibrary
//! ```
//!
//! # Example
//!
//! ```rust
//! use field_values::{IdentityValues, NetworkValues, ValueLibrary};
//!
//! let mut lib = ValueLibrary::seeded(42);
//! let email = lib.email(None);
//! let ip = lib.ipv4(false);
//! assert!(email.contains('@'));
//! assert_eq!(ip.split('.').count(), 4);
//! ```

pub mod base;
pub mod cloud;
pub mod identity;
pub mod library;
pub mod network;
pub mod system;

// Re-exports for convenience
pub use base::{datetime_iso8601, time_offset, TIMESTAMP_FORMAT};
pub use library::{
    CloudValues, FieldValueLibrary, IdentityValues, NetworkValues, RandomSource, SystemValues,
    ValueLibrary,
};

//! Batch driver producing time-spread log records.

use crate::generators::{generate_record, FieldContext};
use crate::overrides::{apply_after, plan_overrides, resolve_scenario, OverridePlan};
use chrono::{DateTime, Utc};
use field_values::{time_offset, FieldValueLibrary, ValueLibrary};
use log_schema::{OverrideTable, Schema};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Requested scenario is not defined by the schema
    #[error("Scenario '{name}' not found. Available: {}", .available.join(", "))]
    UnknownScenario { name: String, available: Vec<String> },

    /// A batch must contain at least one record
    #[error("Count must be at least 1")]
    InvalidCount,
}

/// Parameters of one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    pub count: u64,
    pub scenario: Option<String>,
    /// Reference instant; defaults to now
    pub base_time: Option<DateTime<Utc>>,
    pub spread_seconds: u64,
    /// Caller overrides, applied over the scenario
    pub overrides: OverrideTable,
}

impl GenerateOptions {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }

    pub fn with_base_time(mut self, base_time: DateTime<Utc>) -> Self {
        self.base_time = Some(base_time);
        self
    }

    pub fn with_spread(mut self, spread_seconds: u64) -> Self {
        self.spread_seconds = spread_seconds;
        self
    }

    pub fn with_override(mut self, path: impl Into<String>, value: Value) -> Self {
        self.overrides.insert(path.into(), value);
        self
    }
}

/// Log generator bound to one schema.
///
/// Each record draws from its own RNG seeded from `(seed, index)`, so a
/// batch is reproducible from the seed and any index can be regenerated on
/// its own.
#[derive(Debug, Clone)]
pub struct LogGenerator {
    schema: Schema,
    seed: u64,
}

impl LogGenerator {
    /// Create a generator with a random seed.
    pub fn new(schema: Schema) -> Self {
        let seed = rand::random::<u64>();
        debug!("No seed given for '{}', using {}", schema.log_type, seed);
        Self { schema, seed }
    }

    /// Create a generator with a fixed seed.
    pub fn with_seed(schema: Schema, seed: u64) -> Self {
        Self { schema, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// RNG seed for record `index`.
    fn compute_rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Value library for record `index`.
    pub fn library_for_index(&self, index: u64) -> ValueLibrary<StdRng> {
        ValueLibrary::new(StdRng::seed_from_u64(self.compute_rng_seed_for_index(index)))
    }

    /// Generate `count` records.
    pub fn generate(
        &self,
        count: u64,
        scenario: Option<&str>,
        base_time: Option<DateTime<Utc>>,
        spread_seconds: u64,
    ) -> Result<Vec<Value>, GenerateError> {
        let options = GenerateOptions {
            count,
            scenario: scenario.map(str::to_string),
            base_time,
            spread_seconds,
            overrides: OverrideTable::new(),
        };
        self.generate_with(&options)
    }

    /// Generate a batch described by `options`.
    pub fn generate_with(&self, options: &GenerateOptions) -> Result<Vec<Value>, GenerateError> {
        Ok(self.records(options)?.collect())
    }

    /// Lazily generate a batch.
    pub fn records(&self, options: &GenerateOptions) -> Result<RecordIterator<'_>, GenerateError> {
        let plan = self.plan(options)?;
        debug!(
            "Generating {} '{}' records (seed {}, spread {}s)",
            plan.count, self.schema.log_type, self.seed, plan.spread_seconds
        );
        Ok(RecordIterator {
            generator: self,
            plan,
            index: 0,
        })
    }

    /// Regenerate record `index` of the batch described by `options`.
    pub fn record_at(&self, index: u64, options: &GenerateOptions) -> Result<Value, GenerateError> {
        let plan = self.plan(options)?;
        Ok(self.generate_indexed(&plan, index))
    }

    /// Generate one record with a caller-supplied value library.
    pub fn generate_record_with<L: FieldValueLibrary>(
        &self,
        lib: &mut L,
        overrides: &OverrideTable,
        base_time: DateTime<Utc>,
        offset_seconds: i64,
    ) -> Value {
        let ctx = FieldContext::new(overrides, base_time, offset_seconds);
        generate_record(lib, &self.schema, &ctx)
    }

    fn plan(&self, options: &GenerateOptions) -> Result<BatchPlan, GenerateError> {
        if options.count == 0 {
            return Err(GenerateError::InvalidCount);
        }
        let scenario = resolve_scenario(&self.schema, options.scenario.as_deref())?;
        Ok(BatchPlan {
            count: options.count,
            base_time: options.base_time.unwrap_or_else(Utc::now),
            spread_seconds: options.spread_seconds,
            overrides: plan_overrides(&self.schema, scenario, &options.overrides),
        })
    }

    fn generate_indexed(&self, plan: &BatchPlan, index: u64) -> Value {
        let mut lib = self.library_for_index(index);
        let offset = time_offset(index, plan.count, plan.spread_seconds);
        let mut record =
            self.generate_record_with(&mut lib, &plan.overrides.during, plan.base_time, offset);
        apply_after(&mut record, &plan.overrides.after);
        record
    }
}

/// Resolved, validated batch parameters.
#[derive(Debug, Clone)]
struct BatchPlan {
    count: u64,
    base_time: DateTime<Utc>,
    spread_seconds: u64,
    overrides: OverridePlan,
}

/// Iterator that lazily generates the records of one batch, in index order.
pub struct RecordIterator<'a> {
    generator: &'a LogGenerator,
    plan: BatchPlan,
    index: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.plan.count {
            return None;
        }
        let record = self.generator.generate_indexed(&self.plan, self.index);
        self.index += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.plan.count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

//! Request-level entry points shared by the CLI and integration tests.
//!
//! A [`Simulator`] owns the schema catalog, the template root and the
//! request ceilings. Every request is checked against the ceilings before
//! the generator crates are called.

use crate::config::{GenerationLimits, LimitExceeded, SimulatorOpts};
use chrono::{DateTime, Utc};
use log_generator::{GenerateError, GenerateOptions, LogGenerator};
use log_schema::{OverrideTable, Schema, SchemaCatalog, SchemaError, SchemaInfo};
use log_templates::{list_templates_in, TemplateError, TemplateLibrary};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Error type for simulator requests.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Limit(#[from] LimitExceeded),
}

/// One schema-driven generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub count: u64,
    pub scenario: Option<String>,
    pub base_time: Option<DateTime<Utc>>,
    pub spread_seconds: u64,
    pub overrides: OverrideTable,
    /// Fixed seed; random when `None`
    pub seed: Option<u64>,
    /// Keep unknown field types (rendered as `field_<name>`) instead of
    /// rejecting the schema
    pub lenient: bool,
}

impl GenerateRequest {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            count: self.count,
            scenario: self.scenario.clone(),
            base_time: self.base_time,
            spread_seconds: self.spread_seconds,
            overrides: self.overrides.clone(),
        }
    }
}

/// One ATT&CK-style multi-technique request.
#[derive(Debug, Clone)]
pub struct AttackRequest {
    pub techniques: Vec<String>,
    pub count_per_technique: u64,
    pub category: String,
    pub spread_seconds: u64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Simulator {
    catalog: SchemaCatalog,
    templates_root: PathBuf,
    limits: GenerationLimits,
}

impl Simulator {
    pub fn new(
        schemas_root: impl Into<PathBuf>,
        templates_root: impl Into<PathBuf>,
        limits: GenerationLimits,
    ) -> Self {
        Self {
            catalog: SchemaCatalog::new(schemas_root),
            templates_root: templates_root.into(),
            limits,
        }
    }

    pub fn from_opts(opts: &SimulatorOpts) -> Self {
        Self::new(&opts.schemas_dir, &opts.templates_dir, opts.limits())
    }

    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    pub fn limits(&self) -> GenerationLimits {
        self.limits
    }

    /// Schema names grouped by category.
    pub fn list_schemas(&self) -> Result<BTreeMap<String, Vec<String>>, SimulatorError> {
        Ok(self.catalog.list()?)
    }

    pub fn load_schema(&self, name: &str) -> Result<Schema, SimulatorError> {
        Ok(self.catalog.load(name)?)
    }

    /// Load a schema without rejecting unknown field types.
    pub fn load_schema_lenient(&self, name: &str) -> Result<Schema, SimulatorError> {
        Ok(self.catalog.load_lenient(name)?)
    }

    pub fn schema_info(&self, name: &str) -> Result<SchemaInfo, SimulatorError> {
        Ok(self.load_schema(name)?.info())
    }

    pub fn scenarios(&self, name: &str) -> Result<Vec<String>, SimulatorError> {
        let schema = self.load_schema(name)?;
        Ok(schema.list_scenarios().into_iter().map(str::to_string).collect())
    }

    /// Build a generator for a catalog schema.
    pub fn generator(&self, name: &str, seed: Option<u64>) -> Result<LogGenerator, SimulatorError> {
        Ok(seeded_generator(self.load_schema(name)?, seed))
    }

    /// Generate records from a catalog schema.
    pub fn generate(
        &self,
        name: &str,
        request: &GenerateRequest,
    ) -> Result<Vec<Value>, SimulatorError> {
        self.limits.check(request.count, request.spread_seconds)?;
        let schema = if request.lenient {
            self.load_schema_lenient(name)?
        } else {
            self.load_schema(name)?
        };
        let generator = seeded_generator(schema, request.seed);
        let records = generator.generate_with(&request.options())?;
        info!(
            "Generated {} '{}' record(s) (seed {})",
            records.len(),
            generator.schema().log_type,
            generator.seed()
        );
        Ok(records)
    }

    pub fn template_library(&self, seed: Option<u64>) -> TemplateLibrary {
        match seed {
            Some(seed) => TemplateLibrary::with_seed(&self.templates_root, seed),
            None => TemplateLibrary::new(&self.templates_root),
        }
    }

    /// Templates below the template root; listing draws no seed.
    pub fn list_templates(&self, category: Option<&str>) -> Result<Vec<String>, SimulatorError> {
        Ok(list_templates_in(&self.templates_root, category)?)
    }

    /// Generate records from one template.
    pub fn generate_from_template(
        &self,
        template_path: &str,
        count: u64,
        spread_seconds: u64,
        seed: Option<u64>,
    ) -> Result<Vec<Value>, SimulatorError> {
        self.limits.check(count, spread_seconds)?;
        Ok(self.template_library(seed).generate_from_template(
            template_path,
            count,
            None,
            spread_seconds,
        )?)
    }

    /// Generate a multi-technique attack timeline.
    ///
    /// The ceiling applies to the whole scenario, not to each technique.
    pub fn generate_attack_scenario(
        &self,
        request: &AttackRequest,
    ) -> Result<Vec<Value>, SimulatorError> {
        let total = (request.techniques.len() as u64).saturating_mul(request.count_per_technique);
        self.limits.check(total, request.spread_seconds)?;
        Ok(self
            .template_library(request.seed)
            .generate_attack_scenario(
                &request.techniques,
                request.count_per_technique,
                &request.category,
                request.spread_seconds,
            )?)
    }
}

fn seeded_generator(schema: Schema, seed: Option<u64>) -> LogGenerator {
    match seed {
        Some(seed) => LogGenerator::with_seed(schema, seed),
        None => LogGenerator::new(schema),
    }
}

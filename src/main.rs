//! Command-line interface for log-simulator
//!
//! # Usage Examples
//!
//! ## Schemas
//! ```bash
//! # Catalog listing, schema details and scenarios
//! log-simulator list
//! log-simulator info google_workspace
//! log-simulator scenarios azure_ad_signin
//!
//! # Failed logins, pretty-printed
//! log-simulator generate azure_ad_signin -n 5 --scenario failed_login --pretty
//!
//! # Reproducible batch spread over one hour, saved to a file
//! log-simulator generate nginx_access -n 1000 --spread 3600 --seed 42 -o out/nginx.json
//! ```
//!
//! ## Templates
//! ```bash
//! log-simulator templates --category security
//! log-simulator template security/sysmon/T1059.001_powershell.json -n 10 --spread 60
//! log-simulator attack --technique T1003 --technique T1059.001 --count-per-technique 3
//! ```
//!
//! ## Settings
//! - `LOG_SIM_SCHEMAS_DIR`: schema catalog root (default `schemas`)
//! - `LOG_SIM_TEMPLATES_DIR`: template root (default `templates`)
//! - `LOG_SIM_MAX_LOG_COUNT`: records per request (default 10000)
//! - `LOG_SIM_MAX_TIME_SPREAD`: seconds per request (default 86400)
//! - `RUST_LOG`: tracing filter, logs go to stderr

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use log_simulator::config::{parse_base_time, parse_override};
use log_simulator::output::{write_to_file, write_to_stdout, OutputFormat, OutputOptions};
use log_simulator::{AttackRequest, GenerateRequest, Simulator, SimulatorOpts};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "log-simulator")]
#[command(about = "Generate realistic synthetic logs for SIEM testing")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: SimulatorOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available schemas by category
    List,

    /// Show schema information
    Info {
        /// Schema name (e.g. google_workspace or cloud_identity/google_workspace)
        schema: String,
    },

    /// List the scenarios a schema defines
    Scenarios { schema: String },

    /// Generate logs from a schema
    Generate {
        schema: String,

        /// Number of log entries to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u64,

        /// Scenario name from the schema
        #[arg(short, long)]
        scenario: Option<String>,

        /// Spread logs over N seconds
        #[arg(long, default_value_t = 0, value_name = "SECONDS")]
        spread: u64,

        /// Reference time (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_base_time)]
        base_time: Option<DateTime<Utc>>,

        /// Pin a field: PATH=VALUE, VALUE parsed as JSON or taken as text
        #[arg(long = "set", value_name = "PATH=VALUE", value_parser = parse_override)]
        overrides: Vec<(String, Value)>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Accept unknown field types, rendering them as placeholders
        #[arg(long)]
        lenient: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List available templates
    Templates {
        /// Restrict to one category directory
        #[arg(long)]
        category: Option<String>,
    },

    /// Generate logs from a template
    Template {
        /// Template path relative to the templates directory
        path: String,

        #[arg(short = 'n', long, default_value_t = 1)]
        count: u64,

        #[arg(long, default_value_t = 0, value_name = "SECONDS")]
        spread: u64,

        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a multi-technique attack timeline from templates
    Attack {
        /// ATT&CK technique ID, repeatable (e.g. T1059.001)
        #[arg(long = "technique", required = true)]
        techniques: Vec<String>,

        #[arg(long, default_value_t = 1)]
        count_per_technique: u64,

        /// Template category to search
        #[arg(long, default_value = "security")]
        category: String,

        #[arg(long, default_value_t = 300, value_name = "SECONDS")]
        spread: u64,

        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

impl OutputArgs {
    fn emit(&self, records: Vec<Value>) -> anyhow::Result<()> {
        let options = OutputOptions::new(self.format, self.pretty);
        match &self.output {
            Some(path) => {
                let metrics = write_to_file(path, records, options)
                    .with_context(|| format!("Failed to write output to {path:?}"))?;
                eprintln!(
                    "Generated {} log(s) -> {}",
                    metrics.records_written,
                    path.display()
                );
            }
            None => {
                write_to_stdout(records, options).context("Failed to write output")?;
            }
        }
        Ok(())
    }
}

const RULE: &str = "======================================================================";

fn title_case(category: &str) -> String {
    category
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let simulator = Simulator::from_opts(&cli.opts);

    match cli.command {
        Commands::List => {
            let catalog = simulator
                .list_schemas()
                .context("Failed to list schemas")?;
            println!("\nAvailable Schemas:");
            println!("{RULE}");
            for (category, names) in &catalog {
                println!("\n{}:", title_case(category));
                for name in names {
                    println!("  - {name}");
                }
            }
            println!("\n{RULE}");
        }
        Commands::Info { schema } => {
            let info = simulator
                .schema_info(&schema)
                .with_context(|| format!("Failed to load schema '{schema}'"))?;
            println!("\nSchema Information:");
            println!("{RULE}");
            println!("Log Type: {}", info.log_type);
            println!("Description: {}", info.description);
            println!("Schema Version: {}", info.schema_version);
            println!("Output Format: {}", info.output_format);
            println!("Scenarios: {}", info.scenario_count);
            println!("{RULE}");
        }
        Commands::Scenarios { schema } => {
            let scenarios = simulator
                .scenarios(&schema)
                .with_context(|| format!("Failed to load schema '{schema}'"))?;
            println!("\nAvailable scenarios for '{schema}':");
            println!("{RULE}");
            for scenario in scenarios {
                println!("  - {scenario}");
            }
            println!("{RULE}");
        }
        Commands::Generate {
            schema,
            count,
            scenario,
            spread,
            base_time,
            overrides,
            seed,
            lenient,
            output,
        } => {
            let request = GenerateRequest {
                count,
                scenario,
                base_time,
                spread_seconds: spread,
                overrides: overrides.into_iter().collect(),
                seed,
                lenient,
            };
            let records = simulator
                .generate(&schema, &request)
                .with_context(|| format!("Failed to generate logs from '{schema}'"))?;
            output.emit(records)?;
        }
        Commands::Templates { category } => {
            let templates = simulator
                .list_templates(category.as_deref())
                .context("Failed to list templates")?;
            for template in templates {
                println!("{template}");
            }
        }
        Commands::Template {
            path,
            count,
            spread,
            seed,
            output,
        } => {
            let records = simulator
                .generate_from_template(&path, count, spread, seed)
                .with_context(|| format!("Failed to generate logs from template '{path}'"))?;
            output.emit(records)?;
        }
        Commands::Attack {
            techniques,
            count_per_technique,
            category,
            spread,
            seed,
            output,
        } => {
            let request = AttackRequest {
                techniques,
                count_per_technique,
                category,
                spread_seconds: spread,
                seed,
            };
            let records = simulator
                .generate_attack_scenario(&request)
                .context("Failed to generate attack scenario")?;
            output.emit(records)?;
        }
    }

    Ok(())
}

//! Template store and batch generation from templates.

use crate::substitute::substitute;
use chrono::{DateTime, Utc};
use field_values::{time_offset, ValueLibrary};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const TEMPLATE_EXTENSION: &str = "json";

/// Error type for template operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// No template at this relative path
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Error reading a template file
    #[error("Failed to read template {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template is not valid JSON
    #[error("Failed to parse template {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Error walking the template directory
    #[error("Failed to scan template directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A batch must contain at least one record
    #[error("Count must be at least 1")]
    InvalidCount,
}

/// Templates below a root directory, addressed by `/`-separated relative
/// path (`security/sysmon_T1059.001_powershell.json`).
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    root: PathBuf,
    seed: u64,
}

impl TemplateLibrary {
    /// Create a library with a random seed.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let seed = rand::random::<u64>();
        debug!("No seed given for templates, using {}", seed);
        Self::with_seed(root, seed)
    }

    pub fn with_seed(root: impl Into<PathBuf>, seed: u64) -> Self {
        Self {
            root: root.into(),
            seed,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn library_for_index(&self, index: u64) -> ValueLibrary<StdRng> {
        let seed = self.seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15));
        ValueLibrary::new(StdRng::seed_from_u64(seed))
    }

    /// Sorted relative paths of every template, optionally limited to one
    /// category directory. A missing directory lists nothing.
    pub fn list_templates(&self, category: Option<&str>) -> Result<Vec<String>, TemplateError> {
        list_templates_in(&self.root, category)
    }

    /// Load and parse one template.
    pub fn load_template(&self, template_path: &str) -> Result<Value, TemplateError> {
        let full_path = self.root.join(template_path);
        if !full_path.is_file() {
            return Err(TemplateError::NotFound(template_path.to_string()));
        }
        let content = fs::read_to_string(&full_path).map_err(|source| TemplateError::Read {
            path: template_path.to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| TemplateError::Parse {
            path: template_path.to_string(),
            source,
        })
    }

    /// Generate `count` substituted copies of a template spread over
    /// `spread_seconds` from `base_time` (now when `None`).
    pub fn generate_from_template(
        &self,
        template_path: &str,
        count: u64,
        base_time: Option<DateTime<Utc>>,
        spread_seconds: u64,
    ) -> Result<Vec<Value>, TemplateError> {
        if count == 0 {
            return Err(TemplateError::InvalidCount);
        }
        let template = self.load_template(template_path)?;
        let base_time = base_time.unwrap_or_else(Utc::now);

        let logs: Vec<Value> = (0..count)
            .map(|index| {
                let offset = time_offset(index, count, spread_seconds);
                let mut lib = self.library_for_index(index);
                substitute(&mut lib, &template, base_time, offset)
            })
            .collect();

        info!("Generated {} log(s) from template {}", logs.len(), template_path);
        Ok(logs)
    }

    /// First template (sorted) under `category` whose file name contains
    /// `technique`.
    pub fn find_technique_template(
        &self,
        technique: &str,
        category: &str,
    ) -> Result<Option<String>, TemplateError> {
        Ok(self.list_templates(Some(category))?.into_iter().find(|path| {
            path.rsplit('/')
                .next()
                .is_some_and(|file_name| file_name.contains(technique))
        }))
    }

    /// Generate logs for a sequence of ATT&CK techniques.
    ///
    /// Each technique contributes `count_per_technique` records from its
    /// first matching template; techniques without a template are skipped.
    /// Object records are tagged with `_metadata`. Offsets run across the
    /// whole scenario, and the result is ordered by `timestamp` when the
    /// first record carries one.
    pub fn generate_attack_scenario(
        &self,
        techniques: &[String],
        count_per_technique: u64,
        category: &str,
        spread_seconds: u64,
    ) -> Result<Vec<Value>, TemplateError> {
        let base_time = Utc::now();
        let total = techniques.len() as u64 * count_per_technique;
        let mut logs = Vec::new();
        let mut log_index: u64 = 0;

        for technique in techniques {
            let Some(template_path) = self.find_technique_template(technique, category)? else {
                warn!("No template found for {}", technique);
                continue;
            };
            let template = self.load_template(&template_path)?;
            debug!("Using template {} for {}", template_path, technique);

            for _ in 0..count_per_technique {
                let offset = time_offset(log_index, total, spread_seconds);
                let mut lib = self.library_for_index(log_index);
                let mut log = substitute(&mut lib, &template, base_time, offset);
                if let Value::Object(map) = &mut log {
                    map.insert(
                        "_metadata".to_string(),
                        json!({
                            "technique": technique,
                            "log_index": log_index,
                            "template": template_path,
                        }),
                    );
                }
                logs.push(log);
                log_index += 1;
            }
        }

        let has_timestamp = logs
            .first()
            .and_then(Value::as_object)
            .is_some_and(|first| first.contains_key("timestamp"));
        if has_timestamp {
            logs.sort_by_cached_key(sort_timestamp);
        }

        info!(
            "Generated {} attack scenario log(s) for {} technique(s)",
            logs.len(),
            techniques.len()
        );
        Ok(logs)
    }
}

/// Sorted `/`-separated paths, relative to `root`, of every template below
/// `root` (or below `root/<category>`). A missing directory lists nothing.
pub fn list_templates_in(root: &Path, category: Option<&str>) -> Result<Vec<String>, TemplateError> {
    let search_dir = match category {
        Some(category) => root.join(category),
        None => root.to_path_buf(),
    };
    if !search_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(&search_dir).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
            continue;
        }
        if let Some(relative) = relative_path(root, path) {
            templates.push(relative);
        }
    }
    templates.sort();
    Ok(templates)
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

fn sort_timestamp(log: &Value) -> String {
    match log.get("timestamp") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn library() -> (TempDir, TemplateLibrary) {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "security/sysmon/T1059.001_powershell.json",
            r#"{"timestamp": "{{timestamp}}", "Image": "{{image_name}}", "ProcessId": "{{pid}}"}"#,
        );
        write(
            dir.path(),
            "security/T1003_lsass.json",
            r#"{"timestamp": "{{utc_time}}", "TargetImage": "lsass.exe"}"#,
        );
        write(
            dir.path(),
            "cloud/aws_console_login.json",
            r#"{"eventTime": "{{event_time}}", "sourceIPAddress": "{{source_ip}}"}"#,
        );
        write(dir.path(), "security/notes.txt", "not a template");
        write(dir.path(), "broken/bad.json", "{ not json");
        let library = TemplateLibrary::with_seed(dir.path(), 42);
        (dir, library)
    }

    #[test]
    fn test_list_templates() {
        let (_dir, library) = library();
        assert_eq!(
            library.list_templates(Some("security")).unwrap(),
            vec![
                "security/T1003_lsass.json",
                "security/sysmon/T1059.001_powershell.json",
            ]
        );
        assert_eq!(library.list_templates(None).unwrap().len(), 4);
        assert!(library.list_templates(Some("missing")).unwrap().is_empty());
    }

    #[test]
    fn test_list_templates_in_needs_no_library() {
        let (dir, library) = library();
        assert_eq!(
            list_templates_in(dir.path(), None).unwrap(),
            library.list_templates(None).unwrap()
        );
        assert_eq!(
            list_templates_in(dir.path(), Some("cloud")).unwrap(),
            vec!["cloud/aws_console_login.json"]
        );
    }

    #[test]
    fn test_load_template_errors() {
        let (_dir, library) = library();
        assert!(matches!(
            library.load_template("security/none.json"),
            Err(TemplateError::NotFound(_))
        ));
        assert!(matches!(
            library.load_template("broken/bad.json"),
            Err(TemplateError::Parse { .. })
        ));
    }

    #[test]
    fn test_generate_from_template() {
        let (_dir, library) = library();
        let base = DateTime::parse_from_rfc3339("2024-05-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let logs = library
            .generate_from_template("cloud/aws_console_login.json", 4, Some(base), 40)
            .unwrap();

        assert_eq!(logs.len(), 4);
        assert_eq!(logs[0]["eventTime"], "2024-05-01T00:00:00.000Z");
        assert_eq!(logs[3]["eventTime"], "2024-05-01T00:00:30.000Z");
        for log in &logs {
            assert_eq!(log["sourceIPAddress"].as_str().unwrap().split('.').count(), 4);
        }
    }

    #[test]
    fn test_generate_from_template_zero_count() {
        let (_dir, library) = library();
        assert!(matches!(
            library.generate_from_template("cloud/aws_console_login.json", 0, None, 0),
            Err(TemplateError::InvalidCount)
        ));
    }

    #[test]
    fn test_attack_scenario_skips_unknown_and_sorts() {
        let (_dir, library) = library();
        let techniques = vec![
            "T1003".to_string(),
            "T9999".to_string(),
            "T1059.001".to_string(),
        ];
        let logs = library
            .generate_attack_scenario(&techniques, 3, "security", 600)
            .unwrap();

        assert_eq!(logs.len(), 6);
        let timestamps: Vec<&str> = logs
            .iter()
            .map(|l| l["timestamp"].as_str().unwrap())
            .collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);

        let first = &logs[0]["_metadata"];
        assert_eq!(first["technique"], "T1003");
        assert_eq!(first["log_index"], 0);
        assert_eq!(first["template"], "security/T1003_lsass.json");
        assert!(logs
            .iter()
            .any(|l| l["_metadata"]["technique"] == "T1059.001"));
    }

    #[test]
    fn test_same_seed_same_output() {
        let (dir, library) = library();
        let base = Utc::now();
        let a = library
            .generate_from_template("security/T1003_lsass.json", 3, Some(base), 0)
            .unwrap();
        let b = TemplateLibrary::with_seed(dir.path(), 42)
            .generate_from_template("security/T1003_lsass.json", 3, Some(base), 0)
            .unwrap();
        assert_eq!(a, b);
    }
}

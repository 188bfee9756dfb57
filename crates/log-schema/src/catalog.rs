//! On-disk schema catalog.
//!
//! Schemas live under a root directory as
//! `<category>/[<vendor>/]<name>.yaml`, for example
//! `cloud_identity/google_workspace.yaml` or
//! `security/microsoft/sysmon.yaml`. A schema's catalog name is its path
//! relative to the category directory, without the extension.

use crate::schema::{Schema, SchemaError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

const SCHEMA_EXTENSION: &str = "yaml";

/// Catalog of schema files below a root directory.
#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    root: PathBuf,
}

impl SchemaCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative paths (`/`-separated, without extension) of every schema,
    /// sorted.
    pub fn relative_names(&self) -> Result<Vec<String>, SchemaError> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SCHEMA_EXTENSION) {
                continue;
            }
            if let Some(name) = self.relative_name(path) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn relative_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?.with_extension("");
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }

    /// Schema names grouped by category (the first path component).
    ///
    /// Files directly under the root have no category and are not listed,
    /// though [`SchemaCatalog::find`] still resolves them by name.
    pub fn list(&self) -> Result<BTreeMap<String, Vec<String>>, SchemaError> {
        let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for name in self.relative_names()? {
            if let Some((category, rest)) = name.split_once('/') {
                categories
                    .entry(category.to_string())
                    .or_default()
                    .push(rest.to_string());
            }
        }
        debug!(
            "Found {} schema categories under {}",
            categories.len(),
            self.root.display()
        );
        Ok(categories)
    }

    /// Resolve a schema name to its file.
    ///
    /// Accepts a full relative path (`web_servers/nginx_access`) or any
    /// trailing part of one (`nginx_access`); a trailing `.yaml` is ignored.
    /// Suffix matches resolve to the first schema in sorted order.
    pub fn find(&self, name: &str) -> Result<PathBuf, SchemaError> {
        let name = name.strip_suffix(".yaml").unwrap_or(name);

        let direct = self.root.join(format!("{name}.{SCHEMA_EXTENSION}"));
        if direct.is_file() {
            return Ok(direct);
        }

        let suffix = format!("/{name}");
        self.relative_names()?
            .into_iter()
            .find(|candidate| candidate == name || candidate.ends_with(&suffix))
            .map(|candidate| self.root.join(format!("{candidate}.{SCHEMA_EXTENSION}")))
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Find and load (with validation) a schema by name.
    pub fn load(&self, name: &str) -> Result<Schema, SchemaError> {
        let path = self.find(name)?;
        let schema = Schema::from_file(&path)?;
        info!("Loaded schema '{}' from {}", name, path.display());
        Ok(schema)
    }

    /// Find and load a schema by name, keeping unknown field types.
    pub fn load_lenient(&self, name: &str) -> Result<Schema, SchemaError> {
        let path = self.find(name)?;
        let schema = Schema::from_file_lenient(&path)?;
        info!(
            "Loaded schema '{}' from {} without type validation",
            name,
            path.display()
        );
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = "log_type: test\nfields:\n  id:\n    type: uuid\n    required: true\n";

    fn catalog_with(files: &[&str]) -> (TempDir, SchemaCatalog) {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, MINIMAL).unwrap();
        }
        let catalog = SchemaCatalog::new(dir.path());
        (dir, catalog)
    }

    #[test]
    fn test_list_groups_by_category() {
        let (_dir, catalog) = catalog_with(&[
            "web_servers/nginx_access.yaml",
            "cloud_identity/google_workspace.yaml",
            "security/microsoft/sysmon.yaml",
            "security/edr.yaml",
            "web_servers/README.md",
        ]);

        let listing = catalog.list().unwrap();
        let categories: Vec<&String> = listing.keys().collect();
        assert_eq!(
            categories,
            vec!["cloud_identity", "security", "web_servers"]
        );
        assert_eq!(listing["security"], vec!["edr", "microsoft/sysmon"]);
        assert_eq!(listing["web_servers"], vec!["nginx_access"]);
    }

    #[test]
    fn test_find_direct_and_suffix() {
        let (dir, catalog) = catalog_with(&[
            "web_servers/nginx_access.yaml",
            "security/microsoft/sysmon.yaml",
        ]);

        assert_eq!(
            catalog.find("web_servers/nginx_access").unwrap(),
            dir.path().join("web_servers/nginx_access.yaml")
        );
        assert_eq!(
            catalog.find("nginx_access.yaml").unwrap(),
            dir.path().join("web_servers/nginx_access.yaml")
        );
        assert_eq!(
            catalog.find("sysmon").unwrap(),
            dir.path().join("security/microsoft/sysmon.yaml")
        );
        assert_eq!(
            catalog.find("microsoft/sysmon").unwrap(),
            dir.path().join("security/microsoft/sysmon.yaml")
        );
    }

    #[test]
    fn test_find_does_not_match_partial_names() {
        let (_dir, catalog) = catalog_with(&["web_servers/nginx_access.yaml"]);
        assert!(matches!(
            catalog.find("access"),
            Err(SchemaError::NotFound(_))
        ));
    }

    #[test]
    fn test_load() {
        let (_dir, catalog) = catalog_with(&["misc/test.yaml"]);
        let schema = catalog.load("test").unwrap();
        assert_eq!(schema.log_type, "test");
    }

    #[test]
    fn test_load_lenient_keeps_unknown_types() {
        let (dir, catalog) = catalog_with(&[]);
        let path = dir.path().join("misc/legacy.yaml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "log_type: legacy\nfields:\n  when:\n    type: timestamp\n").unwrap();

        assert!(matches!(
            catalog.load("legacy"),
            Err(SchemaError::ValidationError { .. })
        ));
        let schema = catalog.load_lenient("legacy").unwrap();
        assert_eq!(schema.log_type, "legacy");
        assert!(schema.fields.contains_key("when"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let catalog = SchemaCatalog::new("/nonexistent/schemas");
        assert!(catalog.list().is_err());
    }
}

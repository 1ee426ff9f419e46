//! Entity resolution and discovery.
//!
//! The registry is the boundary between the annotator and the schema source:
//! it maps name tokens (CamelCase, snake_case, or file names) onto catalog
//! entries and source file paths. Lookup failures are signals to skip, never
//! errors.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use heck::{ToSnakeCase, ToUpperCamelCase};

use crate::schema::{Catalog, ColumnDescriptor};

/// A resolved entity: its canonical name, ordered columns, and the source
/// file the annotation belongs in.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
    pub source_file: PathBuf,
}

pub struct Registry {
    catalog: Catalog,
    models_dir: PathBuf,
    extension: String,
}

impl Registry {
    pub fn open(catalog_path: &Path, models_dir: &Path, extension: &str) -> Result<Self> {
        let catalog = Catalog::load(catalog_path)
            .with_context(|| format!("Loading schema catalog from {catalog_path:?}"))?;
        Ok(Self {
            catalog,
            models_dir: models_dir.to_path_buf(),
            extension: extension.to_string(),
        })
    }

    pub fn schema_version(&self) -> u64 {
        self.catalog.schema_version
    }

    /// Normalizes a name token to the canonical snake_case entity name.
    pub fn canonical(&self, token: &str) -> String {
        canonical_name(token, &self.extension)
    }

    /// Looks up a canonical entity name in the catalog. `None` means the name
    /// is not schema-backed and the caller should skip it. The source file is
    /// not checked here; a missing file surfaces when splicing.
    pub fn resolve(&self, name: &str) -> Option<EntityDescriptor> {
        let columns = self.catalog.columns(name)?.to_vec();
        Some(EntityDescriptor {
            source_file: source_path(&self.models_dir, name, &self.extension),
            name: name.to_string(),
            columns,
        })
    }
}

pub fn canonical_name(token: &str, extension: &str) -> String {
    let suffix = format!(".{extension}");
    let token = token.strip_suffix(&suffix).unwrap_or(token);
    token.to_snake_case()
}

/// Reporting name, e.g. `order_item` becomes `OrderItem`.
pub fn display_name(name: &str) -> String {
    name.to_upper_camel_case()
}

pub fn source_path(models_dir: &Path, name: &str, extension: &str) -> PathBuf {
    models_dir.join(format!("{name}.{extension}"))
}

/// Enumerates entity names from the source files in `models_dir`, sorted for
/// a stable processing order.
pub fn discover(models_dir: &Path, extension: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(models_dir)
        .with_context(|| format!("Reading models directory {models_dir:?}"))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Reading entry in {models_dir:?}"))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if !matches_extension {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

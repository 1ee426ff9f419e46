use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Metadata for a single table column as supplied by the schema catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
}

fn default_nullable() -> bool {
    true
}

impl ColumnDescriptor {
    /// Declared type with the length limit folded in, e.g. `string(255)`.
    pub fn type_label(&self) -> String {
        match self.limit {
            Some(limit) => format!("{}({limit})", self.data_type),
            None => self.data_type.clone(),
        }
    }
}

/// A schema catalog: one ordered column list per entity, keyed by the
/// entity's snake_case name, plus the catalog's schema version (0 when
/// unknown).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub schema_version: u64,
    pub entities: BTreeMap<String, Vec<ColumnDescriptor>>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening catalog file {path:?}"))?;
        let reader = BufReader::new(file);
        let catalog = serde_json::from_reader(reader).context("Parsing catalog JSON")?;
        Ok(catalog)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Creating catalog file {path:?}"))?;
        serde_json::to_writer_pretty(file, self).context("Writing catalog JSON")
    }

    pub fn columns(&self, entity: &str) -> Option<&[ColumnDescriptor]> {
        self.entities.get(entity).map(Vec::as_slice)
    }
}

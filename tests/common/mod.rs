#![allow(dead_code)]

use std::{collections::BTreeMap, fs, path::PathBuf};

use schema_annotate::schema::{Catalog, ColumnDescriptor};
use tempfile::TempDir;

pub fn column(
    name: &str,
    data_type: &str,
    limit: Option<u32>,
    default: Option<&str>,
    nullable: bool,
) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        data_type: data_type.to_string(),
        limit,
        default: default.map(str::to_string),
        nullable,
    }
}

pub fn sample_catalog(schema_version: u64) -> Catalog {
    let mut entities = BTreeMap::new();
    entities.insert(
        "user".to_string(),
        vec![
            column("id", "integer", None, None, false),
            column("email", "string", Some(255), None, false),
        ],
    );
    entities.insert(
        "order_item".to_string(),
        vec![
            column("id", "integer", None, None, false),
            column("quantity", "integer", None, Some("1"), false),
            column("note", "text", None, None, true),
        ],
    );
    Catalog {
        schema_version,
        entities,
    }
}

/// Lays out a temp workspace: a catalog JSON file plus a models directory
/// holding `user.rb` and `order_item.rb`.
pub fn write_workspace(schema_version: u64) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let catalog_path = dir.path().join("catalog.json");
    sample_catalog(schema_version)
        .save(&catalog_path)
        .expect("write catalog");

    let models_dir = dir.path().join("models");
    fs::create_dir(&models_dir).expect("create models dir");
    fs::write(models_dir.join("user.rb"), "class User\nend\n").expect("write user model");
    fs::write(
        models_dir.join("order_item.rb"),
        "class OrderItem\nend\n",
    )
    .expect("write order_item model");

    (dir, catalog_path, models_dir)
}

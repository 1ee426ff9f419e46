use std::fs;

use schema_annotate::registry::{self, Registry};

mod common;

#[test]
fn discover_lists_model_stems_sorted_and_filtered_by_extension() {
    let (_dir, _catalog, models) = common::write_workspace(0);
    fs::write(models.join("zebra.rb"), "class Zebra\nend\n").expect("write zebra model");
    fs::write(models.join("README.md"), "docs\n").expect("write stray file");

    let names = registry::discover(&models, "rb").expect("discover models");
    assert_eq!(names, vec!["order_item", "user", "zebra"]);
}

#[test]
fn discover_fails_for_missing_directory() {
    let (dir, _catalog, _models) = common::write_workspace(0);
    let missing = dir.path().join("nope");
    assert!(registry::discover(&missing, "rb").is_err());
}

#[test]
fn resolve_returns_descriptor_with_source_path() {
    let (_dir, catalog, models) = common::write_workspace(3);
    let registry = Registry::open(&catalog, &models, "rb").expect("open registry");
    assert_eq!(registry.schema_version(), 3);

    let name = registry.canonical("OrderItem");
    let entity = registry.resolve(&name).expect("order_item resolves");
    assert_eq!(entity.name, "order_item");
    assert_eq!(entity.source_file, models.join("order_item.rb"));
    assert_eq!(entity.columns.len(), 3);
    assert_eq!(entity.columns[0].name, "id");
}

#[test]
fn resolve_returns_none_for_entities_outside_the_catalog() {
    let (_dir, catalog, models) = common::write_workspace(0);
    let registry = Registry::open(&catalog, &models, "rb").expect("open registry");
    assert!(registry.resolve(&registry.canonical("Ghost")).is_none());
}

#[test]
fn file_name_tokens_resolve_like_class_names() {
    let (_dir, catalog, models) = common::write_workspace(0);
    let registry = Registry::open(&catalog, &models, "rb").expect("open registry");
    let from_file = registry.canonical("user.rb");
    let from_class = registry.canonical("User");
    assert_eq!(from_file, from_class);
    assert!(registry.resolve(&from_file).is_some());
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog lifecycle specs
//!
//! Verify transactions mutate the catalog, rejections leave no trace, and
//! queries stay off the journal.

use crate::prelude::*;
use tempfile::TempDir;

#[test]
fn adding_a_product_returns_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.jsonl");
    let image = open_catalog(&path).unwrap();

    let product = image
        .execute(AddSoftwareProduct::new("arrow", "kotlin"))
        .unwrap();

    assert_eq!(
        product,
        SoftwareProduct {
            name: "arrow".to_string(),
            language: "kotlin".to_string(),
        }
    );
    assert_eq!(image.query(ProductNamed("arrow")).unwrap(), Some(product));
}

#[test]
fn duplicate_name_is_rejected_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.jsonl");
    let image = open_catalog(&path).unwrap();

    image
        .execute(AddSoftwareProduct::new("arrow", "kotlin"))
        .unwrap();

    let err = image
        .execute(AddSoftwareProduct::new("arrow", "java"))
        .unwrap_err();

    assert!(matches!(err, ImageError::Rejected(_)));
    assert!(err.to_string().contains("existing name"));

    // State unchanged, nothing appended
    let product = image.query(ProductNamed("arrow")).unwrap().unwrap();
    assert_eq!(product.language, "kotlin");
    assert_eq!(journal_lines(&path), 1);
}

#[test]
fn renaming_a_product_moves_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.jsonl");
    let image = open_catalog(&path).unwrap();

    image
        .execute(AddSoftwareProduct::new("arrow", "kotlin"))
        .unwrap();

    let renamed = image
        .execute(RenameSoftwareProduct::new("arrow", "arrow2"))
        .unwrap();

    assert_eq!(
        renamed,
        Some(SoftwareProduct {
            name: "arrow2".to_string(),
            language: "kotlin".to_string(),
        })
    );
    assert_eq!(image.query(ProductNamed("arrow")).unwrap(), None);
    assert!(image.query(ProductNamed("arrow2")).unwrap().is_some());
}

#[test]
fn renaming_to_an_existing_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.jsonl");
    let image = open_catalog(&path).unwrap();

    image
        .execute(AddSoftwareProduct::new("arrow", "kotlin"))
        .unwrap();
    image
        .execute(AddSoftwareProduct::new("snakeyaml", "java"))
        .unwrap();

    let err = image
        .execute(RenameSoftwareProduct::new("arrow", "snakeyaml"))
        .unwrap_err();

    assert!(matches!(err, ImageError::Rejected(_)));
    assert_eq!(image.query(ProductCount).unwrap(), 2);
    assert_eq!(journal_lines(&path), 2);
}

#[test]
fn renaming_a_missing_product_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.jsonl");
    let image = open_catalog(&path).unwrap();

    let renamed = image
        .execute(RenameSoftwareProduct::new("ghost", "ghost2"))
        .unwrap();

    assert_eq!(renamed, None);
    assert_eq!(image.query(ProductCount).unwrap(), 0);
}

#[test]
fn changing_language_updates_the_product() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.jsonl");
    let image = open_catalog(&path).unwrap();

    image
        .execute(AddSoftwareProduct::new("jvmscripter", "java"))
        .unwrap();

    let changed = image
        .execute(ChangeProductLanguage::new("jvmscripter", "scala"))
        .unwrap();

    assert_eq!(changed.map(|p| p.language), Some("scala".to_string()));
    assert_eq!(image.query(ProductsInLanguage("java")).unwrap(), vec![]);
    assert_eq!(image.query(ProductsInLanguage("scala")).unwrap().len(), 1);
}

#[test]
fn removing_products_returns_only_those_present() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.jsonl");
    let image = open_catalog(&path).unwrap();

    image
        .execute(AddSoftwareProduct::new("arrow", "kotlin"))
        .unwrap();
    image
        .execute(AddSoftwareProduct::new("snakeyaml", "java"))
        .unwrap();

    let removed = image
        .execute(RemoveSoftwareProducts::new(&["arrow", "ghost"]))
        .unwrap();

    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].name, "arrow");
    assert_eq!(image.query(ProductCount).unwrap(), 1);
}

#[test]
fn queries_never_touch_the_journal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.jsonl");
    let image = open_catalog(&path).unwrap();

    image
        .execute(AddSoftwareProduct::new("arrow", "kotlin"))
        .unwrap();

    image.query(ProductNamed("arrow")).unwrap();
    image.query(ProductCount).unwrap();
    image.query(ProductsInLanguage("kotlin")).unwrap();

    assert_eq!(journal_lines(&path), 1);
}

use std::collections::HashSet;

use super::*;

#[test]
fn seeded_catalog_keeps_a_stable_order() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.list()[0].name, "Phone");
    assert_eq!(catalog.list()[9].name, "Keyboard");
    assert_eq!(catalog.list(), Catalog::seeded().list());
}

#[test]
fn seeded_catalog_has_unique_ids() {
    let catalog = Catalog::seeded();
    let ids: HashSet<ProductId> = catalog.list().iter().map(|product| product.id).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn find_by_id_returns_the_matching_record() {
    let catalog = Catalog::seeded();
    let product = catalog.find_by_id(ProductId(2)).expect("laptop");
    assert_eq!(product.name, "Laptop");
    assert_eq!(catalog.find_by_id(ProductId(2)), Some(product));
}

#[test]
fn find_by_id_misses_for_unknown_id() {
    let catalog = Catalog::seeded();
    assert!(catalog.find_by_id(ProductId(999)).is_none());
}

#[test]
fn find_by_id_returns_first_match_when_ids_collide() {
    // External fixtures are not validated; a repeated id resolves to the
    // first record in catalog order.
    let first = Product {
        id: ProductId(5),
        name: "Console".into(),
        description: "A simple console".into(),
        price: 499.99,
        icon: ProductIcon::RadioReceiver,
    };
    let second = Product {
        id: ProductId(5),
        name: "Camera".into(),
        description: "A simple camera".into(),
        price: 299.99,
        icon: ProductIcon::Camera,
    };
    let catalog = Catalog::from_products(vec![first.clone(), second]);
    assert_eq!(catalog.find_by_id(ProductId(5)), Some(&first));
}

#[test]
fn json_fixture_round_trips() {
    let raw = serde_json::to_string(Catalog::seeded().list()).expect("serialize");
    let catalog = Catalog::from_json_str(&raw).expect("parse");
    assert_eq!(catalog.list(), Catalog::seeded().list());
}

#[test]
fn malformed_json_fixture_is_rejected() {
    let err = Catalog::from_json_str("{\"not\": \"an array\"}").expect_err("reject");
    assert!(err.to_string().contains("product array"));
}

#[test]
fn json_fixture_loads_from_file() {
    let suffix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("catalog_fixture_test_{suffix}.json"));
    let raw = serde_json::to_string(Catalog::seeded().list()).expect("serialize");
    std::fs::write(&path, raw).expect("write fixture");

    let catalog = Catalog::from_json_file(&path).expect("load fixture");
    assert_eq!(catalog.len(), 10);

    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_fixture_file_reports_path() {
    let err = Catalog::from_json_file("/nonexistent/catalog.json").expect_err("missing file");
    assert!(err.to_string().contains("/nonexistent/catalog.json"));
}

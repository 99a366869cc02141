//! Tests for product record normalization

use super::*;
use crate::app::services::spec_normalizer::{normalize, normalize_row};
use crate::models::SpecValue;

#[test]
fn test_scalar_fields() {
    let row = raw_row(&[
        ("id", "P1"),
        ("name", "Ryzen 5"),
        ("category", "CPU"),
        ("brand", "AMD"),
        ("price", "15999"),
        ("stock", "10"),
        ("sold", "2"),
        ("available", "True"),
    ]);
    let record = normalize_row(&row);

    assert_eq!(record.id, "P1");
    assert_eq!(record.name, "Ryzen 5");
    assert_eq!(record.brand, "AMD");
    assert_eq!(record.price, 15999);
    assert_eq!(record.stock, 10);
    assert_eq!(record.sold, 2);
    assert!(record.available);
}

#[test]
fn test_category_keeps_case_but_dispatches_lowercase() {
    let record = normalize_row(&raw_row(&[("category", "MotherBoard")]));

    assert_eq!(record.category, "MotherBoard");
    assert_eq!(record.specs.get("sata_ports"), Some(&SpecValue::Integer(6)));
}

#[test]
fn test_counts_default_to_zero() {
    let missing = normalize(&raw_row(&[("id", "P1")]));
    assert_eq!(
        (missing.record.price, missing.record.stock, missing.record.sold),
        (0, 0, 0)
    );
    assert!(missing.coercion_fallbacks.is_empty());

    let garbage = normalize(&raw_row(&[
        ("price", "call us"),
        ("stock", ""),
        ("sold", "-3"),
    ]));
    assert_eq!(
        (garbage.record.price, garbage.record.stock, garbage.record.sold),
        (0, 0, 0)
    );
    assert_eq!(garbage.coercion_fallbacks, vec!["price", "sold"]);
}

#[test]
fn test_counts_accept_numeric_prefix() {
    let record = normalize_row(&raw_row(&[("price", "1299.99"), ("stock", "5 units")]));
    assert_eq!(record.price, 1299);
    assert_eq!(record.stock, 5);
}

#[test]
fn test_availability_literal_only() {
    for (value, expected) in [
        ("true", true),
        ("True", true),
        ("TRUE", true),
        ("false", false),
        ("yes", false),
        ("1", false),
        ("", false),
    ] {
        let record = normalize_row(&raw_row(&[("available", value)]));
        assert_eq!(record.available, expected, "available = {:?}", value);
    }
}

#[test]
fn test_images_skip_empty_columns_in_order() {
    let row = raw_row(&[
        ("image_1", ""),
        ("image_2", "b.jpg"),
        ("image_3", "   "),
        ("image_4", "d.jpg"),
        ("image_6", "f.jpg"),
    ]);
    let record = normalize_row(&row);

    assert_eq!(record.images, vec!["b.jpg", "d.jpg", "f.jpg"]);
    assert_eq!(record.image, "b.jpg");
}

#[test]
fn test_image_matches_first_of_images() {
    let rows = [
        raw_row(&[]),
        raw_row(&[("image_1", "a.jpg")]),
        raw_row(&[("image_5", "e.jpg"), ("image_6", "f.jpg")]),
        raw_row(&[("image_1", ""), ("image_2", "")]),
    ];

    for row in rows {
        let record = normalize_row(&row);
        match record.images.first() {
            Some(first) => assert_eq!(&record.image, first),
            None => assert_eq!(record.image, ""),
        }
    }
}

#[test]
fn test_missing_category_still_produces_record() {
    let record = normalize_row(&raw_row(&[("id", "P7"), ("tdp_watts", "95")]));

    assert_eq!(record.id, "P7");
    assert_eq!(record.category, "");
    assert_eq!(record.specs.get("tdp"), Some(&SpecValue::Integer(95)));
    assert_eq!(record.specs.len(), 1);
}

#[test]
fn test_case_record_serializes_lists() {
    let record = normalize_row(&fully_populated_row("case"));
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json["specs"]["supported_sockets"],
        serde_json::json!(["AM5", "LGA1700"])
    );
    assert_eq!(
        json["specs"]["supported_motherboards"],
        serde_json::json!(["ATX", "mATX"])
    );
    assert_eq!(json["specs"]["tdp"], serde_json::json!(650));
    assert_eq!(json["images"], serde_json::json!([]));
    assert_eq!(json["image"], serde_json::json!(""));
}

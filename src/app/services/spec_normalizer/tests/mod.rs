//! Test utilities for specification normalizer testing

use std::collections::HashMap;

use crate::models::RawRow;

mod normalizer_tests;

/// Build a raw row from column/value pairs
pub fn raw_row(pairs: &[(&str, &str)]) -> RawRow {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .collect();
    RawRow::new(2, values)
}

/// Row carrying every spec-relevant column with a value
pub fn fully_populated_row(category: &str) -> RawRow {
    raw_row(&[
        ("id", "X1"),
        ("name", "Everything"),
        ("category", category),
        ("brand", "Acme"),
        ("tdp_watts", "650W"),
        ("length_mm", "300"),
        ("height_mm", "158mm"),
        ("socket", "AM5|LGA1700"),
        ("form_factor", "ATX|mATX"),
        ("memory_type", "DDR5"),
        ("capacity_gb", "32"),
        ("interface", "PCIe 4.0"),
        ("slots", "4"),
        ("vram_gb", "16GB"),
        ("clock_speed", "4.7GHz"),
    ])
}

pub fn list(items: &[&str]) -> crate::models::SpecValue {
    crate::models::SpecValue::List(items.iter().map(|s| s.to_string()).collect())
}

pub fn text(value: &str) -> crate::models::SpecValue {
    crate::models::SpecValue::Text(value.to_string())
}

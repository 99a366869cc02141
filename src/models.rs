//! Core data structures for inventory processing.
//!
//! Defines the raw header-keyed row produced by the decoder, the normalized
//! product record sent to the catalog service, its category-dependent
//! specification map, and the lenient product view used by exports.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One decoded export row keyed by header name, values untyped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Physical line number in the source export (1-based)
    pub line_number: usize,
    values: HashMap<String, String>,
}

impl RawRow {
    pub fn new(line_number: usize, values: HashMap<String, String>) -> Self {
        Self {
            line_number,
            values,
        }
    }

    /// Raw value for a column, empty string if the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Raw value for a column only when it is present and non-empty
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Category tag used to pick derivation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Cpu,
    Gpu,
    Motherboard,
    Cooler,
    Case,
    Other,
}

impl ProductCategory {
    /// Classify a raw category label, ignoring case
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "cpu" => ProductCategory::Cpu,
            "gpu" => ProductCategory::Gpu,
            "motherboard" => ProductCategory::Motherboard,
            "cooler" => ProductCategory::Cooler,
            "case" => ProductCategory::Case,
            _ => ProductCategory::Other,
        }
    }
}

/// A single specification value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl From<i64> for SpecValue {
    fn from(value: i64) -> Self {
        SpecValue::Integer(value)
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        SpecValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for SpecValue {
    fn from(value: Vec<String>) -> Self {
        SpecValue::List(value)
    }
}

/// Category-dependent attribute map attached to a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specification(BTreeMap<String, SpecValue>);

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any value an earlier rule wrote
    pub fn insert(&mut self, key: &str, value: impl Into<SpecValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Normalized product record delivered to the catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: u64,
    pub stock: u64,
    pub sold: u64,
    pub available: bool,
    /// First entry of `images`, or empty when there are none
    pub image: String,
    pub images: Vec<String>,
    pub specs: Specification,
}

/// Ordered records from one export, one per non-blank row
pub type Batch = Vec<ProductRecord>;

/// Product as listed by the catalog service.
///
/// Catalog data may have been edited by hand, so every field is optional
/// and `specs` stays as untyped JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogProduct {
    pub id: serde_json::Value,
    pub name: serde_json::Value,
    pub category: serde_json::Value,
    pub brand: serde_json::Value,
    pub price: serde_json::Value,
    pub stock: serde_json::Value,
    pub sold: serde_json::Value,
    pub available: serde_json::Value,
    pub image: serde_json::Value,
    pub images: serde_json::Value,
    pub specs: serde_json::Value,
}

impl From<&ProductRecord> for CatalogProduct {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id.clone().into(),
            name: record.name.clone().into(),
            category: record.category.clone().into(),
            brand: record.brand.clone().into(),
            price: record.price.into(),
            stock: record.stock.into(),
            sold: record.sold.into(),
            available: record.available.into(),
            image: record.image.clone().into(),
            images: record.images.clone().into(),
            specs: serde_json::to_value(&record.specs).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label_ignores_case() {
        assert_eq!(ProductCategory::from_label("CPU"), ProductCategory::Cpu);
        assert_eq!(
            ProductCategory::from_label("Motherboard"),
            ProductCategory::Motherboard
        );
        assert_eq!(ProductCategory::from_label("case"), ProductCategory::Case);
        assert_eq!(ProductCategory::from_label("ram"), ProductCategory::Other);
        assert_eq!(ProductCategory::from_label(""), ProductCategory::Other);
    }

    #[test]
    fn test_raw_row_lookup() {
        let mut values = HashMap::new();
        values.insert("socket".to_string(), "AM5".to_string());
        values.insert("chipset".to_string(), String::new());
        let row = RawRow::new(2, values);

        assert_eq!(row.get("socket"), "AM5");
        assert_eq!(row.get("missing"), "");
        assert_eq!(row.non_empty("socket"), Some("AM5"));
        assert_eq!(row.non_empty("chipset"), None);
        assert_eq!(row.non_empty("missing"), None);
    }

    #[test]
    fn test_specification_serializes_mixed_values() {
        let mut specs = Specification::new();
        specs.insert("tdp", 105_i64);
        specs.insert("socket", "AM5");
        specs.insert(
            "supported_sockets",
            vec!["AM5".to_string(), "LGA1700".to_string()],
        );

        let json = serde_json::to_value(&specs).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "socket": "AM5",
                "supported_sockets": ["AM5", "LGA1700"],
                "tdp": 105
            })
        );
    }

    #[test]
    fn test_specification_insert_overwrites() {
        let mut specs = Specification::new();
        specs.insert("socket", "AM4");
        specs.insert("socket", "AM5");
        assert_eq!(specs.len(), 1);
        assert_eq!(specs.get("socket"), Some(&SpecValue::Text("AM5".to_string())));
    }

    #[test]
    fn test_catalog_product_tolerates_partial_documents() {
        let product: CatalogProduct = serde_json::from_str(
            r#"{"id": "P9", "price": 12.5, "specs": {"boost_clock": "5.1GHz"}, "_id": "abc"}"#,
        )
        .unwrap();

        assert_eq!(product.id, serde_json::json!("P9"));
        assert_eq!(product.name, serde_json::Value::Null);
        assert_eq!(product.images, serde_json::Value::Null);
        assert_eq!(product.specs["boost_clock"], serde_json::json!("5.1GHz"));
    }
}

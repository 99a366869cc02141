//! Flattening of catalog products into export columns

use serde_json::Value;

use crate::constants::{LIST_SEPARATOR, columns, spec_keys};
use crate::models::CatalogProduct;

static NULL: Value = Value::Null;

/// Spec keys tried in order for each spec-backed column
const SPEC_COLUMN_SOURCES: &[(&str, &[&str])] = &[
    (columns::SOCKET, &[spec_keys::SOCKET, spec_keys::CPU_SOCKET]),
    (columns::FORM_FACTOR, &[spec_keys::FORM_FACTOR]),
    (columns::TDP_WATTS, &[spec_keys::TDP]),
    (columns::MEMORY_TYPE, &[spec_keys::MEMORY_TYPE]),
    (
        columns::CLOCK_SPEED,
        &[spec_keys::BASE_CLOCK, spec_keys::BOOST_CLOCK],
    ),
    (columns::CHIPSET, &[spec_keys::CHIPSET]),
    (columns::VRAM_GB, &[spec_keys::MEMORY]),
    (
        columns::LENGTH_MM,
        &[spec_keys::LENGTH_MM, spec_keys::MAX_GPU_LENGTH_MM],
    ),
    (
        columns::HEIGHT_MM,
        &[spec_keys::HEIGHT_MM, spec_keys::MAX_CPU_COOLER_HEIGHT_MM],
    ),
    (
        columns::SLOTS,
        &[
            spec_keys::M2_SLOTS_GEN4,
            spec_keys::PCI_SLOTS,
            spec_keys::SATA_PORTS,
        ],
    ),
    (columns::INTERFACE, &[spec_keys::INTERFACE]),
    (
        columns::CAPACITY_GB,
        &[spec_keys::CAPACITY, spec_keys::MAX_MEMORY_GB],
    ),
    (columns::MODULES_COUNT, &[spec_keys::MODULES]),
];

/// Flatten one product into values ordered like `columns::EXPORT_LAYOUT`
pub fn flatten_product(product: &CatalogProduct) -> Vec<String> {
    columns::EXPORT_LAYOUT
        .iter()
        .map(|column| column_value(product, column))
        .collect()
}

fn column_value(product: &CatalogProduct, column: &str) -> String {
    match column {
        columns::ID => plain_text(&product.id),
        columns::NAME => plain_text(&product.name),
        columns::CATEGORY => plain_text(&product.category),
        columns::BRAND => plain_text(&product.brand),
        columns::PRICE => plain_text(&product.price),
        columns::STOCK => plain_text(&product.stock),
        columns::SOLD => first_truthy([&product.sold]).unwrap_or_else(|| "0".to_string()),
        columns::AVAILABLE => plain_text(&product.available),
        _ => {
            if let Some(slot) = image_slot(column) {
                return image_value(product, slot);
            }
            spec_value(product, column)
        }
    }
}

/// 0-based slot of an `image_N` column
fn image_slot(column: &str) -> Option<usize> {
    columns::IMAGES.iter().position(|image| *image == column)
}

fn image_value(product: &CatalogProduct, slot: usize) -> String {
    let image = product.images.get(slot).unwrap_or(&NULL);
    if slot == 0 {
        first_truthy([&product.image, image]).unwrap_or_default()
    } else {
        first_truthy([image]).unwrap_or_default()
    }
}

fn spec_value(product: &CatalogProduct, column: &str) -> String {
    let Some((_, keys)) = SPEC_COLUMN_SOURCES
        .iter()
        .find(|(source_column, _)| *source_column == column)
    else {
        return String::new();
    };

    let candidates = keys
        .iter()
        .map(|key| product.specs.get(key).unwrap_or(&NULL));
    first_truthy(candidates).unwrap_or_default()
}

/// Text of the first candidate that is not 0, "", false, null or missing
fn first_truthy<'a>(candidates: impl IntoIterator<Item = &'a Value>) -> Option<String> {
    candidates
        .into_iter()
        .find(|value| is_truthy(value))
        .map(plain_text)
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Unquoted text for a JSON value; arrays become `|`-separated lists
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => {
            let separator = LIST_SEPARATOR.to_string();
            items
                .iter()
                .map(plain_text)
                .collect::<Vec<_>>()
                .join(separator.as_str())
        }
        Value::Object(_) => value.to_string(),
    }
}

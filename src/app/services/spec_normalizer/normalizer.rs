//! Row normalization into product records

use tracing::debug;

use super::rules::rules_for;
use crate::app::services::inventory_parser::field_parsers::{parse_count, parse_flag};
use crate::constants::columns;
use crate::models::{ProductCategory, ProductRecord, RawRow, Specification};

/// A normalized record plus the scalar columns that fell back to 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub record: ProductRecord,

    /// Columns holding a value that could not be read as a count
    pub coercion_fallbacks: Vec<&'static str>,
}

/// Normalize a raw row into a product record
pub fn normalize_row(row: &RawRow) -> ProductRecord {
    normalize(row).record
}

/// Normalize a raw row, reporting coercion fallbacks
pub fn normalize(row: &RawRow) -> NormalizedRecord {
    let mut coercion_fallbacks = Vec::new();

    let price = count_or_zero(row, columns::PRICE, &mut coercion_fallbacks);
    let stock = count_or_zero(row, columns::STOCK, &mut coercion_fallbacks);
    let sold = count_or_zero(row, columns::SOLD, &mut coercion_fallbacks);

    let images: Vec<String> = columns::IMAGES
        .iter()
        .filter_map(|column| row.non_empty(column))
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .collect();
    let image = images.first().cloned().unwrap_or_default();

    let category = row.get(columns::CATEGORY);
    let specs = derive_specification(row, ProductCategory::from_label(category));

    let record = ProductRecord {
        id: row.get(columns::ID).to_string(),
        name: row.get(columns::NAME).to_string(),
        category: category.to_string(),
        brand: row.get(columns::BRAND).to_string(),
        price,
        stock,
        sold,
        available: parse_flag(row.get(columns::AVAILABLE)),
        image,
        images,
        specs,
    };

    NormalizedRecord {
        record,
        coercion_fallbacks,
    }
}

/// Run every rule registered for `category`, in order
pub fn derive_specification(row: &RawRow, category: ProductCategory) -> Specification {
    let mut specs = Specification::new();
    for rule in rules_for(category) {
        rule.apply(row, &mut specs);
    }
    specs
}

fn count_or_zero(row: &RawRow, column: &'static str, fallbacks: &mut Vec<&'static str>) -> u64 {
    let Some(value) = row.non_empty(column) else {
        return 0;
    };

    parse_count(value).unwrap_or_else(|| {
        debug!(
            "Line {}: {} = '{}' is not a non-negative integer, using 0",
            row.line_number, column, value
        );
        fallbacks.push(column);
        0
    })
}

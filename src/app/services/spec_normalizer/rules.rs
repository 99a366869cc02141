//! Category-dependent specification rules
//!
//! Each category maps to an ordered list of rules. `Common` always runs
//! first; category rules run after it and may overwrite its keys. Adding a
//! category means adding a rule variant and a table entry.

use tracing::debug;

use crate::app::services::inventory_parser::field_parsers::{parse_leading_int, split_list};
use crate::constants::{LIST_SEPARATOR, MOTHERBOARD_SATA_PORTS, columns, spec_keys};
use crate::models::{ProductCategory, RawRow, Specification};

/// A named group of derivations from raw columns into spec keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationRule {
    /// Power, dimensions, socket, form factor, memory and storage columns
    Common,
    /// Socket list for coolers and cases
    CoolerCase,
    /// Motherboard form factor list for cases
    Case,
    Motherboard,
    Gpu,
    Cpu,
}

/// Ordered rules applied to a category
pub fn rules_for(category: ProductCategory) -> &'static [DerivationRule] {
    use DerivationRule::*;

    match category {
        ProductCategory::Cpu => &[Common, Cpu],
        ProductCategory::Gpu => &[Common, Gpu],
        ProductCategory::Motherboard => &[Common, Motherboard],
        ProductCategory::Cooler => &[Common, CoolerCase],
        ProductCategory::Case => &[Common, CoolerCase, Case],
        ProductCategory::Other => &[Common],
    }
}

impl DerivationRule {
    /// Apply this rule's derivations to `specs`
    pub fn apply(self, row: &RawRow, specs: &mut Specification) {
        match self {
            DerivationRule::Common => {
                insert_int(row, specs, columns::TDP_WATTS, spec_keys::TDP);
                insert_int(row, specs, columns::LENGTH_MM, spec_keys::LENGTH_MM);
                insert_int(row, specs, columns::HEIGHT_MM, spec_keys::HEIGHT_MM);
                insert_text(row, specs, columns::SOCKET, spec_keys::SOCKET);
                insert_text(row, specs, columns::FORM_FACTOR, spec_keys::FORM_FACTOR);
                insert_text(row, specs, columns::MEMORY_TYPE, spec_keys::MEMORY_TYPE);
                insert_int(row, specs, columns::CAPACITY_GB, spec_keys::CAPACITY_GB);
                insert_text(row, specs, columns::INTERFACE, spec_keys::INTERFACE);
            }
            DerivationRule::CoolerCase => {
                insert_list(row, specs, columns::SOCKET, spec_keys::SUPPORTED_SOCKETS);
            }
            DerivationRule::Case => {
                insert_list(
                    row,
                    specs,
                    columns::FORM_FACTOR,
                    spec_keys::SUPPORTED_MOTHERBOARDS,
                );
            }
            DerivationRule::Motherboard => {
                insert_text(row, specs, columns::SOCKET, spec_keys::CPU_SOCKET);
                insert_int(row, specs, columns::SLOTS, spec_keys::M2_SLOTS_GEN4);
                specs.insert(spec_keys::SATA_PORTS, MOTHERBOARD_SATA_PORTS);
            }
            DerivationRule::Gpu => {
                // Kept as text so units like "16GB" survive
                insert_text(row, specs, columns::VRAM_GB, spec_keys::MEMORY);
            }
            DerivationRule::Cpu => {
                insert_text(row, specs, columns::CLOCK_SPEED, spec_keys::BASE_CLOCK);
            }
        }
    }
}

fn insert_text(row: &RawRow, specs: &mut Specification, column: &str, key: &str) {
    if let Some(value) = row.non_empty(column) {
        specs.insert(key, value);
    }
}

fn insert_int(row: &RawRow, specs: &mut Specification, column: &str, key: &str) {
    let Some(value) = row.non_empty(column) else {
        return;
    };

    match parse_leading_int(value) {
        Some(number) => specs.insert(key, number),
        None => debug!(
            "Line {}: {} = '{}' is not numeric, omitting spec '{}'",
            row.line_number, column, value, key
        ),
    }
}

fn insert_list(row: &RawRow, specs: &mut Specification, column: &str, key: &str) {
    if let Some(value) = row.non_empty(column) {
        specs.insert(key, split_list(value, LIST_SEPARATOR));
    }
}

//! Delimited text output in the inventory layout

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::flatten::flatten_product;
use crate::app::services::inventory_parser::encode_field;
use crate::constants::columns;
use crate::models::CatalogProduct;
use crate::{Error, Result};

/// Write the header and one quoted row per product. Returns the row count.
pub fn write_inventory<W: Write>(
    products: &[CatalogProduct],
    mut writer: W,
    delimiter: char,
) -> io::Result<usize> {
    let separator = delimiter.to_string();

    writeln!(writer, "{}", columns::EXPORT_LAYOUT.join(separator.as_str()))?;

    for product in products {
        let fields: Vec<String> = flatten_product(product)
            .iter()
            .map(|value| encode_field(value))
            .collect();
        writeln!(writer, "{}", fields.join(separator.as_str()))?;
    }

    writer.flush()?;
    Ok(products.len())
}

/// Render the export into a string
pub fn render_inventory(products: &[CatalogProduct], delimiter: char) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_inventory(products, &mut buffer, delimiter);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write the export to `path`, replacing any existing file
pub fn write_inventory_file(
    products: &[CatalogProduct],
    path: &Path,
    delimiter: char,
) -> Result<usize> {
    let destination = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::output_write(&destination, e))?;

    let rows = write_inventory(products, BufWriter::new(file), delimiter)
        .map_err(|e| Error::output_write(&destination, e))?;

    debug!("Wrote {} rows to {}", rows, destination);
    Ok(rows)
}

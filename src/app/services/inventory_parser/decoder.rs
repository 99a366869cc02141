//! Row decoding: tokenized fields plus header names into a `RawRow`
//!
//! Decoding never fails. Short rows are padded with empty values and extra
//! fields are dropped; both are reported back as anomalies so the caller can
//! log and count them.

use super::tokenizer::TokenizedLine;
use crate::constants::QUOTE;
use crate::models::RawRow;
use std::collections::HashMap;

const ESCAPED_QUOTE: &str = "\"\"";
const QUOTE_STR: &str = "\"";

/// Column names taken from the first line of an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Build a header from its tokenized line, cleaning names like values
    pub fn from_line(line: &TokenizedLine<'_>) -> Self {
        Self::new(line.fields.iter().map(|field| clean_field(field)).collect())
    }

    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Shape mismatch between a row and the header, recovered during decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDecodeAnomaly {
    /// Fewer fields than headers; trailing columns decoded as empty
    MissingFields { expected: usize, found: usize },
    /// More fields than headers; the extras were ignored
    ExtraFields { expected: usize, found: usize },
}

/// A decoded row and whatever shape problem was patched over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRow {
    pub row: RawRow,
    pub anomaly: Option<RowDecodeAnomaly>,
}

/// Clean one raw field: trim, strip one pair of wrapping quotes, then
/// collapse doubled quotes
pub fn clean_field(raw: &str) -> String {
    strip_wrapping_quotes(raw.trim()).replace(ESCAPED_QUOTE, QUOTE_STR)
}

/// Quote a value the way exports write it; `clean_field` reverses this
pub fn encode_field(value: &str) -> String {
    format!("{QUOTE}{}{QUOTE}", value.replace(QUOTE_STR, ESCAPED_QUOTE))
}

fn strip_wrapping_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with(QUOTE) && value.ends_with(QUOTE) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Decode a tokenized line against the header.
///
/// Returns `None` for blank rows: no fields at all, or a single field that
/// cleans to the empty string.
pub fn decode_row(header: &Header, line: &TokenizedLine<'_>) -> Option<DecodedRow> {
    let values: Vec<String> = line.fields.iter().map(|field| clean_field(field)).collect();

    if values.is_empty() || (values.len() == 1 && values[0].is_empty()) {
        return None;
    }

    let anomaly = if values.len() < header.len() {
        Some(RowDecodeAnomaly::MissingFields {
            expected: header.len(),
            found: values.len(),
        })
    } else if values.len() > header.len() {
        Some(RowDecodeAnomaly::ExtraFields {
            expected: header.len(),
            found: values.len(),
        })
    } else {
        None
    };

    // Later duplicates of a header name overwrite earlier ones
    let mut mapped = HashMap::with_capacity(header.len());
    for (index, name) in header.names().iter().enumerate() {
        let value = values.get(index).cloned().unwrap_or_default();
        mapped.insert(name.clone(), value);
    }

    Some(DecodedRow {
        row: RawRow::new(line.line_number, mapped),
        anomaly,
    })
}

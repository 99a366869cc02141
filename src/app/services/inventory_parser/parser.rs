//! Inventory parser orchestration
//!
//! Drives tokenizer, decoder and normalizer over a whole export and keeps
//! the statistics. Anomalies are logged and counted, never returned as
//! errors; only reading the file itself can fail.

use std::path::Path;
use tracing::{debug, info, warn};

use super::decoder::{Header, RowDecodeAnomaly, decode_row};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::LineTokenizer;
use crate::app::services::spec_normalizer::normalize;
use crate::config::ParserConfig;
use crate::constants::columns;
use crate::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parser for delimited inventory exports
#[derive(Debug, Clone)]
pub struct InventoryParser {
    delimiter: char,
}

impl Default for InventoryParser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl InventoryParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            delimiter: config.delimiter,
        }
    }

    /// Read and parse an export file
    pub async fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Reading inventory export from {}", path.display());

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::input_access(path, e))?;

        Ok(self.parse_str(&text))
    }

    /// Parse export text; the first non-blank line is the header
    pub fn parse_str(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();
        // Spreadsheet exports often start with a byte-order mark
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let mut lines = LineTokenizer::with_delimiter(text, self.delimiter);

        let header = match lines.next() {
            Some(line) => {
                stats.lines_read += 1;
                Header::from_line(&line)
            }
            None => {
                warn!("Inventory export is empty, no header row found");
                return ParseResult { records, stats };
            }
        };
        debug!("Header has {} columns: {:?}", header.len(), header.names());
        if !header.names().iter().any(|name| name == columns::ID) {
            warn!(
                "Header has no '{}' column, every record will have an empty id",
                columns::ID
            );
        }

        for line in lines {
            stats.lines_read += 1;

            let Some(decoded) = decode_row(&header, &line) else {
                debug!("Skipping blank row at line {}", line.line_number);
                stats.rows_skipped += 1;
                continue;
            };

            match decoded.anomaly {
                Some(RowDecodeAnomaly::MissingFields { expected, found }) => {
                    warn!(
                        "Line {}: {} fields for {} columns, missing values left empty",
                        line.line_number, found, expected
                    );
                    stats.ragged_rows += 1;
                }
                Some(RowDecodeAnomaly::ExtraFields { expected, found }) => {
                    warn!(
                        "Line {}: {} fields for {} columns, extra fields ignored",
                        line.line_number, found, expected
                    );
                    stats.overflow_rows += 1;
                }
                None => {}
            }

            let normalized = normalize(&decoded.row);
            stats.coercion_fallbacks += normalized.coercion_fallbacks.len();
            records.push(normalized.record);
        }

        stats.records_parsed = records.len();
        debug!("Parse finished: {:?}", stats);

        ParseResult { records, stats }
    }
}

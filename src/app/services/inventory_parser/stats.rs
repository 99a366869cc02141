//! Parsing statistics and result structures for inventory exports

use crate::models::Batch;

/// Parsed records with the statistics gathered while producing them
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Normalized records in input order
    pub records: Batch,

    pub stats: ParseStats,
}

/// Counters for one parse of an export
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Non-blank lines seen, header included
    pub lines_read: usize,

    /// Records produced
    pub records_parsed: usize,

    /// Rows dropped by the blank-row guard
    pub rows_skipped: usize,

    /// Rows with fewer fields than the header
    pub ragged_rows: usize,

    /// Rows with more fields than the header
    pub overflow_rows: usize,

    /// Price/stock/sold values that were present but fell back to 0
    pub coercion_fallbacks: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows whose shape did not match the header
    pub fn decode_anomalies(&self) -> usize {
        self.ragged_rows + self.overflow_rows
    }

    /// True when every row decoded cleanly and every count parsed
    pub fn is_clean(&self) -> bool {
        self.decode_anomalies() == 0 && self.coercion_fallbacks == 0
    }
}

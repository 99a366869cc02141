//! Parser for delimited inventory exports
//!
//! Turns the raw text of an inventory export into normalized product
//! records. Quoted fields may embed the delimiter; no field spans lines.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Line splitting and quote-aware field splitting
//! - [`decoder`] - Header mapping, quote stripping and unescaping
//! - [`field_parsers`] - Lenient integer, flag and list coercion
//! - [`parser`] - Orchestration over a whole export
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use inventory_sync::app::services::inventory_parser::InventoryParser;
//!
//! let text = "id,name,category,price\nP1,\"Ryzen 5, boxed\",cpu,15999\n";
//! let result = InventoryParser::default().parse_str(text);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].name, "Ryzen 5, boxed");
//! assert_eq!(result.records[0].price, 15999);
//! ```

pub mod decoder;
pub mod field_parsers;
pub mod parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use decoder::{DecodedRow, Header, RowDecodeAnomaly, clean_field, decode_row, encode_field};
pub use parser::InventoryParser;
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::{LineTokenizer, TokenizedLine};

//! Inventory Sync Library
//!
//! Turns hand-maintained inventory CSV exports into normalized product
//! records and delivers them to a catalog service in one batch request.
//!
//! This library provides tools for:
//! - Tokenizing quoted, delimited exports line by line
//! - Decoding rows against the header with lenient handling of ragged rows
//! - Deriving category-specific product specifications
//! - Delivering batches over HTTP with timeouts and transport retries
//! - Exporting the catalog back into the inventory column layout

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;

// Core application modules
pub mod app {
    pub mod services {
        pub mod catalog_client;
        pub mod inventory_export;
        pub mod inventory_parser;
        pub mod spec_normalizer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use models::{Batch, CatalogProduct, ProductRecord, SpecValue, Specification};
pub use processor::{DeliveryOutcome, InventoryProcessor, SyncMode, SyncOutcome};

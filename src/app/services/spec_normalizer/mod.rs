//! Specification normalizer for decoded inventory rows
//!
//! Derives the top-level scalar fields (price, stock, sold, availability,
//! images) and the category-dependent `specs` map of a product record.
//!
//! Top-level counts default to 0 when unreadable. Spec integers are simply
//! left out instead, so the catalog never sees a made-up 0 wattage or
//! length.
//!
//! - [`rules`] - Rule variants and the category-to-rules table
//! - [`normalizer`] - Record construction

pub mod normalizer;
pub mod rules;

#[cfg(test)]
pub mod tests;

pub use normalizer::{NormalizedRecord, derive_specification, normalize, normalize_row};
pub use rules::{DerivationRule, rules_for};

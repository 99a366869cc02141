//! Inventory export from the catalog service
//!
//! Flattens catalog products back into the inventory column layout so an
//! export can be edited and fed through `sync` again. Spec-backed columns
//! take the first non-empty value among a short list of spec keys, and
//! list-valued specs are packed with `|`.
//!
//! - [`flatten`] - Column value selection per product
//! - [`writer`] - Header and quoted row output

pub mod flatten;
pub mod writer;

pub use flatten::flatten_product;
pub use writer::{render_inventory, write_inventory, write_inventory_file};

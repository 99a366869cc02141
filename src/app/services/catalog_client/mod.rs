//! Catalog service client
//!
//! Delivers a normalized batch to the catalog's batch-create endpoint and
//! reads the product list back for exports. Requests are bounded by the
//! configured timeout. Reads are retried after any transport failure, the
//! batch POST only after a failure to connect. A non-2xx answer is reported
//! to the caller with its status and body and never retried.
//!
//! - [`client`] - [`CatalogClient`] and [`DispatchReport`]

pub mod client;

#[cfg(test)]
pub mod tests;

pub use client::{CatalogClient, DispatchReport};

//! Sync pipeline for one inventory export.
//!
//! Reads the export, runs it through tokenizing, decoding and
//! normalization, logs what is about to be sent, then hands the whole
//! batch to the catalog client in a single request. Stages run strictly in
//! sequence and nothing is kept between runs.

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::app::services::catalog_client::{CatalogClient, DispatchReport};
use crate::app::services::inventory_parser::{InventoryParser, ParseResult, ParseStats};
use crate::config::Config;
use crate::models::{Batch, CatalogProduct};
use crate::Result;

/// Whether a sync delivers the batch or stops after reporting it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    #[default]
    Deliver,
    DryRun,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Delivered(DispatchReport),
    /// Batch was built but not sent
    DryRun { records: usize },
}

/// Result of one sync run
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub stats: ParseStats,
    pub delivery: DeliveryOutcome,
    pub duration: Duration,
}

/// Drives parsing and delivery for inventory exports
pub struct InventoryProcessor {
    parser: InventoryParser,
    client: CatalogClient,
}

impl InventoryProcessor {
    /// Build a processor from validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let parser = InventoryParser::new(&config.parser);
        let client = CatalogClient::new(config.catalog)?;

        Ok(Self { parser, client })
    }

    /// Read and parse an export into a batch
    pub async fn load_batch(&self, path: &Path) -> Result<ParseResult> {
        let result = self.parser.parse_file(path).await?;

        if result.stats.is_clean() {
            debug!("Parsed {} records", result.stats.records_parsed);
        } else {
            warn!(
                "Parsed {} records with {} ragged, {} overflowing rows and {} defaulted counts",
                result.stats.records_parsed,
                result.stats.ragged_rows,
                result.stats.overflow_rows,
                result.stats.coercion_fallbacks
            );
        }

        Ok(result)
    }

    /// Log the record count and the first record before delivery
    pub fn report_sample(&self, batch: &Batch) {
        info!("Prepared {} records for delivery", batch.len());

        let Some(first) = batch.first() else {
            return;
        };

        match serde_json::to_string_pretty(first) {
            Ok(json) => info!("First record:\n{}", json),
            Err(e) => warn!("Could not render sample record: {}", e),
        }
    }

    /// Send a batch to the catalog service
    pub async fn dispatch(&self, batch: &Batch) -> Result<DispatchReport> {
        let report = self.client.dispatch_batch(batch).await?;
        info!(
            "Catalog accepted {} records with status {} after {} attempt(s)",
            report.records_sent, report.status, report.attempts
        );
        Ok(report)
    }

    /// Parse an export and deliver it unless running dry
    pub async fn sync(&self, path: &Path, mode: SyncMode) -> Result<SyncOutcome> {
        let start_time = Instant::now();

        let ParseResult { records, stats } = self.load_batch(path).await?;
        self.report_sample(&records);

        let delivery = match mode {
            SyncMode::Deliver => DeliveryOutcome::Delivered(self.dispatch(&records).await?),
            SyncMode::DryRun => {
                info!("Dry run, skipping delivery of {} records", records.len());
                DeliveryOutcome::DryRun {
                    records: records.len(),
                }
            }
        };

        Ok(SyncOutcome {
            stats,
            delivery,
            duration: start_time.elapsed(),
        })
    }

    /// Fetch the catalog's current products for export
    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogProduct>> {
        self.client.fetch_products().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn inventory_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_dry_run_skips_delivery() {
        let processor = InventoryProcessor::new(Config::default()).unwrap();
        let file = inventory_file(
            "id,name,category,price\nP1,Ryzen 5,cpu,15999\n\nP2,RTX 4070,gpu,59999\n",
        );

        let outcome = processor.sync(file.path(), SyncMode::DryRun).await.unwrap();

        assert_eq!(outcome.stats.records_parsed, 2);
        assert_eq!(outcome.delivery, DeliveryOutcome::DryRun { records: 2 });
    }

    #[tokio::test]
    async fn test_missing_input_fails_before_network() {
        let processor = InventoryProcessor::new(Config::default()).unwrap();

        let error = processor
            .sync(Path::new("/nonexistent/inventory.csv"), SyncMode::Deliver)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::InputAccess { .. }));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config::default().with_delimiter('"');
        assert!(matches!(
            InventoryProcessor::new(config),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_report_sample_handles_empty_batch() {
        let processor = InventoryProcessor::new(Config::default()).unwrap();
        processor.report_sample(&Vec::new());
    }
}

//! HTTP client for the catalog service

use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::models::{CatalogProduct, ProductRecord};
use crate::{Error, Result};

/// Outcome of a successful batch delivery
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReport {
    pub endpoint: String,
    pub status: u16,
    pub records_sent: usize,
    /// Requests made, including transport retries
    pub attempts: u32,
    /// Response body as JSON, or as a JSON string when it is not JSON
    pub acknowledgment: serde_json::Value,
}

#[derive(Serialize)]
struct BatchPayload<'a> {
    products: &'a [ProductRecord],
}

/// The product list endpoint answers with a bare array on most deployments
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductListing {
    Bare(Vec<CatalogProduct>),
    Wrapped { products: Vec<CatalogProduct> },
}

impl ProductListing {
    fn into_products(self) -> Vec<CatalogProduct> {
        match self {
            ProductListing::Bare(products) | ProductListing::Wrapped { products } => products,
        }
    }
}

/// Which transport failures a request may be retried after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryPolicy {
    /// Only failures to connect, where the request never left the client
    ConnectFailures,
    /// Any transport failure; for idempotent reads
    AnyTransport,
}

impl RetryPolicy {
    fn allows(self, error: &reqwest::Error) -> bool {
        match self {
            RetryPolicy::ConnectFailures => error.is_connect(),
            RetryPolicy::AnyTransport => true,
        }
    }
}

/// Client for the catalog service's product endpoints
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a client, validating the endpoint configuration
    pub fn new(config: CatalogConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn batch_endpoint(&self) -> String {
        self.config.batch_url()
    }

    pub fn products_endpoint(&self) -> String {
        self.config.products_url()
    }

    /// POST the whole batch as `{"products": [...]}` in a single request.
    ///
    /// An empty batch is still sent. Non-2xx answers are returned as
    /// [`Error::ServiceRejection`] and never retried. Only connection
    /// failures are retried: after a timeout or a dropped connection the
    /// service may already have stored the batch.
    pub async fn dispatch_batch(&self, records: &[ProductRecord]) -> Result<DispatchReport> {
        let endpoint = self.batch_endpoint();
        let payload = BatchPayload { products: records };

        info!("Sending {} records to {}", records.len(), endpoint);

        let (response, attempts) = self
            .send_with_retries(&endpoint, RetryPolicy::ConnectFailures, || {
                self.http.post(&endpoint).json(&payload)
            })
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(&endpoint, e))?;

        if !status.is_success() {
            return Err(Error::service_rejection(&endpoint, status.as_u16(), body));
        }

        let acknowledgment = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => {
                debug!("Acknowledgment from {} is not JSON, keeping raw text", endpoint);
                serde_json::Value::String(body)
            }
        };

        Ok(DispatchReport {
            endpoint,
            status: status.as_u16(),
            records_sent: records.len(),
            attempts,
            acknowledgment,
        })
    }

    /// GET the current product list
    pub async fn fetch_products(&self) -> Result<Vec<CatalogProduct>> {
        let endpoint = self.products_endpoint();
        info!("Fetching products from {}", endpoint);

        let (response, _) = self
            .send_with_retries(&endpoint, RetryPolicy::AnyTransport, || {
                self.http.get(&endpoint)
            })
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(&endpoint, e))?;

        if !status.is_success() {
            return Err(Error::service_rejection(&endpoint, status.as_u16(), body));
        }

        let listing: ProductListing = serde_json::from_str(&body)
            .map_err(|e| Error::response_decode(&endpoint, format!("not a product list: {}", e)))?;

        let products = listing.into_products();
        debug!("Catalog returned {} products", products.len());
        Ok(products)
    }

    /// Send a request, retrying failures the policy allows up to `max_retries` times
    async fn send_with_retries<F>(
        &self,
        endpoint: &str,
        policy: RetryPolicy,
        build: F,
    ) -> Result<(Response, u32)>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            match build().send().await {
                Ok(response) => return Ok((response, attempt)),
                Err(e) if attempt <= self.config.max_retries && policy.allows(&e) => {
                    warn!(
                        "Attempt {} to {} failed: {}; retrying in {:?}",
                        attempt,
                        endpoint,
                        e,
                        self.config.retry_delay()
                    );
                    sleep(self.config.retry_delay()).await;
                }
                Err(e) => return Err(Error::transport(endpoint, e)),
            }
        }
    }
}

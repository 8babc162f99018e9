// Suppliers - fetch and translate each supplier's native hotel payload
//
// Three suppliers, each with its own field names and shapes. Every supplier
// turns its payload into raw HotelRecords in payload order; the merge core
// never sees supplier JSON.

use async_trait::async_trait;
use hotel_common::config::SupplierConfig;
use hotel_common::HotelRecord;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod acme;
pub mod fields;
pub mod paperflies;
pub mod patagonia;

pub use acme::AcmeSupplier;
pub use paperflies::PaperfliesSupplier;
pub use patagonia::PatagoniaSupplier;

const USER_AGENT: &str = concat!("hotel-merger/", env!("CARGO_PKG_VERSION"));

/// Supplier fetch/parse errors
#[derive(Error, Debug)]
pub enum SupplierError {
    /// Transport failure or undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Payload (or one item of it) does not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Supplier trait - one implementation per data source
#[async_trait]
pub trait Supplier: Send + Sync {
    /// Supplier identifier (e.g., "acme")
    fn name(&self) -> &'static str;

    /// Endpoint returning a JSON array of hotels
    fn endpoint(&self) -> &str;

    /// Translate one native item into a raw record
    fn parse(&self, item: &Value) -> Result<HotelRecord, SupplierError>;

    /// Translate a whole payload
    ///
    /// The payload must be a JSON array. Items that fail to parse are logged
    /// and dropped; the rest keep their payload order.
    fn parse_payload(&self, payload: &Value) -> Result<Vec<HotelRecord>, SupplierError> {
        let items = payload.as_array().ok_or_else(|| {
            SupplierError::Parse(format!("{}: expected a JSON array", self.name()))
        })?;

        let records = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match self.parse(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(supplier = self.name(), index, error = %e, "Skipping supplier item");
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// GET the endpoint and translate the payload
    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<HotelRecord>, SupplierError> {
        debug!(supplier = self.name(), url = self.endpoint(), "Fetching supplier data");

        let response = client.get(self.endpoint()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SupplierError::Status {
                url: self.endpoint().to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&body)
            .map_err(|e| SupplierError::Parse(format!("{}: {}", self.name(), e)))?;

        self.parse_payload(&payload)
    }
}

/// The three suppliers, in merge order
pub fn default_suppliers(config: &SupplierConfig) -> Vec<Box<dyn Supplier>> {
    vec![
        Box::new(AcmeSupplier::new(config.acme_url.clone())),
        Box::new(PatagoniaSupplier::new(config.patagonia_url.clone())),
        Box::new(PaperfliesSupplier::new(config.paperflies_url.clone())),
    ]
}

/// Build the shared HTTP client
pub fn build_client(config: &SupplierConfig) -> Result<reqwest::Client, SupplierError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout())
        .build()?;
    Ok(client)
}

/// Fetch every supplier concurrently
///
/// Results are concatenated in registry order, whatever order the requests
/// complete in. A failed supplier is logged and contributes nothing.
pub async fn fetch_all(suppliers: &[Box<dyn Supplier>], client: &reqwest::Client) -> Vec<HotelRecord> {
    let results =
        futures::future::join_all(suppliers.iter().map(|supplier| supplier.fetch(client))).await;

    let mut records = Vec::new();
    for (supplier, result) in suppliers.iter().zip(results) {
        match result {
            Ok(batch) => {
                info!(supplier = supplier.name(), records = batch.len(), "Supplier fetched");
                records.extend(batch);
            }
            Err(e) => {
                warn!(supplier = supplier.name(), error = %e, "Supplier failed; skipping");
            }
        }
    }

    records
}

/// Item must be a JSON object
pub(crate) fn expect_object<'a>(
    supplier: &str,
    item: &'a Value,
) -> Result<&'a fields::Object, SupplierError> {
    item.as_object()
        .ok_or_else(|| SupplierError::Parse(format!("{}: item is not an object", supplier)))
}

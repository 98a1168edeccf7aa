//! HTTP client for the sheet export.

use std::time::Duration;

use url::Url;

use vitrine_catalog::Product;

use crate::envelope::parse_export;
use crate::error::AdapterError;

const DEFAULT_BASE_URL: &str = "https://docs.google.com";
const DEFAULT_SHEET_NAME: &str = "Sheet1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the tabular export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    /// Export host; overridable so tests can point at a local stub.
    pub base_url: String,
    /// Explicit bounded request timeout (transport defaults are not relied
    /// upon).
    pub timeout: Duration,
}

impl SheetsConfig {
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// The gviz table export URL for this sheet.
    pub fn export_url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!(
                "{}/spreadsheets/d/{}/gviz/tq",
                self.base_url.trim_end_matches('/'),
                self.spreadsheet_id
            ),
            &[("tqx", "out:json"), ("sheet", self.sheet_name.as_str())],
        )
    }
}

/// Read-through adapter over the sheet export.
///
/// Each `fetch_products` call is one independent GET; invocations share no
/// mutable state. Any bounded-window reuse of the response belongs to the
/// caller.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    export_url: Url,
}

impl SheetsClient {
    pub fn new(config: &SheetsConfig) -> Result<Self, AdapterError> {
        let export_url = config
            .export_url()
            .map_err(|e| AdapterError::Fetch(format!("invalid export url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, export_url })
    }

    /// Fetch, unwrap, and map the export into the published product list.
    ///
    /// Idempotent and safe to retry; no side effects beyond the network
    /// read. No partial results are returned on error.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, AdapterError> {
        tracing::debug!(url = %self.export_url, "fetching catalog export");

        let response = self.http.get(self.export_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::Fetch(format!("upstream returned {status}")));
        }

        let body = response.text().await?;
        let products = parse_export(&body)?;
        tracing::debug!(count = products.len(), "catalog export parsed");
        Ok(products)
    }
}

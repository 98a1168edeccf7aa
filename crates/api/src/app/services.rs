//! Service wiring: the sheets client plus the bounded-window product cache.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use vitrine_catalog::{InquiryConfig, Product};
use vitrine_sheets::{AdapterError, SheetsClient};

use crate::config::ApiConfig;

struct CacheEntry {
    fetched_at: Instant,
    products: Arc<Vec<Product>>,
}

/// Shared per-process services injected into handlers via `Extension`.
pub struct AppServices {
    client: SheetsClient,
    inquiry: InquiryConfig,
    cache_ttl: Duration,
    // Lazily-filled cache; the mutex also serializes concurrent refreshes.
    cache: Mutex<Option<CacheEntry>>,
}

impl AppServices {
    pub fn new(config: &ApiConfig) -> Result<Self, AdapterError> {
        Ok(Self {
            client: SheetsClient::new(&config.sheets)?,
            inquiry: config.inquiry.clone(),
            cache_ttl: config.cache_ttl,
            cache: Mutex::new(None),
        })
    }

    pub fn inquiry_config(&self) -> &InquiryConfig {
        &self.inquiry
    }

    /// The published product list, reusing the upstream response within the
    /// configured window.
    ///
    /// Stale-within-window reads are acceptable; the cache is advisory. On
    /// refresh failure the error propagates and the expired entry is kept
    /// untouched (the next call retries).
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, AdapterError> {
        let mut cache = self.cache.lock().await;

        if let Some(entry) = cache.as_ref() {
            if entry.fetched_at.elapsed() < self.cache_ttl {
                return Ok(Arc::clone(&entry.products));
            }
        }

        let products = Arc::new(self.client.fetch_products().await?);
        *cache = Some(CacheEntry {
            fetched_at: Instant::now(),
            products: Arc::clone(&products),
        });

        Ok(products)
    }
}

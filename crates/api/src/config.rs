//! Environment-driven configuration with documented defaults.

use std::time::Duration;

use anyhow::Context;

use vitrine_catalog::InquiryConfig;
use vitrine_sheets::SheetsConfig;

// Defaults match the production deployment this service replaced.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SHEET_ID: &str = "1LN_9TUdI_mzvLMqtNyDaLaCkcClaPvdDTl_a0mZK998";
const DEFAULT_PHONE: &str = "5581999999999";
const DEFAULT_BUSINESS_NAME: &str = "B3 Ambientes Corporativos";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub sheets: SheetsConfig,
    pub inquiry: InquiryConfig,
    /// Bounded window for reusing the upstream response.
    pub cache_ttl: Duration,
}

impl ApiConfig {
    /// Read configuration from `VITRINE_*` environment variables, falling
    /// back to the documented defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut sheets = SheetsConfig::new(env_or("VITRINE_SHEET_ID", DEFAULT_SHEET_ID));
        if let Ok(name) = std::env::var("VITRINE_SHEET_NAME") {
            sheets.sheet_name = name;
        }
        if let Ok(base) = std::env::var("VITRINE_SHEETS_BASE_URL") {
            sheets.base_url = base;
        }
        if let Some(secs) = env_secs("VITRINE_UPSTREAM_TIMEOUT_SECS")? {
            sheets.timeout = secs;
        }

        let cache_ttl = env_secs("VITRINE_CACHE_TTL_SECS")?
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS));

        Ok(Self {
            bind_addr: env_or("VITRINE_BIND_ADDR", DEFAULT_BIND_ADDR),
            sheets,
            inquiry: InquiryConfig {
                phone: env_or("VITRINE_WHATSAPP_PHONE", DEFAULT_PHONE),
                business_name: env_or("VITRINE_BUSINESS_NAME", DEFAULT_BUSINESS_NAME),
            },
            cache_ttl,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_secs(key: &str) -> anyhow::Result<Option<Duration>> {
    match std::env::var(key) {
        Ok(raw) => {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("{key} must be a whole number of seconds, got {raw:?}"))?;
            Ok(Some(Duration::from_secs(secs)))
        }
        Err(_) => Ok(None),
    }
}

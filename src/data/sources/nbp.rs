//! NBP (Narodowy Bank Polski) reference-rate provider
//!
//! Serves table A mid rates quoted against PLN. The API answers 404 for a
//! span with no published business day and rejects spans longer than
//! [`MAX_SPAN_DAYS`].

use super::RateDataSource;
use crate::currency::{CurrencyCode, CurrencyInfo};
use crate::error::{FxError, Result};
use crate::types::{DateRange, RateRecord};
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

const NBP_BASE_URL: &str = "https://api.nbp.pl/api";

/// Longest span the NBP API accepts in a single rates query.
///
/// The core never enforces this; callers validating requests should, and an
/// oversized span simply comes back as a provider status error.
pub const MAX_SPAN_DAYS: i64 = 93;

/// NBP table A data source (no API key required)
pub struct NbpDataSource {
    client: Client,
    base_url: String,
}

/// Envelope for `/exchangerates/rates/a/{code}/{start}/{end}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatesEnvelope {
    code: String,
    rates: Vec<RateEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateEntry {
    effective_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    mid: Decimal,
}

/// One snapshot from `/exchangerates/tables/a`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableEnvelope {
    effective_date: NaiveDate,
    rates: Vec<TableEntry>,
}

#[derive(Debug, Deserialize)]
struct TableEntry {
    currency: String,
    code: String,
}

impl NbpDataSource {
    /// Create a source against the public NBP API
    pub fn new() -> Result<Self> {
        Self::with_base_url(NBP_BASE_URL)
    }

    /// Create a source against a custom API root (mirrors, stub servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn rates_url(&self, code: &CurrencyCode, span: DateRange) -> String {
        format!(
            "{}/exchangerates/rates/a/{}/{}/{}/?format=json",
            self.base_url, code, span.start, span.end
        )
    }

    fn table_url(&self) -> String {
        format!("{}/exchangerates/tables/a/?format=json", self.base_url)
    }
}

impl RateDataSource for NbpDataSource {
    async fn daily_rates(
        &self,
        code: &CurrencyCode,
        span: DateRange,
    ) -> Result<Option<Vec<RateRecord>>> {
        let response = self.client.get(self.rates_url(code, span)).send().await?;

        // 404 is the provider's "no data for this span" signal
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(FxError::Provider {
                status: response.status().as_u16(),
            });
        }

        let envelope: RatesEnvelope = response
            .json()
            .await
            .map_err(|e| FxError::MalformedResponse(format!("rates payload: {}", e)))?;

        log::debug!(
            "NBP returned {} quotations for {}",
            envelope.rates.len(),
            envelope.code
        );

        Ok(Some(
            envelope
                .rates
                .into_iter()
                .map(|entry| RateRecord::new(entry.effective_date, entry.mid))
                .collect(),
        ))
    }

    async fn currencies(&self) -> Result<Vec<CurrencyInfo>> {
        let response = self.client.get(self.table_url()).send().await?;

        if !response.status().is_success() {
            return Err(FxError::Provider {
                status: response.status().as_u16(),
            });
        }

        let tables: Vec<TableEnvelope> = response
            .json()
            .await
            .map_err(|e| FxError::MalformedResponse(format!("table payload: {}", e)))?;

        let Some(table) = tables.into_iter().next() else {
            log::warn!("NBP returned no table snapshot for the currency list");
            return Ok(Vec::new());
        };

        log::debug!(
            "NBP table of {} lists {} currencies",
            table.effective_date,
            table.rates.len()
        );

        let mut currencies = Vec::with_capacity(table.rates.len());
        for entry in table.rates {
            let code = CurrencyCode::new(&entry.code).map_err(|_| {
                FxError::MalformedResponse(format!("invalid currency code in table: {:?}", entry.code))
            })?;
            currencies.push(CurrencyInfo::new(code, entry.currency));
        }
        Ok(currencies)
    }
}

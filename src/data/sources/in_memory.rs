//! In-memory rate source
//!
//! Serves canned daily rates from memory. Used by the integration tests and
//! by consumers that want to run the converter against preloaded data.

use super::RateDataSource;
use crate::currency::{CurrencyCode, CurrencyInfo};
use crate::error::Result;
use crate::types::{DateRange, RateRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Rate source backed by a per-currency record list
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateSource {
    rates: HashMap<CurrencyCode, Vec<RateRecord>>,
    currencies: Vec<CurrencyInfo>,
}

impl InMemoryRateSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one daily rate for a currency
    pub fn add_rate(&mut self, code: CurrencyCode, date: NaiveDate, mid: Decimal) {
        self.rates
            .entry(code)
            .or_default()
            .push(RateRecord::new(date, mid));
    }

    /// Add multiple daily rates for a currency
    pub fn add_rates(
        &mut self,
        code: CurrencyCode,
        entries: impl IntoIterator<Item = (NaiveDate, Decimal)>,
    ) {
        let records = self.rates.entry(code).or_default();
        records.extend(
            entries
                .into_iter()
                .map(|(date, mid)| RateRecord::new(date, mid)),
        );
    }

    /// Register a currency for the currency table
    pub fn add_currency(&mut self, info: CurrencyInfo) {
        self.currencies.push(info);
    }
}

impl RateDataSource for InMemoryRateSource {
    async fn daily_rates(
        &self,
        code: &CurrencyCode,
        span: DateRange,
    ) -> Result<Option<Vec<RateRecord>>> {
        let mut records: Vec<RateRecord> = self
            .rates
            .get(code)
            .map(|all| {
                all.iter()
                    .filter(|record| span.contains(record.effective_date))
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        // nothing in the span is the provider's no-data condition
        if records.is_empty() {
            return Ok(None);
        }
        records.sort_by_key(|record| record.effective_date);
        Ok(Some(records))
    }

    async fn currencies(&self) -> Result<Vec<CurrencyInfo>> {
        Ok(self.currencies.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_daily_rates_filters_to_span() {
        let mut source = InMemoryRateSource::new();
        let eur = CurrencyCode::new("EUR").unwrap();
        source.add_rates(
            eur.clone(),
            [
                (date(2024, 1, 1), dec!(4.30)),
                (date(2024, 1, 2), dec!(4.32)),
                (date(2024, 2, 1), dec!(4.40)),
            ],
        );

        let span = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        let records = source.daily_rates(&eur, span).await.unwrap().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mid, dec!(4.30));
        assert_eq!(records[1].mid, dec!(4.32));
    }

    #[tokio::test]
    async fn test_daily_rates_empty_span_is_no_data() {
        let mut source = InMemoryRateSource::new();
        let eur = CurrencyCode::new("EUR").unwrap();
        source.add_rate(eur.clone(), date(2024, 1, 1), dec!(4.30));

        let span = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));
        assert!(source.daily_rates(&eur, span).await.unwrap().is_none());

        let unknown = CurrencyCode::new("USD").unwrap();
        let span = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        assert!(source.daily_rates(&unknown, span).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_daily_rates_sorted_by_date() {
        let mut source = InMemoryRateSource::new();
        let eur = CurrencyCode::new("EUR").unwrap();
        source.add_rate(eur.clone(), date(2024, 1, 3), dec!(4.33));
        source.add_rate(eur.clone(), date(2024, 1, 1), dec!(4.30));

        let span = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        let records = source.daily_rates(&eur, span).await.unwrap().unwrap();

        assert_eq!(records[0].effective_date, date(2024, 1, 1));
        assert_eq!(records[1].effective_date, date(2024, 1, 3));
    }
}

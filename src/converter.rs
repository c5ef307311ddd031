//! Cross-rate conversion engine
//!
//! Derives the daily exchange rate between two currencies through the shared
//! base currency: `rate = rate1_to_base / rate2_to_base`. Days with no
//! quotation on either side are skipped, never errors.

use crate::currency::{CurrencyCode, CurrencyInfo};
use crate::data::fetcher::RateFetcher;
use crate::data::sources::RateDataSource;
use crate::error::{FxError, Result};
use crate::types::{ConvertedRate, DateRange, RateMap};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const BASE_CURRENCY_NAME: &str = "Polski Złoty";

/// Cross-rate converter over a rate data source
///
/// Each conversion builds its rate maps from scratch and discards them;
/// there is no caching and no shared state between requests. Dropping the
/// future returned by [`convert`](CrossRateConverter::convert) abandons any
/// in-flight fetch without surfacing partial results.
pub struct CrossRateConverter<S> {
    fetcher: RateFetcher<S>,
}

/// One leg of a conversion: the implicit base currency, or fetched rates
enum LegRates {
    Base,
    Fetched(RateMap),
}

impl LegRates {
    fn rate_on(&self, date: NaiveDate) -> Option<Decimal> {
        match self {
            LegRates::Base => Some(Decimal::ONE),
            LegRates::Fetched(rates) => rates.get(&date).copied(),
        }
    }
}

impl<S: RateDataSource> CrossRateConverter<S> {
    /// Create a converter over a rate data source
    pub fn new(source: S) -> Self {
        Self {
            fetcher: RateFetcher::new(source),
        }
    }

    /// Compute the daily cross-rate series for a currency pair over a span.
    ///
    /// The two leg fetches run concurrently; a base-currency leg never hits
    /// the provider. The output is in ascending date order with at most one
    /// entry per date, and contains no entry for a date missing a quotation
    /// on either side. A failed leg fetch aborts the whole conversion with
    /// [`FxError::ConversionFailure`]; no partial series is ever returned.
    ///
    /// Callers are expected to have validated the request already
    /// (`code1 != code2`, `span.start <= span.end`, span within the
    /// provider's limit).
    pub async fn convert(
        &self,
        code1: &CurrencyCode,
        code2: &CurrencyCode,
        span: DateRange,
    ) -> Result<Vec<ConvertedRate>> {
        let (leg1, leg2) = tokio::try_join!(
            self.leg_rates(code1, span),
            self.leg_rates(code2, span)
        )?;

        let mut converted = Vec::new();
        for date in span.days() {
            match (leg1.rate_on(date), leg2.rate_on(date)) {
                (Some(rate1), Some(rate2)) => {
                    converted.push(ConvertedRate::new(date, rate1 / rate2));
                }
                _ => {
                    log::debug!("{}: no {}/{} quotation, skipping", date, code1, code2);
                }
            }
        }
        Ok(converted)
    }

    /// Resolve one leg; the base currency is implicit and never fetched
    async fn leg_rates(&self, code: &CurrencyCode, span: DateRange) -> Result<LegRates> {
        if code.is_base() {
            return Ok(LegRates::Base);
        }

        let rates = self
            .fetcher
            .fetch_rates(code, span)
            .await
            .map_err(|cause| FxError::ConversionFailure {
                code: code.clone(),
                cause: Box::new(cause),
            })?;
        Ok(LegRates::Fetched(rates))
    }

    /// Currencies the provider currently quotes.
    ///
    /// The base currency is prepended (the provider never lists it) and the
    /// quoted currencies follow sorted by display name. An empty provider
    /// table yields an empty list.
    pub async fn available_currencies(&self) -> Result<Vec<CurrencyInfo>> {
        let mut quoted = self
            .fetcher
            .source()
            .currencies()
            .await
            .map_err(|cause| FxError::CurrencyListFailure {
                cause: Box::new(cause),
            })?;

        if quoted.is_empty() {
            log::warn!("provider returned an empty currency table");
            return Ok(Vec::new());
        }

        quoted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut currencies = Vec::with_capacity(quoted.len() + 1);
        currencies.push(CurrencyInfo::new(CurrencyCode::base(), BASE_CURRENCY_NAME));
        currencies.extend(quoted);
        Ok(currencies)
    }
}

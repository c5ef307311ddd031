//! Rate fetching: one provider call per currency and span

use crate::currency::CurrencyCode;
use crate::data::sources::RateDataSource;
use crate::error::{FxError, Result};
use crate::types::{DateRange, RateMap};
use rust_decimal::Decimal;

/// Fetches per-day base-currency rates for single currencies
///
/// Never call [`fetch_rates`](RateFetcher::fetch_rates) for the base
/// currency itself; its rate is implicit and the converter skips the fetch.
pub struct RateFetcher<S> {
    source: S,
}

impl<S: RateDataSource> RateFetcher<S> {
    /// Create a fetcher over a rate data source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Access the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the rate map for one currency over an inclusive span.
    ///
    /// Issues a single provider request for the whole span. A span with no
    /// published business day comes back as an empty map, not an error;
    /// transport and decode failures surface as
    /// [`FxError::FetchFailure`] naming the currency and span.
    pub async fn fetch_rates(&self, code: &CurrencyCode, span: DateRange) -> Result<RateMap> {
        let records = match self.source.daily_rates(code, span).await {
            Ok(records) => records,
            Err(cause) => return Err(Self::fetch_failure(code, span, cause)),
        };

        let Some(records) = records else {
            log::warn!("no rates published for {} over {}", code, span);
            return Ok(RateMap::new());
        };

        let mut rates = RateMap::with_capacity(records.len());
        for record in records {
            if record.mid <= Decimal::ZERO {
                let cause = FxError::MalformedResponse(format!(
                    "non-positive mid rate {} on {}",
                    record.mid, record.effective_date
                ));
                return Err(Self::fetch_failure(code, span, cause));
            }
            rates.insert(record.effective_date, record.mid);
        }
        Ok(rates)
    }

    fn fetch_failure(code: &CurrencyCode, span: DateRange, cause: FxError) -> FxError {
        FxError::FetchFailure {
            code: code.clone(),
            span,
            cause: Box::new(cause),
        }
    }
}

//! Rate data sources
//!
//! Providers quote every currency against the base currency, one mid rate
//! per published business day.

pub mod in_memory;
pub mod nbp;

pub use in_memory::InMemoryRateSource;
pub use nbp::{NbpDataSource, MAX_SPAN_DAYS};

use crate::currency::{CurrencyCode, CurrencyInfo};
use crate::error::Result;
use crate::types::{DateRange, RateRecord};
use std::future::Future;

/// Trait for daily reference-rate providers
///
/// `daily_rates` resolves to `Ok(None)` when the provider has published
/// nothing for the span; that is an expected condition, distinct from a
/// transport or decode error. Dropping a returned future abandons the
/// in-flight request.
pub trait RateDataSource: Send + Sync {
    /// Fetch the daily mid rates for one currency over an inclusive span
    fn daily_rates(
        &self,
        code: &CurrencyCode,
        span: DateRange,
    ) -> impl Future<Output = Result<Option<Vec<RateRecord>>>> + Send;

    /// Fetch the provider's current currency table
    fn currencies(&self) -> impl Future<Output = Result<Vec<CurrencyInfo>>> + Send;
}

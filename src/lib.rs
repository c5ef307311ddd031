//! # fx_rates
//!
//! Currency cross-rate conversion engine backed by daily central-bank
//! reference rates.
//!
//! Every provider rate is quoted against a fixed base currency (PLN); the
//! cross rate between two currencies on a date is the quotient of their
//! base-currency rates. Days with no quotation on either side are skipped,
//! and range statistics (average, extrema and their dates) are computed
//! over the resulting series.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use fx_rates::prelude::*;
//!
//! # async fn run() -> fx_rates::error::Result<()> {
//! let converter = CrossRateConverter::new(NbpDataSource::new()?);
//!
//! let usd = CurrencyCode::new("USD")?;
//! let eur = CurrencyCode::new("EUR")?;
//! let span = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//! );
//!
//! let series = converter.convert(&usd, &eur, span).await?;
//! if let Some(stats) = summarize(&series) {
//!     println!("{} days, average {}", stats.count, stats.average);
//! }
//! # Ok(())
//! # }
//! ```

pub mod converter;
pub mod currency;
pub mod data;
pub mod error;
pub mod statistics;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::converter::CrossRateConverter;
    pub use crate::currency::{CurrencyCode, CurrencyInfo, BASE_CURRENCY};
    pub use crate::data::sources::{
        InMemoryRateSource, NbpDataSource, RateDataSource, MAX_SPAN_DAYS,
    };
    pub use crate::data::RateFetcher;
    pub use crate::error::{FxError, Result};
    pub use crate::statistics::{summarize, RateStatistics};
    pub use crate::types::*;
}

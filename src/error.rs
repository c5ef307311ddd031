//! Error types for the cross-rate engine

use crate::currency::CurrencyCode;
use crate::types::DateRange;
use thiserror::Error;

/// Main error type for rate fetching and conversion
///
/// Two conditions are deliberately *not* errors: a span with no published
/// rates (the fetcher returns an empty map) and an empty conversion or
/// statistics result (empty vec / `None`).
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate provider returned status {status}")]
    Provider { status: u16 },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Failed to fetch rates for {code} over {span}")]
    FetchFailure {
        code: CurrencyCode,
        span: DateRange,
        #[source]
        cause: Box<FxError>,
    },

    #[error("Cross-rate conversion failed on the {code} leg")]
    ConversionFailure {
        code: CurrencyCode,
        #[source]
        cause: Box<FxError>,
    },

    #[error("Failed to fetch the available currency list")]
    CurrencyListFailure {
        #[source]
        cause: Box<FxError>,
    },
}

/// Result type alias for rate operations
pub type Result<T> = std::result::Result<T, FxError>;

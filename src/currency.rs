//! Currency codes and provider currency metadata

use crate::error::{FxError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The currency all provider rates are quoted against.
///
/// Carries an implicit rate of exactly 1.0 on every date and is never
/// fetched from the provider.
pub const BASE_CURRENCY: &str = "PLN";

/// ISO 4217 currency code: three uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse and validate a currency code, normalizing to uppercase
    pub fn new(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FxError::InvalidCurrency(code.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The base currency code
    pub fn base() -> Self {
        Self(BASE_CURRENCY.to_string())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the base currency
    pub fn is_base(&self) -> bool {
        self.0 == BASE_CURRENCY
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One currency the provider quotes: code plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub code: CurrencyCode,
    pub name: String,
}

impl CurrencyInfo {
    /// Create currency metadata
    pub fn new(code: CurrencyCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}
